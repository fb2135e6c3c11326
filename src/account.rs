//! Account model and deposit/withdrawal validation.
//!
//! The balance is private and changes only through `deposit` and `withdraw`;
//! a failed operation never mutates state.

use crate::error::{BankError, Result};
use crate::history::{EntryKind, History, TransactionRecord};
use crate::money::Money;

/// Fixed branch identifier attached to every account.
pub const AGENCY_CODE: &str = "0001";

/// Distinguishes plain accounts from checking accounts with ceilings.
///
/// A checking account enforces two ceilings before the base validation
/// runs: a per-transaction withdrawal limit and a per-session withdrawal
/// count limit.
#[derive(Debug, Clone)]
pub enum AccountKind {
    /// No ceilings beyond the base balance/positivity checks.
    Standard,

    /// Checking account with withdrawal ceilings.
    Checking {
        /// Maximum amount for a single withdrawal
        withdrawal_limit: Money,

        /// Maximum number of withdrawals over the session
        withdrawal_count_limit: u32,
    },
}

impl AccountKind {
    /// Default per-transaction withdrawal ceiling for checking accounts.
    pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;

    /// Default withdrawal count ceiling for checking accounts.
    pub const DEFAULT_WITHDRAWAL_COUNT_LIMIT: u32 = 3;

    /// A checking account with the default ceilings (limit 500, count 3).
    pub fn checking() -> Self {
        AccountKind::Checking {
            withdrawal_limit: Money::from(Self::DEFAULT_WITHDRAWAL_LIMIT),
            withdrawal_count_limit: Self::DEFAULT_WITHDRAWAL_COUNT_LIMIT,
        }
    }
}

/// A bank account: number, owner back-reference, balance, and ledger.
///
/// The owner is referenced by tax ID; the [`Bank`](crate::bank::Bank)
/// registry resolves it back to the client record. Accounts live for the
/// whole session and are never deleted.
#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    owner_tax_id: String,
    balance: Money,
    kind: AccountKind,
    history: History,
}

impl Account {
    /// Creates an account with a zero balance and an empty history.
    pub fn new(number: u32, owner_tax_id: impl Into<String>, kind: AccountKind) -> Self {
        Account {
            number,
            owner_tax_id: owner_tax_id.into(),
            balance: Money::ZERO,
            kind,
            history: History::new(),
        }
    }

    /// Account number, unique within the session.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The fixed agency code.
    pub fn agency(&self) -> &'static str {
        AGENCY_CODE
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Tax ID of the owning client.
    pub fn owner_tax_id(&self) -> &str {
        &self.owner_tax_id
    }

    /// The account kind (ceiling configuration).
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// The account's ledger of applied transactions.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Deposits funds into the account.
    ///
    /// A non-positive amount fails with `InvalidAmount` and is never
    /// recorded in history.
    pub fn deposit(&mut self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(amount));
        }

        self.balance += amount;
        Ok(())
    }

    /// Withdraws funds from the account.
    ///
    /// Checking accounts enforce their ceilings first, in order: the
    /// per-transaction limit, then the session withdrawal count. The base
    /// checks then reject amounts above the balance and non-positive
    /// amounts. The balance is untouched on any failure.
    pub fn withdraw(&mut self, amount: Money) -> Result<()> {
        if let AccountKind::Checking {
            withdrawal_limit,
            withdrawal_count_limit,
        } = self.kind
        {
            if amount > withdrawal_limit {
                return Err(BankError::LimitExceeded {
                    amount,
                    limit: withdrawal_limit,
                });
            }
            if self.history.withdrawal_count() >= withdrawal_count_limit as usize {
                return Err(BankError::WithdrawalCountExceeded(withdrawal_count_limit));
            }
        }

        if amount > self.balance {
            return Err(BankError::InsufficientBalance);
        }
        if !amount.is_positive() {
            return Err(BankError::InvalidAmount(amount));
        }

        self.balance -= amount;
        Ok(())
    }

    /// Appends a ledger record for an operation that already succeeded.
    pub(crate) fn record(&mut self, kind: EntryKind, amount: Money) {
        self.history.append(TransactionRecord::now(kind, amount));
    }
}
