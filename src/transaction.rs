//! Transaction variants and their application to an account.

use crate::account::Account;
use crate::error::Result;
use crate::history::EntryKind;
use crate::money::Money;

/// A monetary operation with a fixed amount, applied to one account.
///
/// A transaction is transient: it is built for a single user action,
/// consumed by [`apply`](Transaction::apply), and only its effect survives
/// as a record in the account's history. The set of variants is closed, so
/// dispatch is a plain `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit the amount to the account.
    Deposit(Money),

    /// Debit the amount from the account, subject to validation.
    Withdrawal(Money),
}

impl Transaction {
    /// The fixed amount carried by this transaction.
    pub fn amount(&self) -> Money {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// The ledger entry kind this transaction produces.
    pub fn kind(&self) -> EntryKind {
        match self {
            Transaction::Deposit(_) => EntryKind::Deposit,
            Transaction::Withdrawal(_) => EntryKind::Withdrawal,
        }
    }

    /// Applies the transaction to an account.
    ///
    /// Delegates to the account's `deposit`/`withdraw` validation and, only
    /// when the balance mutation succeeds, appends a record to the
    /// account's history. History never sees a failed transaction.
    pub fn apply(self, account: &mut Account) -> Result<()> {
        match self {
            Transaction::Deposit(amount) => account.deposit(amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(amount)?,
        }

        account.record(self.kind(), self.amount());
        Ok(())
    }
}
