//! Client records and transaction delegation.

use crate::account::Account;
use crate::error::Result;
use crate::transaction::Transaction;

/// A registered client holding identification data and their accounts.
///
/// The tax ID is the session-wide unique lookup key; uniqueness is enforced
/// by the [`Bank`](crate::bank::Bank) registry at registration time, not
/// here. The birth date is kept as an unvalidated `dd-mm-yyyy` string.
/// Accounts are referenced by number; the registry owns the account values.
#[derive(Debug, Clone)]
pub struct Client {
    /// Full name
    pub name: String,

    /// Birth date as entered (`dd-mm-yyyy`, unvalidated)
    pub birth_date: String,

    /// Unique identifier used for lookup
    pub tax_id: String,

    /// Free-form postal address
    pub address: String,

    accounts: Vec<u32>,
}

impl Client {
    /// Creates a client with no accounts.
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Client {
            name: name.into(),
            birth_date: birth_date.into(),
            tax_id: tax_id.into(),
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// Account numbers owned by this client, in creation order.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    /// The client's first account, if any. Menu operations act on it.
    pub fn first_account(&self) -> Option<u32> {
        self.accounts.first().copied()
    }

    /// Appends an account number. Uniqueness is the caller's responsibility.
    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Executes a transaction against an account.
    ///
    /// Pure delegation: the client is the nominal initiator but holds no
    /// transactional logic of its own.
    pub fn execute(&self, account: &mut Account, transaction: Transaction) -> Result<()> {
        transaction.apply(account)
    }
}
