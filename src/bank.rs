//! Session registry of clients and accounts.
//!
//! The `Bank` owns all state for one interactive session and exposes the
//! operations the menu shell calls into. Nothing survives the process:
//! there is no persistence layer by design.

use crate::account::{Account, AccountKind};
use crate::client::Client;
use crate::error::{BankError, Result};
use crate::money::Money;
use crate::transaction::Transaction;
use log::{debug, warn};
use std::fmt::Write as _;

/// In-memory registry for one banking session.
///
/// Clients and accounts live in creation order and are never deleted, so
/// account number `n` always sits at index `n - 1`. Tax ID lookup is a
/// linear scan returning the first exact match; uniqueness is enforced at
/// registration.
#[derive(Debug, Default)]
pub struct Bank {
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Bank {
    /// Creates an empty session.
    pub fn new() -> Self {
        Bank::default()
    }

    /// Registered clients in registration order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Looks up a client by exact tax ID match.
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id == tax_id)
    }

    /// Looks up an account by number.
    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(number.checked_sub(1)? as usize)
    }

    /// Registers a new client.
    ///
    /// Fails with `DuplicateClient` if the tax ID is already taken; the
    /// registry is unchanged on failure.
    pub fn register_client(
        &mut self,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<()> {
        let tax_id = tax_id.into();
        if self.find_client(&tax_id).is_some() {
            warn!("rejected duplicate client registration for tax ID {tax_id}");
            return Err(BankError::DuplicateClient);
        }

        debug!("registered client with tax ID {tax_id}");
        self.clients
            .push(Client::new(name, birth_date, tax_id, address));
        Ok(())
    }

    /// Opens a checking account with default ceilings for an existing client.
    ///
    /// The account number is the count of existing accounts plus one. The
    /// account is appended to the registry and to the client's own list.
    /// Returns the new account number.
    pub fn open_account(&mut self, tax_id: &str) -> Result<u32> {
        let client = self
            .clients
            .iter_mut()
            .find(|client| client.tax_id == tax_id)
            .ok_or(BankError::ClientNotFound)?;

        let number = self.accounts.len() as u32 + 1;
        client.add_account(number);
        self.accounts
            .push(Account::new(number, tax_id, AccountKind::checking()));

        debug!("opened account {number} for tax ID {tax_id}");
        Ok(number)
    }

    /// Deposits into the client's first account.
    pub fn deposit(&mut self, tax_id: &str, amount: Money) -> Result<()> {
        self.run_transaction(tax_id, Transaction::Deposit(amount))
    }

    /// Withdraws from the client's first account.
    pub fn withdraw(&mut self, tax_id: &str, amount: Money) -> Result<()> {
        self.run_transaction(tax_id, Transaction::Withdrawal(amount))
    }

    /// Resolves the client and their first account, then lets the client
    /// execute the transaction against it.
    fn run_transaction(&mut self, tax_id: &str, transaction: Transaction) -> Result<()> {
        let client_idx = self
            .clients
            .iter()
            .position(|client| client.tax_id == tax_id)
            .ok_or(BankError::ClientNotFound)?;
        let number = self.clients[client_idx]
            .first_account()
            .ok_or(BankError::AccountNotFound)?;

        // Accounts are never deleted, so the number resolves to a live slot.
        let account = self
            .accounts
            .get_mut(number as usize - 1)
            .ok_or(BankError::AccountNotFound)?;

        match self.clients[client_idx].execute(account, transaction) {
            Ok(()) => {
                debug!(
                    "applied {kind} of {amount} on account {number}",
                    kind = transaction.kind(),
                    amount = transaction.amount(),
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    "rejected {kind} of {amount} on account {number}: {e}",
                    kind = transaction.kind(),
                    amount = transaction.amount(),
                );
                Err(e)
            }
        }
    }

    /// Renders the statement for the client's first account.
    ///
    /// One line per applied transaction in insertion order, then the
    /// current balance, all amounts with two decimal places.
    pub fn statement(&self, tax_id: &str) -> Result<String> {
        let client = self.find_client(tax_id).ok_or(BankError::ClientNotFound)?;
        let number = client.first_account().ok_or(BankError::AccountNotFound)?;
        let account = self.account(number).ok_or(BankError::AccountNotFound)?;

        let mut out = String::new();
        let _ = writeln!(out, "---------- STATEMENT ----------");
        if account.history().is_empty() {
            let _ = writeln!(out, "No transactions recorded.");
        } else {
            for record in account.history().entries() {
                let _ = writeln!(
                    out,
                    "{timestamp}  {kind:<10}  $ {amount}",
                    timestamp = record.timestamp,
                    kind = record.kind.to_string(),
                    amount = record.amount,
                );
            }
        }
        let _ = writeln!(out, "Balance: $ {}", account.balance());
        let _ = write!(out, "-------------------------------");
        Ok(out)
    }

    /// Formatted summary of one account: agency, number, and holder name.
    pub fn account_summary(&self, account: &Account) -> String {
        let holder = self
            .find_client(account.owner_tax_id())
            .map(|client| client.name.as_str())
            .unwrap_or("<unknown>");

        format!(
            "Agency:\t{agency}\nAccount:\t{number}\nHolder:\t{holder}",
            agency = account.agency(),
            number = account.number(),
        )
    }

    /// Summaries for every account in creation order.
    pub fn account_summaries(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|account| self.account_summary(account))
            .collect()
    }
}
