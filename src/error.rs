//! Error types for the banking simulator.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur while operating on clients and accounts.
///
/// Every domain failure is non-fatal: the session continues, and the
/// `Display` string doubles as the user-facing message printed by the shell.
#[derive(Error, Debug)]
pub enum BankError {
    /// Withdrawal amount exceeds the current balance
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Non-positive amount on a deposit or withdrawal
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal amount exceeds the per-transaction ceiling
    #[error("amount {amount} exceeds the withdrawal limit of {limit}")]
    LimitExceeded { amount: Money, limit: Money },

    /// The withdrawal count ceiling has been reached
    #[error("withdrawal limit of {0} operations reached")]
    WithdrawalCountExceeded(u32),

    /// No client registered with the given tax ID
    #[error("client not found")]
    ClientNotFound,

    /// The client has no account to operate on
    #[error("client has no account")]
    AccountNotFound,

    /// A client with the given tax ID already exists
    #[error("a client with this tax ID already exists")]
    DuplicateClient,

    /// Console I/O failed in the shell
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
