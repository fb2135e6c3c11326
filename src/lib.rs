//! # Teller
//!
//! A single-process, in-memory banking simulator: clients, checking
//! accounts, and deposit/withdrawal transactions with an append-only
//! per-account ledger.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`
//! - **Closed variants**: transactions and account kinds are tagged unions
//!   dispatched by `match`, not trait objects
//! - **Accurate ledger**: history records successful operations only
//! - **Explicit state**: one [`Bank`] value owns the whole session, no globals
//!
//! ## Example
//!
//! ```
//! use teller::{Bank, Money};
//! use std::str::FromStr;
//!
//! let mut bank = Bank::new();
//! bank.register_client("Alice", "01-01-1990", "123", "1 Main St").unwrap();
//! bank.open_account("123").unwrap();
//! bank.deposit("123", Money::from_str("100.0").unwrap()).unwrap();
//! assert_eq!(bank.account(1).unwrap().balance().to_string(), "100.00");
//! ```

pub mod account;
pub mod bank;
pub mod client;
pub mod error;
pub mod history;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind, AGENCY_CODE};
pub use bank::Bank;
pub use client::Client;
pub use error::{BankError, Result};
pub use history::{EntryKind, History, TransactionRecord};
pub use money::Money;
pub use transaction::Transaction;
