//! Append-only transaction ledger for one account.
//!
//! History records only *effected* operations: a record is appended after a
//! balance mutation succeeds, never on failure.

use crate::money::Money;
use chrono::Local;
use std::fmt;

/// The kind of an effected operation, derived from the transaction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => write!(f, "Deposit"),
            EntryKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Immutable snapshot of one applied transaction.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    /// What was applied
    pub kind: EntryKind,

    /// The amount that was applied
    pub amount: Money,

    /// Wall-clock time of recording, formatted `dd-mm-yyyy HH:MM:SS`
    pub timestamp: String,
}

impl TransactionRecord {
    /// Creates a record stamped with the current wall-clock time.
    ///
    /// The timestamp reflects the moment of recording, not the moment the
    /// transaction object was created.
    pub fn now(kind: EntryKind, amount: Money) -> Self {
        TransactionRecord {
            kind,
            amount,
            timestamp: Local::now().format("%d-%m-%Y %H:%M:%S").to_string(),
        }
    }
}

/// Ordered, append-only log of applied transactions.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<TransactionRecord>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        History::default()
    }

    /// Appends a record. Insertion order is preserved and entries are
    /// never removed.
    pub fn append(&mut self, record: TransactionRecord) {
        self.entries.push(record);
    }

    /// Read-only view of all entries in insertion order.
    pub fn entries(&self) -> &[TransactionRecord] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of withdrawal entries over the whole session.
    ///
    /// This is a lifetime count, not a calendar-day window; the checking
    /// account count ceiling is enforced against it.
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|record| record.kind == EntryKind::Withdrawal)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = History::new();
        history.append(TransactionRecord::now(EntryKind::Deposit, money("10.0")));
        history.append(TransactionRecord::now(EntryKind::Withdrawal, money("3.0")));
        history.append(TransactionRecord::now(EntryKind::Deposit, money("5.0")));

        let kinds: Vec<EntryKind> = history.entries().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Deposit, EntryKind::Withdrawal, EntryKind::Deposit]
        );
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_withdrawal_count_ignores_deposits() {
        let mut history = History::new();
        assert_eq!(history.withdrawal_count(), 0);

        history.append(TransactionRecord::now(EntryKind::Deposit, money("100.0")));
        history.append(TransactionRecord::now(EntryKind::Withdrawal, money("10.0")));
        history.append(TransactionRecord::now(EntryKind::Withdrawal, money("20.0")));

        assert_eq!(history.withdrawal_count(), 2);
    }

    #[test]
    fn test_record_timestamp_format() {
        let record = TransactionRecord::now(EntryKind::Deposit, money("1.0"));
        // dd-mm-yyyy HH:MM:SS
        assert_eq!(record.timestamp.len(), 19);
        assert_eq!(&record.timestamp[2..3], "-");
        assert_eq!(&record.timestamp[5..6], "-");
        assert_eq!(&record.timestamp[10..11], " ");
    }

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Deposit.to_string(), "Deposit");
        assert_eq!(EntryKind::Withdrawal.to_string(), "Withdrawal");
    }
}
