use crate::errors::RaffleError;
use crate::interfaces::raffle::Entry;
use crate::utils::storage_keys::StorageKeys;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::Vector;

/// Insertion-ordered entries for the active round. Append-only between
/// resets; an entry's index is stable until `clear`.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct EntryLedger {
    entries: Vector<Entry>,
}

impl EntryLedger {
    pub fn new() -> Self {
        Self {
            entries: Vector::new(StorageKeys::Entries),
        }
    }

    pub fn append(&mut self, entry: &Entry) {
        self.entries.push(entry);
    }

    pub fn get(&self, index: u64) -> Result<Entry, RaffleError> {
        self.entries.get(index).ok_or(RaffleError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn count(&self) -> u64 {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot for the settlement journal.
    pub fn to_vec(&self) -> Vec<Entry> {
        self.entries.to_vec()
    }

    /// Reinstates a journaled snapshot after a failed settlement.
    pub fn restore(&mut self, entries: &[Entry]) {
        self.entries.clear();
        for entry in entries {
            self.entries.push(entry);
        }
    }
}
