//! The income ledger: the system of record for all client-side totals.
//!
//! The ledger owns its entries and is the only component that mutates them.
//! Everything derived (statistics, comparisons, snapshots) reads the entry
//! slice and computes from there.

use shared::{CreateEntryRequest, IncomeEntry};

/// Errors for ledger mutations. Validation failures reject the request
/// before anything is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Amounts must be finite numbers")]
    NonFiniteAmount,
    #[error("Amounts must not be negative")]
    NegativeAmount,
    #[error("No entry with id {0}")]
    UnknownEntry(u64),
}

/// Ordered collection of income entries plus the last issued id.
///
/// Ids are creation-time epoch milliseconds, bumped past the previous id
/// when two entries land in the same millisecond, so they stay unique and
/// increasing within one ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<IncomeEntry>,
    last_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from a snapshot, restoring the id watermark from
    /// the largest id present.
    pub fn from_entries(entries: Vec<IncomeEntry>) -> Self {
        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        Self { entries, last_id }
    }

    /// Append a new entry with derived weekday and total.
    pub fn add(
        &mut self,
        request: CreateEntryRequest,
        now_millis: u64,
    ) -> Result<IncomeEntry, LedgerError> {
        validate_amounts(request.cash_amount, request.coin_amount)?;

        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;

        let entry = IncomeEntry::new(
            id,
            request.date,
            request.cash_amount,
            request.coin_amount,
            request.recorded_time,
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Replace an entry by removing it and recreating it from the request.
    ///
    /// This is an explicit two-step operation: the recreated entry gets a
    /// fresh identity and lands at the end of the ledger, exactly as if it
    /// had been deleted and re-added by hand.
    pub fn edit(
        &mut self,
        id: u64,
        request: CreateEntryRequest,
        now_millis: u64,
    ) -> Result<IncomeEntry, LedgerError> {
        validate_amounts(request.cash_amount, request.coin_amount)?;

        self.remove(id).ok_or(LedgerError::UnknownEntry(id))?;
        self.add(request, now_millis)
    }

    /// Remove an entry by id, returning it when it existed.
    pub fn remove(&mut self, id: u64) -> Option<IncomeEntry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only snapshot in insertion order, the input to the statistics
    /// engine and the period matcher.
    pub fn entries(&self) -> &[IncomeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_amounts(cash_amount: f64, coin_amount: f64) -> Result<(), LedgerError> {
    for amount in [cash_amount, coin_amount] {
        if !amount.is_finite() {
            return Err(LedgerError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(LedgerError::NegativeAmount);
        }
    }
    Ok(())
}
