//! Domain logic for the wealth tracker backend.
//!
//! Everything in here is plain synchronous Rust over in-memory data. The
//! income side (ledger, statistics, comparison) operates on entry slices
//! with no interior locking; the sync store is the one concurrent piece
//! and guards itself with a mutex.
//!
//! ## Key Responsibilities
//!
//! - **Ledger management**: owning income entries, identity assignment,
//!   add/edit/remove/clear
//! - **Statistics**: daily, weekly, and monthly totals plus the
//!   month-over-month chart series
//! - **Period comparison**: finding last month's counterpart of an entry
//!   by weekday and week position
//! - **Sync pairing**: short-lived 4-digit codes mapping to opaque JSON
//!   payloads
//!
//! ## Module Organization
//!
//! - **calendar**: weekday grids, week-of-month, month arithmetic
//! - **ledger**: the `Ledger` and its mutation rules
//! - **statistics**: `summarize` over a ledger snapshot
//! - **comparison**: `find_last_month_match`
//! - **sync_service**: the `SyncStore` with its TTL semantics

pub mod calendar;
pub mod comparison;
pub mod ledger;
pub mod statistics;
pub mod sync_service;

pub use comparison::find_last_month_match;
pub use ledger::{Ledger, LedgerError};
pub use statistics::summarize;
pub use sync_service::{SyncError, SyncReceipt, SyncStore, SYNC_TTL_SECONDS};
