//! Persistence layer for the wealth tracker backend.
//!
//! A single JSON snapshot store keeps the ledger on disk between runs of
//! a client embedding the core. The sync code store deliberately has no
//! persistence; codes die with the process.

pub mod json_ledger;

pub use json_ledger::JsonLedgerStore;
