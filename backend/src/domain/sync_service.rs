//! Ephemeral pairing store for cross-device sync.
//!
//! Clients hand over an opaque JSON snapshot and receive a short 4-digit
//! code; another client redeems the code within the hour to fetch the
//! snapshot. Records live in process memory only, so a restart drops every
//! outstanding code.
//!
//! ## Key behaviors
//!
//! - Fixed one-hour TTL from the moment of storage, never extended
//! - Expiry is checked lazily against a caller-supplied `now`; a read that
//!   finds a lapsed record evicts it and reports `Expired` once
//! - Retrieval of a live record is non-destructive
//! - Codes may be server-generated or caller-supplied; a caller-supplied
//!   code that is already live is rejected with `CodeConflict`
//!
//! Every operation takes the current instant as an argument, which keeps
//! expiry fully deterministic under test.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// How long a stored payload stays retrievable.
pub const SYNC_TTL_SECONDS: i64 = 3600;

/// Errors surfaced by the sync store. Messages are the exact strings the
/// HTTP layer returns to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("Sync code must be exactly 4 digits")]
    InvalidCode,
    #[error("Data is required")]
    MissingPayload,
    #[error("Code is already in use")]
    CodeConflict,
    #[error("Invalid or expired code")]
    NotFound,
    #[error("Code has expired")]
    Expired,
    #[error("Internal server error")]
    Internal,
}

/// What a successful store hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReceipt {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct SyncRecord {
    payload: Value,
    /// When the payload was stored; kept for diagnostics
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SyncRecord {
    fn new(payload: Value, now: DateTime<Utc>) -> Self {
        Self {
            payload,
            created_at: now,
            expires_at: now + Duration::seconds(SYNC_TTL_SECONDS),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// In-memory map of sync codes to pending payloads.
///
/// A single mutex makes each operation atomic: the conflict check and the
/// insert share one critical section, and eviction only ever removes
/// records whose deadline has actually passed, so a racing reader can
/// never delete a fresh record.
#[derive(Debug, Default)]
pub struct SyncStore {
    records: Mutex<HashMap<String, SyncRecord>>,
}

impl SyncStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload under a freshly generated code.
    ///
    /// With only 9000 possible codes a generated one can collide with a
    /// live record; the new payload simply replaces the old one, an
    /// accepted race for a cache of this size.
    pub fn store(&self, payload: Value, now: DateTime<Utc>) -> Result<SyncReceipt, SyncError> {
        if payload.is_null() {
            return Err(SyncError::MissingPayload);
        }

        let code = generate_code();
        let record = SyncRecord::new(payload, now);
        let expires_at = record.expires_at;

        let mut records = self.records.lock().unwrap();
        records.insert(code.clone(), record);

        Ok(SyncReceipt { code, expires_at })
    }

    /// Store a payload under a caller-supplied code.
    ///
    /// The code must be exactly 4 ASCII digits. A live record under the
    /// same code is left untouched and the request is rejected; an expired
    /// one counts as absent and gets replaced.
    pub fn store_with_code(
        &self,
        code: &str,
        payload: Value,
        now: DateTime<Utc>,
    ) -> Result<SyncReceipt, SyncError> {
        if payload.is_null() {
            return Err(SyncError::MissingPayload);
        }
        if !is_valid_code(code) {
            return Err(SyncError::InvalidCode);
        }

        let record = SyncRecord::new(payload, now);
        let expires_at = record.expires_at;

        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records.get(code) {
            if !existing.is_expired(now) {
                return Err(SyncError::CodeConflict);
            }
        }
        records.insert(code.to_string(), record);

        Ok(SyncReceipt {
            code: code.to_string(),
            expires_at,
        })
    }

    /// Fetch the payload stored under a code without consuming it.
    ///
    /// Reports `Expired` exactly once for a lapsed record (evicting it in
    /// the same step); after that the code is simply `NotFound`.
    pub fn retrieve(&self, code: &str, now: DateTime<Utc>) -> Result<Value, SyncError> {
        let mut records = self.records.lock().unwrap();

        let record = records.get(code).ok_or(SyncError::NotFound)?;
        if record.is_expired(now) {
            records.remove(code);
            return Err(SyncError::Expired);
        }

        Ok(record.payload.clone())
    }

    /// Drop every lapsed record, returning how many were removed. Purely
    /// memory hygiene; lazy eviction already keeps reads correct.
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    #[cfg(test)]
    fn created_at(&self, code: &str) -> Option<DateTime<Utc>> {
        self.records
            .lock()
            .unwrap()
            .get(code)
            .map(|record| record.created_at)
    }
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_digit())
}

/// Four-digit code in 1000..=9999 from subsecond clock entropy.
fn generate_code() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64;
    format!("{}", 1000 + nanos % 9000)
}
