//! Input/output layer for the wealth tracker backend.
//!
//! Hosts the HTTP surface of the sync service. Handlers translate between
//! the wire DTOs in `shared` and the domain types, and map domain errors
//! to status codes; no business logic lives here.

pub mod rest;
