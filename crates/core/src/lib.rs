//! Domain layer for the placement tracker.
//!
//! Holds the shared id/timestamp aliases, the error taxonomy, the status
//! enums stored as text columns, field validation rules and the statistics
//! aggregator. This crate has no database or HTTP dependencies; all data is
//! passed in by the caller.

pub mod error;
pub mod stats;
pub mod status;
pub mod types;
pub mod validation;
