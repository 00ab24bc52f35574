//! Time-series transformation stages shared by the engine and backends.
//!
//! Modules include:
//! - `asof`: in-process point-in-time merge of current values and revisions
//! - `fill`: missing-value policies
//! - `resample`: frequency conversion by calendar bucketing
//! - `transform`: statistical transforms
/// Point-in-time merge helpers for revision-aware backends.
pub mod asof;
/// Missing-value fill policies.
pub mod fill;
/// Frequency conversion by calendar bucketing.
pub mod resample;
/// Statistical transforms over observation sequences.
pub mod transform;
