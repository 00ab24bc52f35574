//! sarja-core
//!
//! Core types, traits, and time-series utilities shared across the sarja
//! ecosystem.
//!
//! - `types`: domain structures (observations, series metadata, queries,
//!   response envelopes).
//! - `store`: the `SeriesBackend` trait and the store capability traits.
//! - `timeseries`: pure transformation stages (resample, transform, fill,
//!   point-in-time merge).
//! - `fingerprint`: deterministic validator tokens for conditional retrieval.
//!
//! All transformation stages are single-pass, allocation-light, and free of
//! shared state; they can run concurrently without locking.
#![warn(missing_docs)]

/// Deterministic content fingerprints for query results.
pub mod fingerprint;
/// Store capability traits and the primary `SeriesBackend` interface.
pub mod store;
/// Time-series transformation stages.
pub mod timeseries;
pub mod types;

pub use fingerprint::{FingerprintInput, fingerprint};
pub use store::{MetadataProvider, PointProvider, SeriesBackend};
pub use timeseries::asof::merge_as_of;
pub use timeseries::fill::fill;
pub use timeseries::resample::resample;
pub use timeseries::transform::transform;
pub use types::*;
