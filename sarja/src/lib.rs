//! Sarja answers time-series data queries against pluggable storage backends.
//!
//! Overview
//! - Resolves series metadata and raw observations through the `sarja_core`
//!   store contracts.
//! - Converts observations to a requested reporting frequency, applies a
//!   statistical transform and a missing-value policy, and paginates.
//! - Supports point-in-time retrieval: with an `as_of` date the returned
//!   values are the ones known at that date, selected from revision history.
//! - Produces a deterministic fingerprint over the full resolved sequence for
//!   conditional-retrieval handling at the boundary.
//!
//! Key behaviors and trade-offs
//! - Validation (identifier shape, page, page size, explicit ranges) happens
//!   before any store call; validation failures are never retryable.
//! - Each store call is bounded by the configured timeout. An expired or
//!   failed call surfaces as `UpstreamUnavailable` — the engine never
//!   substitutes partial or stale data for a failed fetch.
//! - Every query is an independent, stateless unit of work. The engine holds
//!   no cross-request state and performs no caching; request coalescing or
//!   TTL caching belongs in an external layer keyed by the fingerprint.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use sarja::{DataQuery, Sarja};
//!
//! let engine = Sarja::builder()
//!     .with_backend(Arc::new(backend))
//!     .build()?;
//!
//! let query = DataQuery::builder()
//!     .frequency("q".parse()?)
//!     .transform("yoy".parse()?)
//!     .build()?;
//!
//! let result = engine.data("US.GDP.REAL.Q", query).await?;
//! println!("{} points, fingerprint {}",
//!     result.envelope.total_points, result.fingerprint);
//! ```
//!
//! See `sarja/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod query;

pub use core::{Sarja, SarjaBuilder};

// Re-export core types for convenience
pub use sarja_core::{
    DataQuery,
    DataQueryBuilder,
    DataResponse,
    FillPolicy,
    Frequency,
    MetadataProvider,
    Observation,
    PointProvider,
    PointTuple,
    QueryResult,
    Revision,
    SarjaConfig,
    SarjaError,
    SeriesAttributes,
    SeriesBackend,
    SeriesMetadata,
    Transform,
};
