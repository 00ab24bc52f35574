use thiserror::Error;

/// Unified error type for the sarja workspace.
///
/// This covers unknown series, request validation failures, range resolution
/// failures, store-level failures surfaced by the engine, and malformed
/// collaborator data detected in-process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SarjaError {
    /// A series or resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series US.GDP.REAL.Q".
        what: String,
    },

    /// A request parameter failed validation before any store was contacted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The resolved date range starts after it ends.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Resolved inclusive range start.
        start: chrono::NaiveDate,
        /// Resolved inclusive range end.
        end: chrono::NaiveDate,
    },

    /// Neither explicit dates nor series coverage bounds could resolve a range.
    #[error("incomplete coverage: series {series} has no coverage dates and none were given")]
    IncompleteCoverage {
        /// Identifier of the series lacking coverage bounds.
        series: String,
    },

    /// A backing store call failed or timed out.
    ///
    /// This is the only kind a caller may retry; the engine never substitutes
    /// partial or stale data for a failed fetch.
    #[error("upstream unavailable: {store} store: {msg}")]
    UpstreamUnavailable {
        /// Name of the store that failed (e.g. "metadata", "points").
        store: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// A collaborator returned data the engine cannot work with.
    #[error("data issue: {0}")]
    Data(String),
}

impl SarjaError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidParameter` error with a message.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Helper: build an `UpstreamUnavailable` error tagged with the store name.
    pub fn upstream(store: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            store: store.into(),
            msg: msg.into(),
        }
    }

    /// Whether a caller may retry the failed request unchanged.
    ///
    /// Validation errors are deterministic and never retryable; only store
    /// failures are.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }
}
