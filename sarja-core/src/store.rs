use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{Observation, SarjaError, SeriesMetadata};

/// Focused role trait for backends that resolve series metadata.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch descriptive metadata for the given series.
    ///
    /// Implementations return `NotFound` for unknown identifiers.
    async fn series(&self, series_id: &str) -> Result<SeriesMetadata, SarjaError>;
}

/// Focused role trait for backends that serve raw observations.
#[async_trait]
pub trait PointProvider: Send + Sync {
    /// Fetch current observations within the inclusive date range.
    ///
    /// The returned sequence is ascending by date with unique dates.
    async fn fetch_range(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, SarjaError>;

    /// Fetch observations as they were known at `as_of`.
    ///
    /// For each date the value is the revision with the latest revision time
    /// at or before `as_of`, falling back to the current value when no
    /// revision qualifies. The returned sequence is ascending by date with
    /// unique dates.
    async fn fetch_range_as_of(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Observation>, SarjaError>;
}

/// Main backend trait implemented by store crates. Exposes capability
/// discovery.
pub trait SeriesBackend: Send + Sync {
    /// A stable identifier used in error tagging and logs.
    fn name(&self) -> &'static str;

    /// Advertise the metadata capability by returning a usable trait object
    /// reference when supported.
    fn as_metadata_provider(&self) -> Option<&dyn MetadataProvider> {
        None
    }

    /// Advertise the point-retrieval capability by returning a usable trait
    /// object reference when supported.
    fn as_point_provider(&self) -> Option<&dyn PointProvider> {
        None
    }
}
