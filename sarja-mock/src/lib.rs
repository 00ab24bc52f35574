use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sarja_core::store::{MetadataProvider, PointProvider, SeriesBackend};
use sarja_core::timeseries::asof;
use sarja_core::types::{Observation, SarjaError, SeriesMetadata};

mod fixtures;

/// Mock backend for CI-safe examples and tests. Serves deterministic series
/// from static fixtures, including revision history for point-in-time
/// queries.
pub struct MockBackend;

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Construct the fixture-backed mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> SarjaError {
        SarjaError::not_found(what.to_string())
    }

    fn maybe_fail(series_id: &str, capability: &'static str) -> Result<(), SarjaError> {
        match series_id {
            "FAIL" => Err(SarjaError::Data(format!("forced failure: {capability}"))),
            "SLOW" => {
                // Simulate brief latency; the engine may time out depending on
                // its configuration. Keep short to avoid slowing tests.
                std::thread::sleep(std::time::Duration::from_millis(200));
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl SeriesBackend for MockBackend {
    fn name(&self) -> &'static str {
        "sarja-mock"
    }

    fn as_metadata_provider(&self) -> Option<&dyn MetadataProvider> {
        Some(self as &dyn MetadataProvider)
    }

    fn as_point_provider(&self) -> Option<&dyn PointProvider> {
        Some(self as &dyn PointProvider)
    }
}

#[async_trait]
impl MetadataProvider for MockBackend {
    async fn series(&self, series_id: &str) -> Result<SeriesMetadata, SarjaError> {
        Self::maybe_fail(series_id, "metadata")?;
        fixtures::catalog::by_id(series_id)
            .ok_or_else(|| Self::not_found(&format!("series {series_id}")))
    }
}

#[async_trait]
impl PointProvider for MockBackend {
    async fn fetch_range(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, SarjaError> {
        Self::maybe_fail(series_id, "points")?;
        let all = fixtures::points::current(series_id)
            .ok_or_else(|| Self::not_found(&format!("observations for {series_id}")))?;
        Ok(clip(all, start, end))
    }

    async fn fetch_range_as_of(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Observation>, SarjaError> {
        Self::maybe_fail(series_id, "points")?;
        let current = fixtures::points::current(series_id)
            .ok_or_else(|| Self::not_found(&format!("observations for {series_id}")))?;
        let revisions = fixtures::points::revisions(series_id);
        Ok(clip(asof::merge_as_of(&current, &revisions, as_of), start, end))
    }
}

fn clip(points: Vec<Observation>, start: NaiveDate, end: NaiveDate) -> Vec<Observation> {
    points
        .into_iter()
        .filter(|p| p.date >= start && p.date <= end)
        .collect()
}
