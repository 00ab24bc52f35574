use sarja_core::types::{SarjaError, SeriesMetadata};

use super::util::validate_series_id;
use crate::Sarja;

impl Sarja {
    /// Fetch descriptive metadata for a series.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a malformed identifier, `NotFound` when
    /// the series is unknown, and `UpstreamUnavailable` when the metadata
    /// store fails or times out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sarja::query::series", skip(self))
    )]
    pub async fn series(&self, series_id: &str) -> Result<SeriesMetadata, SarjaError> {
        validate_series_id(series_id)?;
        let store = self.metadata_provider();
        self.store_call("metadata", store.series(series_id)).await
    }
}
