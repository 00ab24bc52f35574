use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sarja_core::fingerprint::{self, FingerprintInput};
use sarja_core::timeseries::{fill, resample, transform};
use sarja_core::types::{
    DataQuery, DataResponse, Frequency, Observation, PointTuple, QueryResult, SarjaError,
    SeriesAttributes, SeriesMetadata,
};

use super::util::{page_window, validate_series_id};
use crate::Sarja;

impl Sarja {
    /// Execute a data query against the registered backend.
    ///
    /// Behavior:
    /// - Explicit `start`/`end` take precedence over the series' coverage
    ///   bounds; with neither available the query fails before any point
    ///   fetch.
    /// - With `as_of` set, observations are retrieved as they were known at
    ///   the end of that date, selected from revision history.
    /// - The requested frequency is resolved against the series' native
    ///   frequency; resampling runs only when they differ. The transform uses
    ///   the resolved frequency for its year-over-year lag.
    /// - `start_date`/`end_date` and the fingerprint describe the full
    ///   un-paged sequence; `points` carries only the requested page, so the
    ///   fingerprint changes when either the data or the window changes.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a malformed id or an out-of-bounds
    /// `page_size`, `NotFound` for an unknown series, `InvalidRange` when the
    /// resolved start is after the resolved end, `IncompleteCoverage` when no
    /// range can be resolved, and `UpstreamUnavailable` when a store call
    /// fails or times out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sarja::query::data", skip(self, query))
    )]
    pub async fn data(&self, series_id: &str, query: DataQuery) -> Result<QueryResult, SarjaError> {
        validate_series_id(series_id)?;
        self.validate_paging(&query)?;

        let meta = self
            .store_call("metadata", self.metadata_provider().series(series_id))
            .await?;
        let (start, end) = resolve_range(series_id, &meta, &query)?;
        let raw = self.fetch_points(series_id, start, end, query.as_of()).await?;

        let native = native_frequency(&meta)?;
        let target = query.frequency().resolve(native);
        let bucketed = if target == native {
            raw
        } else {
            resample::resample(raw, native, target)
        };
        let transformed = transform::transform(bucketed, query.transform(), target);
        let final_points = fill::fill(transformed, query.fill());

        let (from, to, total_pages) =
            page_window(final_points.len(), query.page(), query.page_size());

        let token = fingerprint::fingerprint(&FingerprintInput {
            series_id,
            start,
            end,
            as_of: query.as_of(),
            frequency: target,
            transform: query.transform(),
            fill: query.fill(),
            last_modified: meta.last_modified,
            points: &final_points,
            page: query.page(),
            page_size: query.page_size(),
        });

        let envelope = build_envelope(
            &meta,
            &query,
            target,
            &final_points,
            &final_points[from..to],
            total_pages,
        );
        Ok(QueryResult {
            envelope,
            last_modified: meta.last_modified,
            fingerprint: token,
            all_points: final_points,
        })
    }

    fn validate_paging(&self, query: &DataQuery) -> Result<(), SarjaError> {
        if query.page_size() > self.cfg.max_page_size {
            return Err(SarjaError::invalid_parameter(format!(
                "invalid page_size parameter; supported range: 1-{}",
                self.cfg.max_page_size
            )));
        }
        Ok(())
    }

    async fn fetch_points(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<Observation>, SarjaError> {
        let store = self.point_provider();
        match as_of {
            Some(cutoff_date) => {
                let cutoff = end_of_day_utc(cutoff_date);
                self.store_call(
                    "points",
                    store.fetch_range_as_of(series_id, start, end, cutoff),
                )
                .await
            }
            None => {
                self.store_call("points", store.fetch_range(series_id, start, end))
                    .await
            }
        }
    }
}

fn resolve_range(
    series_id: &str,
    meta: &SeriesMetadata,
    query: &DataQuery,
) -> Result<(NaiveDate, NaiveDate), SarjaError> {
    let start = query.start().or(meta.coverage_start);
    let end = query.end().or(meta.coverage_end);
    let (Some(start), Some(end)) = (start, end) else {
        return Err(SarjaError::IncompleteCoverage {
            series: series_id.to_string(),
        });
    };
    if start > end {
        return Err(SarjaError::InvalidRange { start, end });
    }
    Ok((start, end))
}

fn native_frequency(meta: &SeriesMetadata) -> Result<Frequency, SarjaError> {
    match meta.native_frequency {
        Frequency::Native => Err(SarjaError::Data(format!(
            "series {} declares no concrete native frequency",
            meta.id
        ))),
        concrete => Ok(concrete),
    }
}

// Same-day revisions must be visible, so the cutoff is the last representable
// instant of the as-of date.
fn end_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    let end_of_day =
        NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    date.and_time(end_of_day).and_utc()
}

fn build_envelope(
    meta: &SeriesMetadata,
    query: &DataQuery,
    frequency: Frequency,
    all_points: &[Observation],
    page_points: &[Observation],
    total_pages: u32,
) -> DataResponse {
    let tuples: Vec<PointTuple> = page_points
        .iter()
        .map(|p| PointTuple(p.date, p.value))
        .collect();
    DataResponse {
        series_id: meta.id.clone(),
        name: meta.name.clone(),
        freq: frequency,
        unit: meta.unit.clone(),
        as_of: query.as_of(),
        transform: query.transform(),
        fill: query.fill(),
        start_date: all_points.first().map(|p| p.date),
        end_date: all_points.last().map(|p| p.date),
        point_count: tuples.len(),
        total_points: all_points.len(),
        page: query.page(),
        page_size: query.page_size(),
        total_pages,
        has_more: query.page() < total_pages,
        points: tuples,
        metadata: SeriesAttributes {
            country: meta.geography.clone(),
            source: meta.source.clone(),
            coverage_start: meta.coverage_start,
            coverage_end: meta.coverage_end,
            last_update: meta.last_modified,
            is_adjusted: meta.is_adjusted,
        },
    }
}
