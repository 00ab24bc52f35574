//! Domain data structures for series, observations, queries, and responses.
//!
//! Everything here is created per request from collaborator responses and
//! discarded once the response envelope is built; nothing holds state across
//! requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use sarja_types::{FillPolicy, Frequency, SarjaConfig, SarjaError, Transform};

/// A single dated observation.
///
/// `value` of `None` marks a missing observation, which is distinct from a
/// recorded zero. Sequences handed to the transformation stages are ascending
/// by date with unique dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Observed value, absent when the observation is missing.
    pub value: Option<f64>,
}

impl Observation {
    /// Construct an observation.
    #[must_use]
    pub const fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// A historical correction to an observation, keyed by the observation date
/// and stamped with the instant the correction was recorded.
///
/// Multiple revisions may exist per date; point-in-time retrieval selects the
/// latest one at or before the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    /// Date of the corrected observation.
    pub date: NaiveDate,
    /// Corrected value, absent when the correction removed the value.
    pub value: Option<f64>,
    /// Instant at which the correction was recorded.
    pub revision_time: DateTime<Utc>,
}

/// Immutable descriptive metadata for a series, owned by the metadata store.
///
/// The engine only reads it: coverage bounds seed implicit query ranges and
/// `last_modified` feeds the response fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    /// Series identifier.
    pub id: String,
    /// Human-readable name.
    pub name: Option<String>,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Frequency the series is recorded at; must be concrete, not `Native`.
    pub native_frequency: Frequency,
    /// Unit of measurement.
    pub unit: Option<String>,
    /// Geography the series covers, e.g. an ISO country code.
    pub geography: Option<String>,
    /// Publishing source.
    pub source: Option<String>,
    /// Whether the series is seasonally adjusted.
    pub is_adjusted: bool,
    /// First covered date, when known.
    pub coverage_start: Option<NaiveDate>,
    /// Last covered date, when known.
    pub coverage_end: Option<NaiveDate>,
    /// Instant of the last upstream modification, when known.
    pub last_modified: Option<DateTime<Utc>>,
}

/// Parameters of a data query, built via [`DataQuery::builder`].
///
/// Construction validates what can be validated without metadata: `page` and
/// `page_size` must be positive and an explicit range must not be inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataQuery {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
    frequency: Frequency,
    transform: Transform,
    fill: FillPolicy,
    page: u32,
    page_size: u32,
}

impl DataQuery {
    /// Start building a query with default parameters.
    #[must_use]
    pub fn builder() -> DataQueryBuilder {
        DataQueryBuilder::default()
    }

    /// Explicit inclusive range start, when given.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Explicit inclusive range end, when given.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Point-in-time cutoff date, when given.
    #[must_use]
    pub const fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Requested reporting frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Requested statistical transform.
    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Requested missing-value policy.
    #[must_use]
    pub const fn fill(&self) -> FillPolicy {
        self.fill
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of points per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Builder for [`DataQuery`].
#[derive(Debug, Clone, Copy)]
pub struct DataQueryBuilder {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    as_of: Option<NaiveDate>,
    frequency: Frequency,
    transform: Transform,
    fill: FillPolicy,
    page: u32,
    page_size: u32,
}

impl Default for DataQueryBuilder {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            as_of: None,
            frequency: Frequency::Native,
            transform: Transform::AsIs,
            fill: FillPolicy::None,
            page: 1,
            page_size: 500,
        }
    }
}

impl DataQueryBuilder {
    /// Set the inclusive range start; omitted, the series coverage start is used.
    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Set the inclusive range end; omitted, the series coverage end is used.
    #[must_use]
    pub const fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Request the data state as it was known at the end of the given date.
    #[must_use]
    pub const fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Set the reporting frequency; defaults to [`Frequency::Native`].
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the statistical transform; defaults to [`Transform::AsIs`].
    #[must_use]
    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the missing-value policy; defaults to [`FillPolicy::None`].
    #[must_use]
    pub const fn fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    /// Set the 1-based page number; defaults to 1.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size; defaults to 500. The engine enforces its configured
    /// upper bound separately.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the query.
    ///
    /// # Errors
    /// Returns `InvalidParameter` when `page` or `page_size` is zero and
    /// `InvalidRange` when an explicit start is after an explicit end.
    pub fn build(self) -> Result<DataQuery, SarjaError> {
        if self.page == 0 {
            return Err(SarjaError::invalid_parameter(
                "invalid page parameter; must be greater than or equal to 1",
            ));
        }
        if self.page_size == 0 {
            return Err(SarjaError::invalid_parameter(
                "invalid page_size parameter; must be greater than or equal to 1",
            ));
        }
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(SarjaError::InvalidRange { start, end });
        }
        Ok(DataQuery {
            start: self.start,
            end: self.end,
            as_of: self.as_of,
            frequency: self.frequency,
            transform: self.transform,
            fill: self.fill,
            page: self.page,
            page_size: self.page_size,
        })
    }
}

/// A single `[date, value]` pair in the paged response body.
///
/// Serializes as a two-element array; a missing value serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointTuple(
    /// Observation date.
    pub NaiveDate,
    /// Observation value, `null` on the wire when missing.
    pub Option<f64>,
);

/// Descriptive attributes carried in the envelope's `metadata` sub-object.
///
/// Optional fields are omitted from serialization when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAttributes {
    /// Geography of the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Publishing source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// First covered date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_start: Option<NaiveDate>,
    /// Last covered date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_end: Option<NaiveDate>,
    /// Instant of the last upstream modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    /// Whether the series is seasonally adjusted.
    pub is_adjusted: bool,
}

/// Response envelope for a data query.
///
/// Field names are a stable wire contract consumed by the routing layer.
/// `start_date`/`end_date` describe the full un-paged sequence; `points`
/// carries only the requested page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse {
    /// Series identifier.
    pub series_id: String,
    /// Human-readable series name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved reporting frequency.
    pub freq: Frequency,
    /// Unit of measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Point-in-time cutoff date, echoed when the query set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Applied transform.
    pub transform: Transform,
    /// Applied fill policy.
    pub fill: FillPolicy,
    /// First date of the full un-paged sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last date of the full un-paged sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Number of points in this page.
    pub point_count: usize,
    /// Number of points in the full sequence.
    pub total_points: usize,
    /// 1-based page number.
    pub page: u32,
    /// Page size used for slicing.
    pub page_size: u32,
    /// Total number of pages (0 for an empty sequence).
    pub total_pages: u32,
    /// Whether pages beyond this one exist.
    pub has_more: bool,
    /// The paged `[date, value]` pairs.
    pub points: Vec<PointTuple>,
    /// Descriptive attributes with nulls dropped.
    pub metadata: SeriesAttributes,
}

/// Complete result of a data query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Envelope ready for boundary serialization.
    pub envelope: DataResponse,
    /// Full post-transform sequence, kept so callers can re-serialize in an
    /// alternate format without recomputation.
    pub all_points: Vec<Observation>,
    /// Opaque validator token for conditional retrieval.
    pub fingerprint: String,
    /// Last-modified instant of the underlying series, when known.
    pub last_modified: Option<DateTime<Utc>>,
}
