//! Deterministic content fingerprints for conditional retrieval.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};
use sarja_types::{FillPolicy, Frequency, Transform};

use crate::types::Observation;

/// Inputs hashed into a query fingerprint.
///
/// The fingerprint covers the full resolved, un-paged sequence plus the
/// series' last-modified instant and the pagination window, so it is stable
/// within a page boundary set and changes whenever either the underlying
/// data or the window changes.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintInput<'a> {
    /// Series identifier.
    pub series_id: &'a str,
    /// Resolved inclusive range start.
    pub start: NaiveDate,
    /// Resolved inclusive range end.
    pub end: NaiveDate,
    /// Point-in-time cutoff date, when requested.
    pub as_of: Option<NaiveDate>,
    /// Resolved target frequency.
    pub frequency: Frequency,
    /// Applied transform.
    pub transform: Transform,
    /// Applied fill policy.
    pub fill: FillPolicy,
    /// Last-modified instant of the series, when known.
    pub last_modified: Option<DateTime<Utc>>,
    /// Full post-transform sequence, un-paged.
    pub points: &'a [Observation],
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub page_size: u32,
}

/// Compute the opaque validator token for a query result.
///
/// Identical inputs, including point sequence contents, always yield the
/// identical token; any change to a field or to a point's date or value
/// changes it with overwhelming probability. The token is a quoted hex
/// digest suitable for `If-None-Match` handling at an HTTP boundary.
#[must_use]
pub fn fingerprint(input: &FingerprintInput<'_>) -> String {
    let mut canonical = String::with_capacity(64 + input.points.len() * 24);
    let _ = write!(
        canonical,
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
        input.series_id,
        input.start,
        input.end,
        input.as_of.map(|d| d.to_string()).unwrap_or_default(),
        input.frequency.code(),
        input.transform.code(),
        input.fill.code(),
        input
            .last_modified
            .map(|t| t.to_rfc3339())
            .unwrap_or_default(),
        input.points.len(),
        input.page,
        input.page_size,
    );
    for p in input.points {
        let _ = write!(canonical, "|{}=", p.date);
        if let Some(v) = p.value {
            let _ = write!(canonical, "{v}");
        }
    }
    format!("\"{}\"", blake3::hash(canonical.as_bytes()).to_hex())
}
