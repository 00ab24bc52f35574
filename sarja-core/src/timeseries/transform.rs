use chrono::Datelike;
use sarja_types::{Frequency, Transform};

use crate::types::Observation;

/// Apply a statistical transform to an ascending observation sequence.
///
/// The output always has the same length and date alignment as the input;
/// only values change. [`Transform::AsIs`] returns the input unchanged.
/// Percentage results are expressed as `value * 100`, and every computed
/// value is rounded to six decimal places to keep floating noise out of
/// serialized responses and fingerprints.
///
/// `frequency` must be the resolved reporting frequency of the sequence; the
/// year-over-year transform derives its lookback lag from it.
#[must_use]
pub fn transform(points: Vec<Observation>, kind: Transform, frequency: Frequency) -> Vec<Observation> {
    match kind {
        Transform::Diff => diff(points),
        Transform::PctChange | Transform::Mom => pct_change(points),
        Transform::Yoy => yoy(points, frequency),
        Transform::Ytd => ytd(points),
        _ => points,
    }
}

fn diff(points: Vec<Observation>) -> Vec<Observation> {
    let mut out = Vec::with_capacity(points.len());
    let mut prev: Option<f64> = None;
    for p in points {
        let v = match (prev, p.value) {
            (Some(base), Some(value)) => Some(round6(value - base)),
            _ => None,
        };
        prev = p.value;
        out.push(Observation::new(p.date, v));
    }
    out
}

fn pct_change(points: Vec<Observation>) -> Vec<Observation> {
    let mut out = Vec::with_capacity(points.len());
    let mut prev: Option<f64> = None;
    for p in points {
        let v = match (prev, p.value) {
            (Some(base), Some(value)) if base != 0.0 => Some(round6((value / base - 1.0) * 100.0)),
            _ => None,
        };
        prev = p.value;
        out.push(Observation::new(p.date, v));
    }
    out
}

fn yoy(points: Vec<Observation>, frequency: Frequency) -> Vec<Observation> {
    let lag = frequency.periods_per_year();
    let mut out = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let v = if i >= lag {
            match (points[i - lag].value, p.value) {
                (Some(base), Some(value)) if base != 0.0 => {
                    Some(round6((value / base - 1.0) * 100.0))
                }
                _ => None,
            }
        } else {
            None
        };
        out.push(Observation::new(p.date, v));
    }
    out
}

fn ytd(points: Vec<Observation>) -> Vec<Observation> {
    let mut out = Vec::with_capacity(points.len());
    let mut current_year: Option<i32> = None;
    let mut base: Option<f64> = None;
    for p in points {
        // The base resets at every calendar-year boundary; missing values
        // yield null without disturbing it.
        if current_year != Some(p.date.year()) {
            current_year = Some(p.date.year());
            base = None;
        }
        let v = match p.value {
            None => None,
            Some(value) => match base {
                None => {
                    base = Some(value);
                    Some(0.0)
                }
                Some(b) if b == 0.0 => {
                    if value == 0.0 {
                        Some(0.0)
                    } else {
                        None
                    }
                }
                Some(b) => Some(round6((value / b - 1.0) * 100.0)),
            },
        };
        out.push(Observation::new(p.date, v));
    }
    out
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
