use chrono::{Datelike, Duration, NaiveDate};
use sarja_types::Frequency;

use crate::types::Observation;

/// Convert an ascending observation sequence between reporting frequencies.
///
/// Returns the input unchanged when `to` is [`Frequency::Native`] or equal to
/// `from`. Otherwise every observation is mapped to the bucket-end date of
/// the target frequency and the **last** observation assigned to a bucket
/// wins; later input dates overwrite earlier ones within the same bucket.
/// Output order follows bucket insertion order, which is ascending because
/// the input is ascending.
#[must_use]
pub fn resample(points: Vec<Observation>, from: Frequency, to: Frequency) -> Vec<Observation> {
    if to == Frequency::Native || to == from {
        return points;
    }
    let mut out: Vec<Observation> = Vec::with_capacity(points.len());
    for p in points {
        let bucket = bucket_end(p.date, to);
        match out.last_mut() {
            // Ascending input keeps equal buckets contiguous, so overwriting
            // the tail implements last-wins per bucket.
            Some(last) if last.date == bucket => last.value = p.value,
            _ => out.push(Observation::new(bucket, p.value)),
        }
    }
    out
}

/// Bucket-end date of `date` at the target frequency.
///
/// Daily (and `Native`) dates are unchanged; weekly buckets end on the
/// next-or-same Sunday; monthly, quarterly, and annual buckets end on the last
/// day of their calendar period.
#[must_use]
pub fn bucket_end(date: NaiveDate, to: Frequency) -> NaiveDate {
    match to {
        Frequency::Weekly => next_or_same_sunday(date),
        Frequency::Monthly => end_of_month(date.year(), date.month()),
        Frequency::Quarterly => {
            let quarter_end_month = ((date.month() - 1) / 3 + 1) * 3;
            end_of_month(date.year(), quarter_end_month)
        }
        Frequency::Annual => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
        _ => date,
    }
}

fn next_or_same_sunday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - i64::from(date.weekday().num_days_from_sunday())) % 7;
    date.checked_add_signed(Duration::days(days_ahead)).unwrap_or(date)
}

fn end_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
