use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{Observation, Revision};

/// Merge current observations with revision history as of a cutoff instant.
///
/// For each date the selected value is the revision with the greatest
/// `revision_time` at or before `cutoff`; when no revision qualifies the
/// current value is used. Dates present only in qualifying revisions are
/// included. The output is ascending by date with unique dates.
///
/// Backends over relational stores typically push this merge into a window
/// query over the union of current and historical rows; this helper serves
/// in-process backends.
#[must_use]
pub fn merge_as_of(
    current: &[Observation],
    revisions: &[Revision],
    cutoff: DateTime<Utc>,
) -> Vec<Observation> {
    // `None` marks the current (unrevisioned) value for a date; it loses to
    // any qualifying revision.
    let mut best: BTreeMap<NaiveDate, (Option<DateTime<Utc>>, Option<f64>)> = BTreeMap::new();
    for p in current {
        best.insert(p.date, (None, p.value));
    }
    for r in revisions {
        if r.revision_time > cutoff {
            continue;
        }
        match best.get(&r.date) {
            Some((Some(seen), _)) if *seen >= r.revision_time => {}
            _ => {
                best.insert(r.date, (Some(r.revision_time), r.value));
            }
        }
    }
    best.into_iter()
        .map(|(date, (_, value))| Observation::new(date, value))
        .collect()
}
