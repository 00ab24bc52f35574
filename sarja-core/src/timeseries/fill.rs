use sarja_types::FillPolicy;

use crate::types::Observation;

/// Apply a missing-value policy to an observation sequence.
///
/// [`FillPolicy::None`] returns the input unchanged. Forward fill carries the
/// last seen value forward, so leading gaps stay missing; backward fill
/// carries the next seen value backward, so trailing gaps stay missing.
/// Length and date alignment are preserved.
#[must_use]
pub fn fill(points: Vec<Observation>, policy: FillPolicy) -> Vec<Observation> {
    match policy {
        FillPolicy::ForwardFill => {
            let mut last: Option<f64> = None;
            points
                .into_iter()
                .map(|p| {
                    if p.value.is_some() {
                        last = p.value;
                    }
                    Observation::new(p.date, last)
                })
                .collect()
        }
        FillPolicy::BackwardFill => {
            let mut next: Option<f64> = None;
            let mut out: Vec<Observation> = points
                .into_iter()
                .rev()
                .map(|p| {
                    if p.value.is_some() {
                        next = p.value;
                    }
                    Observation::new(p.date, next)
                })
                .collect();
            out.reverse();
            out
        }
        _ => points,
    }
}
