//! Distance reductions shared by the overall and per-person statistics.

use crate::types::{RunnerEntry, round2};

/// Sum, extremes and count of `miles_run` over a non-empty entry set.
///
/// `sum` is the raw (unrounded) sum; [`Self::total`] and [`Self::average`] both derive from it so
/// rounding is applied once, at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilesSummary {
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl MilesSummary {
    /// Sum rounded to 2 decimal places.
    pub fn total(&self) -> f64 {
        round2(self.sum)
    }

    /// Mean rounded to 2 decimal places.
    pub fn average(&self) -> f64 {
        round2(self.sum / self.count as f64)
    }
}

/// Reduce entries to a [`MilesSummary`]. Returns `None` for an empty input.
pub fn summarize<'a, I>(entries: I) -> Option<MilesSummary>
where
    I: IntoIterator<Item = &'a RunnerEntry>,
{
    let mut acc: Option<MilesSummary> = None;
    for miles in entries.into_iter().map(RunnerEntry::miles_run) {
        acc = Some(match acc {
            Some(a) => MilesSummary {
                sum: a.sum + miles,
                min: a.min.min(miles),
                max: a.max.max(miles),
                count: a.count + 1,
            },
            None => MilesSummary {
                sum: miles,
                min: miles,
                max: miles,
                count: 1,
            },
        });
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::types::RunnerEntry;
    use chrono::NaiveDate;

    fn entry(miles: f64) -> RunnerEntry {
        RunnerEntry::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "Alice", miles).unwrap()
    }

    #[test]
    fn summarize_empty_is_none() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn summarize_tracks_sum_extremes_and_count() {
        let entries = vec![entry(3.5), entry(0.0), entry(6.25)];
        let s = summarize(&entries).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 6.25);
        assert!((s.sum - 9.75).abs() < 1e-9);
        assert_eq!(s.total(), 9.75);
        assert_eq!(s.average(), 3.25);
    }

    #[test]
    fn average_rounds_from_the_raw_sum() {
        // 0.1 + 0.2 + 0.3 is slightly above 0.6 in binary; both derived values still round cleanly.
        let entries = vec![entry(0.1), entry(0.2), entry(0.3)];
        let s = summarize(&entries).unwrap();
        assert_eq!(s.total(), 0.6);
        assert_eq!(s.average(), 0.2);
    }
}
