//! Summary statistics for the dashboard cards and the CLI `stats` command.

use crate::record::EarthquakeRecord;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Count/mean/min/max over the non-null values of one field.
///
/// `mean`, `min` and `max` are `None` when the field has no values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSummary {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        if count == 0 {
            return Self {
                count,
                mean: None,
                min: None,
                max: None,
            };
        }
        Self {
            count,
            mean: Some(sum / count as f64),
            min: Some(min),
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of records, including those missing depth
    pub count: usize,
    pub magnitude: FieldSummary,
    pub depth: FieldSummary,
}

/// Aggregate a record set. `None` for an empty set.
pub fn aggregate<'a, I>(records: I) -> Option<Statistics>
where
    I: IntoIterator<Item = &'a EarthquakeRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let count = records.clone().count();
    if count == 0 {
        return None;
    }
    Some(Statistics {
        count,
        magnitude: FieldSummary::from_values(records.clone().map(|r| r.magnitude)),
        depth: FieldSummary::from_values(records.filter_map(|r| r.depth)),
    })
}

/// Events whose origin time falls in `(now - window, now]`.
pub fn count_recent<'a>(
    records: impl IntoIterator<Item = &'a EarthquakeRecord>,
    now: DateTime<Utc>,
    window: Duration,
) -> usize {
    let cutoff = now - window;
    records
        .into_iter()
        .filter_map(|r| r.time)
        .filter(|t| *t > cutoff && *t <= now)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn quake(id: &str, mag: f64, depth: Option<f64>) -> EarthquakeRecord {
        let mut record = EarthquakeRecord::new(id, mag);
        record.depth = depth;
        record
    }

    #[test]
    fn test_empty_set_has_no_statistics() {
        let records: Vec<EarthquakeRecord> = Vec::new();
        assert_eq!(aggregate(&records), None);
    }

    #[test]
    fn test_null_depth_is_excluded_from_mean() {
        let records = vec![quake("a", 3.0, None), quake("b", 5.0, Some(10.0))];
        let stats = aggregate(&records).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.magnitude.mean, Some(4.0));
        assert_eq!(stats.magnitude.min, Some(3.0));
        assert_eq!(stats.magnitude.max, Some(5.0));
        assert_eq!(stats.depth.count, 1);
        assert_eq!(stats.depth.mean, Some(10.0));
    }

    #[test]
    fn test_all_null_depth_is_none_not_nan() {
        let records = vec![quake("a", 1.0, None), quake("b", 2.0, None)];
        let stats = aggregate(&records).unwrap();
        assert_eq!(stats.depth.count, 0);
        assert_eq!(stats.depth.mean, None);
        assert_eq!(stats.depth.min, None);
        assert_eq!(stats.depth.max, None);
    }

    #[test]
    fn test_aggregate_over_borrowed_subset() {
        let records = vec![quake("a", 1.0, Some(2.0)), quake("b", 3.0, Some(4.0))];
        let subset: Vec<&EarthquakeRecord> = records.iter().skip(1).collect();
        let stats = aggregate(subset.iter().copied()).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.depth.max, Some(4.0));
    }

    #[test]
    fn test_count_recent() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        let mut fresh = quake("a", 1.0, None);
        fresh.time = Some(now - Duration::hours(3));
        let mut old = quake("b", 1.0, None);
        old.time = Some(now - Duration::hours(30));
        let undated = quake("c", 1.0, None);
        let records = vec![fresh, old, undated];
        assert_eq!(count_recent(&records, now, Duration::hours(24)), 1);
    }
}
