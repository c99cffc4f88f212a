//! Attach chart coordinates to records.

use crate::record::{EarthquakeRecord, NumericField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record placed on the scatter chart, with just what the tooltip needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub place: String,
    pub magnitude: f64,
    pub depth: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

/// Project records onto the `x`/`y` axes, dropping any record missing
/// either value. Order is preserved.
pub fn project<'a>(
    records: impl IntoIterator<Item = &'a EarthquakeRecord>,
    x: NumericField,
    y: NumericField,
) -> Vec<ChartPoint> {
    records
        .into_iter()
        .filter_map(|record| {
            Some(ChartPoint {
                id: record.id.clone(),
                x: x.value(record)?,
                y: y.value(record)?,
                place: record.place.clone(),
                magnitude: record.magnitude,
                depth: record.depth,
                time: record.time,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_drops_missing_axis_values() {
        let mut deep = EarthquakeRecord::new("deep", 4.0);
        deep.depth = Some(120.0);
        let shallow_unknown = EarthquakeRecord::new("unknown", 2.0);
        let records = vec![deep, shallow_unknown];

        let points = project(&records, NumericField::Magnitude, NumericField::Depth);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, "deep");
        assert_eq!(points[0].x, 4.0);
        assert_eq!(points[0].y, 120.0);

        let points = project(&records, NumericField::Magnitude, NumericField::Magnitude);
        assert_eq!(points.len(), 2);
    }
}
