//! Stride downsampling for the scatter chart.

use crate::record::EarthquakeRecord;

/// Downsample `records` to roughly `max_points` by taking every
/// `ceil(len / max_points)`-th record from index 0, then appending any
/// pinned record the stride skipped.
///
/// Output order is the strided run in original order followed by missing
/// pinned records in `pinned_ids` order. Pinned ids with no matching record
/// are ignored. With `max_points == 0` only the pinned records are returned.
pub fn sample<'a>(
    records: &'a [EarthquakeRecord],
    max_points: usize,
    pinned_ids: &[String],
) -> Vec<&'a EarthquakeRecord> {
    if records.len() <= max_points {
        return records.iter().collect();
    }

    let mut sampled: Vec<&EarthquakeRecord> = match stride(records.len(), max_points) {
        Some(step) => records.iter().step_by(step).collect(),
        None => Vec::new(),
    };

    for pinned in pinned_ids {
        if sampled.iter().any(|r| &r.id == pinned) {
            continue;
        }
        if let Some(record) = records.iter().find(|r| &r.id == pinned) {
            sampled.push(record);
        }
    }
    sampled
}

/// Stride used when `len` records exceed `max_points`.
pub fn stride(len: usize, max_points: usize) -> Option<usize> {
    if max_points == 0 {
        return None;
    }
    Some(len.div_ceil(max_points).max(1))
}
