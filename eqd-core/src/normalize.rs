//! Feed CSV -> typed records.
//!
//! The header row defines column order. Headers are mapped to canonical
//! [`Column`]s through a [`ColumnAliases`] table; unknown headers are
//! ignored. Cells that fail to parse become `None`. A row survives only if
//! it has a non-empty `id` and a numeric `mag`; everything else is dropped
//! quietly and counted in the log.

use crate::{error::IngestionError, record::EarthquakeRecord};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;

/// Canonical columns of the USGS summary CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Time,
    Latitude,
    Longitude,
    Depth,
    Mag,
    MagType,
    Nst,
    Gap,
    Dmin,
    Rms,
    Net,
    Id,
    Updated,
    Place,
    Type,
    HorizontalError,
    DepthError,
    MagError,
    MagNst,
    Status,
    LocationSource,
    MagSource,
}

impl Column {
    pub const ALL: [Column; 22] = [
        Column::Time,
        Column::Latitude,
        Column::Longitude,
        Column::Depth,
        Column::Mag,
        Column::MagType,
        Column::Nst,
        Column::Gap,
        Column::Dmin,
        Column::Rms,
        Column::Net,
        Column::Id,
        Column::Updated,
        Column::Place,
        Column::Type,
        Column::HorizontalError,
        Column::DepthError,
        Column::MagError,
        Column::MagNst,
        Column::Status,
        Column::LocationSource,
        Column::MagSource,
    ];

    /// Header spelling used by the USGS feed.
    pub fn header(self) -> &'static str {
        match self {
            Column::Time => "time",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Depth => "depth",
            Column::Mag => "mag",
            Column::MagType => "magType",
            Column::Nst => "nst",
            Column::Gap => "gap",
            Column::Dmin => "dmin",
            Column::Rms => "rms",
            Column::Net => "net",
            Column::Id => "id",
            Column::Updated => "updated",
            Column::Place => "place",
            Column::Type => "type",
            Column::HorizontalError => "horizontalError",
            Column::DepthError => "depthError",
            Column::MagError => "magError",
            Column::MagNst => "magNst",
            Column::Status => "status",
            Column::LocationSource => "locationSource",
            Column::MagSource => "magSource",
        }
    }
}

/// Alternative header spellings accepted by [`ColumnAliases::default`].
const DEFAULT_ALIASES: &[(&str, Column)] = &[
    ("magnitude", Column::Mag),
    ("mag_type", Column::MagType),
    ("magnitude_type", Column::MagType),
    ("lat", Column::Latitude),
    ("lon", Column::Longitude),
    ("lng", Column::Longitude),
    ("long", Column::Longitude),
    ("depth_km", Column::Depth),
    ("event_id", Column::Id),
    ("location", Column::Place),
    ("event_type", Column::Type),
    ("horizontal_error", Column::HorizontalError),
    ("depth_error", Column::DepthError),
    ("mag_error", Column::MagError),
    ("mag_nst", Column::MagNst),
    ("location_source", Column::LocationSource),
    ("mag_source", Column::MagSource),
];

/// Maps header text to canonical columns. Lookup is case-insensitive on the
/// trimmed header.
#[derive(Debug, Clone)]
pub struct ColumnAliases {
    map: HashMap<String, Column>,
}

impl ColumnAliases {
    /// Canonical headers only.
    pub fn identity() -> Self {
        let map = Column::ALL
            .into_iter()
            .map(|column| (column.header().to_ascii_lowercase(), column))
            .collect();
        Self { map }
    }

    pub fn with_alias(mut self, header: &str, column: Column) -> Self {
        self.map.insert(header.trim().to_ascii_lowercase(), column);
        self
    }

    pub fn resolve(&self, header: &str) -> Option<Column> {
        self.map.get(&header.trim().to_ascii_lowercase()).copied()
    }
}

impl Default for ColumnAliases {
    fn default() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::identity(), |aliases, (header, column)| {
                aliases.with_alias(header, *column)
            })
    }
}

/// Parse raw feed text into the working record set.
///
/// Fails only when the text is not a table with the expected header.
/// Row-level problems are never errors.
pub fn normalize(
    raw_text: &str,
    aliases: &ColumnAliases,
) -> Result<Vec<EarthquakeRecord>, IngestionError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestionError::EmptyFeed);
    }

    let layout: Vec<Option<Column>> = headers.iter().map(|h| aliases.resolve(h)).collect();
    if !layout.contains(&Some(Column::Id)) {
        return Err(IngestionError::MissingColumn("id"));
    }
    if !layout.contains(&Some(Column::Mag)) {
        return Err(IngestionError::MissingColumn("mag"));
    }

    let mut records = Vec::new();
    let mut dropped = 0u32;
    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::debug!("[EQD] normalize: unreadable row skipped: {}", e);
                dropped += 1;
                continue;
            }
        };
        match row_to_record(&row, &layout) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    log::info!(
        "[EQD] normalize: loaded {} records, dropped {} rows",
        records.len(),
        dropped
    );
    Ok(records)
}

fn row_to_record(row: &StringRecord, layout: &[Option<Column>]) -> Option<EarthquakeRecord> {
    let mut record = EarthquakeRecord::new(String::new(), 0.0);
    let mut magnitude = None;

    for (cell, column) in row.iter().zip(layout) {
        let Some(column) = column else { continue };
        let cell = cell.trim();
        match column {
            Column::Time => record.time = parse_timestamp(cell),
            Column::Latitude => record.latitude = parse_number(cell),
            Column::Longitude => record.longitude = parse_number(cell),
            Column::Depth => record.depth = parse_number(cell),
            Column::Mag => magnitude = parse_number(cell),
            Column::MagType => record.mag_type = cell.to_string(),
            Column::Nst => record.nst = parse_number(cell),
            Column::Gap => record.gap = parse_number(cell),
            Column::Dmin => record.dmin = parse_number(cell),
            Column::Rms => record.rms = parse_number(cell),
            Column::Net => record.net = cell.to_string(),
            Column::Id => record.id = cell.to_string(),
            Column::Updated => record.updated = parse_timestamp(cell),
            Column::Place => record.place = cell.to_string(),
            Column::Type => record.event_type = cell.to_string(),
            Column::HorizontalError => record.horizontal_error = parse_number(cell),
            Column::DepthError => record.depth_error = parse_number(cell),
            Column::MagError => record.mag_error = parse_number(cell),
            Column::MagNst => record.mag_nst = parse_number(cell),
            Column::Status => record.status = cell.to_string(),
            Column::LocationSource => record.location_source = cell.to_string(),
            Column::MagSource => record.mag_source = cell.to_string(),
        }
    }

    if record.id.is_empty() {
        return None;
    }
    record.magnitude = magnitude?;
    Some(record)
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_timestamp(cell: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(cell)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
