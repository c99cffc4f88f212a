use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A single seismic event from the USGS feed.
///
/// Records are built once per ingestion pass and never mutated afterwards.
/// `magnitude` is not optional: rows without one are dropped by the
/// normalizer, so every record in a working set carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    /// USGS event id, unique and non-empty (e.g. "us7000abcd")
    pub id: String,
    /// Origin time
    pub time: Option<DateTime<Utc>>,
    /// Human-readable location, may be empty
    pub place: String,
    pub magnitude: f64,
    /// Depth in kilometres
    pub depth: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub mag_type: String,
    /// Number of stations used to locate the event
    pub nst: Option<f64>,
    /// Largest azimuthal gap between stations, degrees
    pub gap: Option<f64>,
    /// Distance to nearest station, degrees
    pub dmin: Option<f64>,
    /// Root-mean-square travel time residual, seconds
    pub rms: Option<f64>,
    pub net: String,
    pub updated: Option<DateTime<Utc>>,
    /// Event type ("earthquake", "quarry blast", ...)
    pub event_type: String,
    pub horizontal_error: Option<f64>,
    pub depth_error: Option<f64>,
    pub mag_error: Option<f64>,
    pub mag_nst: Option<f64>,
    /// Review status ("automatic" or "reviewed")
    pub status: String,
    pub location_source: String,
    pub mag_source: String,
}

impl EarthquakeRecord {
    /// A record with only the required fields set.
    pub fn new(id: impl Into<String>, magnitude: f64) -> Self {
        Self {
            id: id.into(),
            time: None,
            place: String::new(),
            magnitude,
            depth: None,
            latitude: None,
            longitude: None,
            mag_type: String::new(),
            nst: None,
            gap: None,
            dmin: None,
            rms: None,
            net: String::new(),
            updated: None,
            event_type: String::new(),
            horizontal_error: None,
            depth_error: None,
            mag_error: None,
            mag_nst: None,
            status: String::new(),
            location_source: String::new(),
            mag_source: String::new(),
        }
    }
}

/// Numeric fields that may be plotted on a chart axis.
///
/// Axis choice is a closed set; there is no access to record fields by
/// free-form name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    Magnitude,
    Depth,
    Latitude,
    Longitude,
    Rms,
    Gap,
    Dmin,
    HorizontalError,
    DepthError,
    MagError,
}

impl NumericField {
    /// Every selectable axis, in the order shown by the axis dropdowns.
    pub const ALL: [NumericField; 10] = [
        NumericField::Magnitude,
        NumericField::Depth,
        NumericField::Latitude,
        NumericField::Longitude,
        NumericField::Rms,
        NumericField::Gap,
        NumericField::Dmin,
        NumericField::HorizontalError,
        NumericField::DepthError,
        NumericField::MagError,
    ];

    /// Stable key, matching the feed's column header.
    pub fn key(self) -> &'static str {
        match self {
            NumericField::Magnitude => "mag",
            NumericField::Depth => "depth",
            NumericField::Latitude => "latitude",
            NumericField::Longitude => "longitude",
            NumericField::Rms => "rms",
            NumericField::Gap => "gap",
            NumericField::Dmin => "dmin",
            NumericField::HorizontalError => "horizontalError",
            NumericField::DepthError => "depthError",
            NumericField::MagError => "magError",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Magnitude => "Magnitude",
            NumericField::Depth => "Depth (km)",
            NumericField::Latitude => "Latitude",
            NumericField::Longitude => "Longitude",
            NumericField::Rms => "RMS",
            NumericField::Gap => "Gap (degrees)",
            NumericField::Dmin => "Min Distance",
            NumericField::HorizontalError => "Horizontal Error",
            NumericField::DepthError => "Depth Error",
            NumericField::MagError => "Magnitude Error",
        }
    }

    /// Read this field from a record.
    pub fn value(self, record: &EarthquakeRecord) -> Option<f64> {
        match self {
            NumericField::Magnitude => Some(record.magnitude),
            NumericField::Depth => record.depth,
            NumericField::Latitude => record.latitude,
            NumericField::Longitude => record.longitude,
            NumericField::Rms => record.rms,
            NumericField::Gap => record.gap,
            NumericField::Dmin => record.dmin,
            NumericField::HorizontalError => record.horizontal_error,
            NumericField::DepthError => record.depth_error,
            NumericField::MagError => record.mag_error,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no selectable axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown numeric field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for NumericField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
