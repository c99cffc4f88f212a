//! Shared display formatting for EQD crates.

/// Placeholder shown for missing values.
pub const MISSING: &str = "N/A";

/// Date utility functions
pub mod dates {
    use super::MISSING;
    use chrono::{DateTime, Utc};

    /// Format a timestamp as "YYYY-MM-DD HH:MM:SS UTC", or "N/A".
    pub fn format_timestamp(time: Option<DateTime<Utc>>) -> String {
        match time {
            Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => MISSING.to_string(),
        }
    }

    /// ISO 8601 with milliseconds, the shape D3 parses directly.
    pub fn format_iso(time: Option<DateTime<Utc>>) -> Option<String> {
        time.map(|t| t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn test_format_timestamp() {
            let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
            assert_eq!(format_timestamp(Some(t)), "2024-05-01 12:34:56 UTC");
            assert_eq!(format_timestamp(None), "N/A");
            assert_eq!(format_iso(Some(t)).unwrap(), "2024-05-01T12:34:56.000Z");
        }
    }
}

/// Number formatting
pub mod numbers {
    use super::MISSING;

    /// Fixed-precision rendering, or "N/A".
    pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
        match value {
            Some(v) => format!("{:.*}", decimals, v),
            None => MISSING.to_string(),
        }
    }

    /// Thousands separators: 12345 -> "12,345".
    pub fn format_count(count: usize) -> String {
        let digits = count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_fixed() {
            assert_eq!(format_fixed(Some(4.4567), 2), "4.46");
            assert_eq!(format_fixed(Some(-117.6), 2), "-117.60");
            assert_eq!(format_fixed(None, 2), "N/A");
        }

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(999), "999");
            assert_eq!(format_count(1000), "1,000");
            assert_eq!(format_count(1234567), "1,234,567");
        }
    }
}

/// Magnitude severity bands used for colour coding.
pub mod severity {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Band {
        Minor,
        Light,
        Moderate,
        Strong,
    }

    pub fn band(magnitude: f64) -> Band {
        if magnitude >= 6.0 {
            Band::Strong
        } else if magnitude >= 4.0 {
            Band::Moderate
        } else if magnitude >= 2.0 {
            Band::Light
        } else {
            Band::Minor
        }
    }

    impl Band {
        /// CSS colour for the band's marker dot.
        pub fn color(self) -> &'static str {
            match self {
                Band::Strong => "#EF4444",
                Band::Moderate => "#F97316",
                Band::Light => "#EAB308",
                Band::Minor => "#22C55E",
            }
        }
    }

}
