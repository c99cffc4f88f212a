//! Substring search over the record set, plus the debouncer that decides
//! which query actually runs.

use crate::{
    record::EarthquakeRecord,
    ticket::{Ticket, TicketCounter},
};

/// Keep records whose place, id, or magnitude text contains `query`,
/// case-insensitively, in original order.
///
/// An empty or whitespace-only query returns every record.
pub fn filter<'a>(records: &'a [EarthquakeRecord], query: &str) -> Vec<&'a EarthquakeRecord> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records.iter().filter(|r| matches(r, &needle)).collect()
}

/// `needle` must already be lowercase.
fn matches(record: &EarthquakeRecord, needle: &str) -> bool {
    record.place.to_lowercase().contains(needle)
        || record.id.to_lowercase().contains(needle)
        || record.magnitude.to_string().contains(needle)
}

/// Holds the newest raw input until its quiet period has passed.
///
/// Each keystroke calls [`push`](Self::push) and gets a ticket; the caller
/// waits the debounce delay and then calls [`settle`](Self::settle) with that
/// ticket. Only the ticket of the last push yields a value, so intermediate
/// keystrokes never trigger a search pass.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    tickets: TicketCounter,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            tickets: TicketCounter::new(),
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) -> Ticket {
        self.pending = Some(value);
        self.tickets.issue()
    }

    /// Take the pending value if `ticket` is still the latest push.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if !self.tickets.is_current(ticket) {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ridgecrest() -> EarthquakeRecord {
        let mut record = EarthquakeRecord::new("us1000abcd", 4.5);
        record.place = "10km NE of Ridgecrest, CA".to_string();
        record
    }

    fn sample_set() -> Vec<EarthquakeRecord> {
        let mut a = EarthquakeRecord::new("ak0245xyz", 1.2);
        a.place = "30 km N of Anchorage, Alaska".to_string();
        let mut b = EarthquakeRecord::new("nc7300", 3.0);
        b.place = "The Geysers, CA".to_string();
        vec![a, ridgecrest(), b]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = sample_set();
        for query in ["", "   ", "\t"] {
            let result = filter(&records, query);
            assert_eq!(result.len(), records.len());
            for (got, want) in result.iter().zip(&records) {
                assert_eq!(*got, want);
            }
        }
    }

    #[test]
    fn test_matches_place_id_and_magnitude() {
        let records = vec![ridgecrest()];
        assert_eq!(filter(&records, "ridgecrest").len(), 1);
        assert_eq!(filter(&records, "RIDGECREST").len(), 1);
        assert_eq!(filter(&records, "us1000abcd").len(), 1);
        assert_eq!(filter(&records, "4.5").len(), 1);
        assert!(filter(&records, "4.6").is_empty());
    }

    #[test]
    fn test_whole_magnitudes_render_without_fraction() {
        let records = vec![EarthquakeRecord::new("evt", 3.0)];
        assert_eq!(filter(&records, "3").len(), 1);
        assert!(filter(&records, "3.0").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = sample_set();
        let hits = filter(&records, ", ");
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ak0245xyz", "us1000abcd", "nc7300"]);
    }

    #[test]
    fn test_debouncer_honours_only_the_last_keystroke() {
        let mut debouncer = Debouncer::new();
        let t1 = debouncer.push("r".to_string());
        let t2 = debouncer.push("ri".to_string());
        let t3 = debouncer.push("rid".to_string());

        assert_eq!(debouncer.settle(t1), None);
        assert_eq!(debouncer.settle(t2), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.settle(t3), Some("rid".to_string()));
        assert!(!debouncer.is_pending());
        // A second firing of the same timer yields nothing.
        assert_eq!(debouncer.settle(t3), None);
    }

    #[test]
    fn test_debouncer_after_settle_accepts_new_input() {
        let mut debouncer = Debouncer::new();
        let t1 = debouncer.push(1);
        assert_eq!(debouncer.settle(t1), Some(1));
        let t2 = debouncer.push(2);
        assert_eq!(debouncer.settle(t2), Some(2));
    }
}
