//! Request tokens for last-result-wins correlation.

use serde::{Deserialize, Serialize};

/// Identifies one outbound request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

/// Issues tickets and remembers the most recent one.
#[derive(Debug, Clone, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// True if no ticket has been issued after `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut counter = TicketCounter::new();
        let first = counter.issue();
        assert!(counter.is_current(first));
        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(second > first);
    }
}
