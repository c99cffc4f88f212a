//! Message contract for running pipeline stages off the interactive thread.
//!
//! The worker shares no memory with its caller: requests and responses cross
//! the boundary as JSON text. Every request carries a [`Ticket`]; the caller
//! keeps a [`ResponseGate`] and drops any response whose ticket has been
//! superseded by a newer request of the same operation, so delivery order
//! does not matter.

use crate::{
    project::{project, ChartPoint},
    record::{EarthquakeRecord, NumericField},
    sample::sample,
    search::filter,
    ticket::{Ticket, TicketCounter},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Filter,
    Sample,
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleParams {
    pub max_points: usize,
    #[serde(default)]
    pub pinned_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParams {
    pub x: NumericField,
    pub y: NumericField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerRequest {
    Filter {
        ticket: Ticket,
        payload: Vec<EarthquakeRecord>,
        parameters: FilterParams,
    },
    Sample {
        ticket: Ticket,
        payload: Vec<EarthquakeRecord>,
        parameters: SampleParams,
    },
    Project {
        ticket: Ticket,
        payload: Vec<EarthquakeRecord>,
        parameters: ProjectParams,
    },
}

impl WorkerRequest {
    pub fn operation(&self) -> Operation {
        match self {
            WorkerRequest::Filter { .. } => Operation::Filter,
            WorkerRequest::Sample { .. } => Operation::Sample,
            WorkerRequest::Project { .. } => Operation::Project,
        }
    }

    pub fn ticket(&self) -> Ticket {
        match self {
            WorkerRequest::Filter { ticket, .. }
            | WorkerRequest::Sample { ticket, .. }
            | WorkerRequest::Project { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerResponse {
    FilterComplete {
        ticket: Ticket,
        result: Vec<EarthquakeRecord>,
    },
    SampleComplete {
        ticket: Ticket,
        result: Vec<EarthquakeRecord>,
    },
    ProjectComplete {
        ticket: Ticket,
        result: Vec<ChartPoint>,
    },
}

impl WorkerResponse {
    pub fn operation(&self) -> Operation {
        match self {
            WorkerResponse::FilterComplete { .. } => Operation::Filter,
            WorkerResponse::SampleComplete { .. } => Operation::Sample,
            WorkerResponse::ProjectComplete { .. } => Operation::Project,
        }
    }

    pub fn ticket(&self) -> Ticket {
        match self {
            WorkerResponse::FilterComplete { ticket, .. }
            | WorkerResponse::SampleComplete { ticket, .. }
            | WorkerResponse::ProjectComplete { ticket, .. } => *ticket,
        }
    }
}

/// Run one request. Pure; never fails.
pub fn handle_request(request: WorkerRequest) -> WorkerResponse {
    match request {
        WorkerRequest::Filter {
            ticket,
            payload,
            parameters,
        } => WorkerResponse::FilterComplete {
            ticket,
            result: filter(&payload, &parameters.query)
                .into_iter()
                .cloned()
                .collect(),
        },
        WorkerRequest::Sample {
            ticket,
            payload,
            parameters,
        } => WorkerResponse::SampleComplete {
            ticket,
            result: sample(&payload, parameters.max_points, &parameters.pinned_ids)
                .into_iter()
                .cloned()
                .collect(),
        },
        WorkerRequest::Project {
            ticket,
            payload,
            parameters,
        } => WorkerResponse::ProjectComplete {
            ticket,
            result: project(&payload, parameters.x, parameters.y),
        },
    }
}

const KNOWN_OPERATIONS: [&str; 3] = ["FILTER", "SAMPLE", "PROJECT"];

/// Decode a JSON request, run it, and encode the response.
///
/// Unknown operation tags and malformed messages are logged and ignored.
pub fn handle_message(raw: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[EQD] worker: unreadable message ignored: {}", e);
            return None;
        }
    };
    let operation = value
        .get("operation")
        .and_then(|op| op.as_str())
        .unwrap_or_default()
        .to_string();
    if !KNOWN_OPERATIONS.contains(&operation.as_str()) {
        log::warn!("[EQD] worker: unknown operation '{}' ignored", operation);
        return None;
    }
    let request: WorkerRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("[EQD] worker: malformed {} request ignored: {}", operation, e);
            return None;
        }
    };
    let response = handle_request(request);
    match serde_json::to_string(&response) {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            log::warn!("[EQD] worker: could not encode response: {}", e);
            None
        }
    }
}

/// Caller-side correlation: issues tickets per operation and accepts only
/// the response to the latest request of each operation.
#[derive(Debug, Clone, Default)]
pub struct ResponseGate {
    counters: HashMap<Operation, TicketCounter>,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, operation: Operation) -> Ticket {
        self.counters.entry(operation).or_default().issue()
    }

    pub fn accept(&self, response: &WorkerResponse) -> bool {
        self.counters
            .get(&response.operation())
            .is_some_and(|counter| counter.is_current(response.ticket()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<EarthquakeRecord> {
        let mut a = EarthquakeRecord::new("ci001", 1.5);
        a.place = "Ridgecrest, CA".to_string();
        a.depth = Some(3.0);
        let mut b = EarthquakeRecord::new("ak002", 2.5);
        b.place = "Anchorage, Alaska".to_string();
        vec![a, b]
    }

    #[test]
    fn test_filter_request_over_json() {
        let request = WorkerRequest::Filter {
            ticket: Ticket(7),
            payload: records(),
            parameters: FilterParams {
                query: "alaska".to_string(),
            },
        };
        let raw = serde_json::to_string(&request).unwrap();
        assert!(raw.contains(r#""operation":"FILTER""#));

        let reply = handle_message(&raw).unwrap();
        assert!(reply.contains(r#""operation":"FILTER_COMPLETE""#));
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        match response {
            WorkerResponse::FilterComplete { ticket, result } => {
                assert_eq!(ticket, Ticket(7));
                assert_eq!(result.len(), 1);
                assert_eq!(result[0].id, "ak002");
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_project_request() {
        let response = handle_request(WorkerRequest::Project {
            ticket: Ticket(1),
            payload: records(),
            parameters: ProjectParams {
                x: NumericField::Magnitude,
                y: NumericField::Depth,
            },
        });
        match response {
            WorkerResponse::ProjectComplete { result, .. } => {
                assert_eq!(result.len(), 1);
                assert_eq!(result[0].id, "ci001");
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_sample_request_defaults_pinned_ids() {
        let raw = format!(
            r#"{{"operation":"SAMPLE","ticket":3,"payload":{},"parameters":{{"max_points":1}}}}"#,
            serde_json::to_string(&records()).unwrap()
        );
        let reply = handle_message(&raw).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert_eq!(response.operation(), Operation::Sample);
        match response {
            WorkerResponse::SampleComplete { result, .. } => assert_eq!(result.len(), 1),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operation_is_ignored() {
        assert_eq!(handle_message(r#"{"operation":"EXPLODE","payload":[]}"#), None);
        assert_eq!(handle_message(r#"{"payload":[]}"#), None);
        assert_eq!(handle_message("not json"), None);
        assert_eq!(handle_message(r#"{"operation":"FILTER"}"#), None);
    }

    #[test]
    fn test_gate_discards_superseded_responses() {
        let mut gate = ResponseGate::new();
        let first = gate.issue(Operation::Filter);
        let second = gate.issue(Operation::Filter);
        let sample_ticket = gate.issue(Operation::Sample);

        let stale = WorkerResponse::FilterComplete {
            ticket: first,
            result: Vec::new(),
        };
        let fresh = WorkerResponse::FilterComplete {
            ticket: second,
            result: Vec::new(),
        };
        let sampled = WorkerResponse::SampleComplete {
            ticket: sample_ticket,
            result: Vec::new(),
        };
        // Arrival order is irrelevant.
        assert!(gate.accept(&fresh));
        assert!(!gate.accept(&stale));
        assert!(gate.accept(&sampled));

        let never_issued = WorkerResponse::ProjectComplete {
            ticket: Ticket(1),
            result: Vec::new(),
        };
        assert!(!gate.accept(&never_issued));
    }
}
