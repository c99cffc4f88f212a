//! Native worker: a dedicated thread that runs pipeline stages.
//!
//! Requests and responses cross the thread boundary only as JSON strings, so
//! the worker owns its own copy of every payload.

use anyhow::{anyhow, bail};
use eqd_core::{
    ticket::Ticket,
    worker::{handle_message, Operation, ResponseGate, WorkerRequest, WorkerResponse},
};
use log::debug;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<String>,
    responses: mpsc::UnboundedReceiver<String>,
    thread: JoinHandle<()>,
}

impl WorkerHandle {
    pub fn spawn() -> anyhow::Result<Self> {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<String>();
        let (response_tx, response_rx) = mpsc::unbounded_channel::<String>();
        let thread = std::thread::Builder::new()
            .name("eqd-worker".to_string())
            .spawn(move || {
                while let Some(raw) = request_rx.blocking_recv() {
                    if let Some(reply) = handle_message(&raw) {
                        if response_tx.send(reply).is_err() {
                            break;
                        }
                    }
                }
                debug!("[EQD] worker: request channel closed, exiting");
            })?;
        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            thread,
        })
    }

    /// Send raw JSON. Used for requests built outside [`WorkerRequest`].
    pub fn post_raw(&self, raw: String) -> anyhow::Result<()> {
        self.requests
            .send(raw)
            .map_err(|_| anyhow!("worker thread has stopped"))
    }

    pub fn post(&self, request: &WorkerRequest) -> anyhow::Result<()> {
        self.post_raw(serde_json::to_string(request)?)
    }

    /// Next response, or `None` once the worker has stopped.
    pub async fn recv(&mut self) -> Option<WorkerResponse> {
        while let Some(raw) = self.responses.recv().await {
            match serde_json::from_str(&raw) {
                Ok(response) => return Some(response),
                Err(e) => debug!("[EQD] worker: undecodable response dropped: {}", e),
            }
        }
        None
    }

    /// Close the request channel and wait for the thread to finish.
    pub fn shutdown(self) {
        let Self {
            requests, thread, ..
        } = self;
        drop(requests);
        let _ = thread.join();
    }
}

/// A worker plus the ticket gate that filters its responses.
pub struct WorkerClient {
    handle: WorkerHandle,
    gate: ResponseGate,
}

impl WorkerClient {
    pub fn spawn() -> anyhow::Result<Self> {
        Ok(Self {
            handle: WorkerHandle::spawn()?,
            gate: ResponseGate::new(),
        })
    }

    /// Issue a ticket for `operation` and post the request built with it.
    pub fn submit(
        &mut self,
        operation: Operation,
        build: impl FnOnce(Ticket) -> WorkerRequest,
    ) -> anyhow::Result<Ticket> {
        let ticket = self.gate.issue(operation);
        self.handle.post(&build(ticket))?;
        Ok(ticket)
    }

    /// Wait for the next response that is still current; stale ones are
    /// discarded.
    pub async fn next_current(&mut self) -> anyhow::Result<WorkerResponse> {
        while let Some(response) = self.handle.recv().await {
            if self.gate.accept(&response) {
                return Ok(response);
            }
            debug!(
                "[EQD] worker: discarding stale {:?} response {:?}",
                response.operation(),
                response.ticket()
            );
        }
        bail!("worker stopped before answering")
    }

    /// Submit one request and wait for its answer.
    pub async fn request(
        &mut self,
        operation: Operation,
        build: impl FnOnce(Ticket) -> WorkerRequest,
    ) -> anyhow::Result<WorkerResponse> {
        self.submit(operation, build)?;
        self.next_current().await
    }

    pub fn shutdown(self) {
        self.handle.shutdown();
    }
}
