//! In-memory stand-ins for the event API and the failure log.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use k8s_openapi::api::core::v1::Event;
use kube::core::ErrorResponse;
use serde_json::json;

use super::sink::EventSink;
use super::{EventReport, FailureKind, FailureLog, ReportFailure};

pub fn error_response(code: u16) -> ErrorResponse {
    let reason = match code {
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "NotFound",
        409 => "AlreadyExists",
        422 => "Invalid",
        _ => "InternalError",
    };
    serde_json::from_value(json!({
        "status": "Failure",
        "message": format!("events is {}", reason.to_lowercase()),
        "reason": reason,
        "code": code,
    }))
    .unwrap()
}

/// Accepts every event and hands it back as the API server would.
#[derive(Default)]
pub struct EchoSink {
    pub calls: AtomicUsize,
    pub namespaces: Mutex<Vec<String>>,
}

impl EchoSink {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EventSink for EchoSink {
    async fn create_event(&self, namespace: &str, event: &Event) -> kube::Result<Event> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.namespaces.lock().unwrap().push(namespace.to_string());
        Ok(event.clone())
    }
}

/// Answers every create with the given API status.
pub struct RejectingSink {
    pub code: u16,
    pub calls: AtomicUsize,
}

impl RejectingSink {
    pub fn new(code: u16) -> Self {
        Self {
            code,
            calls: AtomicUsize::new(0),
        }
    }
}

impl EventSink for RejectingSink {
    async fn create_event(&self, _namespace: &str, _event: &Event) -> kube::Result<Event> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(kube::Error::Api(error_response(self.code)))
    }
}

pub struct UnreachableSink;

impl EventSink for UnreachableSink {
    async fn create_event(&self, _namespace: &str, _event: &Event) -> kube::Result<Event> {
        Err(kube::Error::Service(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "tcp connect error: connection refused",
        ))))
    }
}

#[derive(Default)]
pub struct RecordingLog {
    pub entries: Mutex<Vec<(String, FailureKind, String)>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<(String, FailureKind, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl FailureLog for RecordingLog {
    fn event_not_created(&self, report: &EventReport, failure: &ReportFailure) {
        self.entries
            .lock()
            .unwrap()
            .push((report.reason.clone(), failure.kind, failure.cause.clone()));
    }
}
