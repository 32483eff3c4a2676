use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::*;

use super::EventReport;

/// Coarse classification of why an event was not created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// API unreachable, timed out, or failing server-side
    Transport,
    /// Caller may not create events in the namespace
    Authorization,
    /// Payload rejected, by the API server or before submission
    Validation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::Transport => "transport",
            FailureKind::Authorization => "authorization",
            FailureKind::Validation => "validation",
        })
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind} failure: {cause}")]
pub struct ReportFailure {
    pub kind: FailureKind,
    /// HTTP status returned by the API server, if it answered at all
    pub status: Option<u16>,
    /// Rendered underlying error
    pub cause: String,
}

impl ReportFailure {
    pub fn new(kind: FailureKind, cause: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            cause: cause.into(),
        }
    }

    pub(crate) fn rejected(cause: impl Into<String>) -> Self {
        Self::new(FailureKind::Validation, cause)
    }

    pub fn from_kube(err: &kube::Error) -> Self {
        let (kind, status) = match err {
            kube::Error::Api(resp) => (classify_status(resp.code), Some(resp.code)),
            kube::Error::SerdeError(_) => (FailureKind::Validation, None),
            _ => (FailureKind::Transport, None),
        };
        Self {
            kind,
            status,
            cause: err.to_string(),
        }
    }
}

impl From<kube::Error> for ReportFailure {
    fn from(err: kube::Error) -> Self {
        Self::from_kube(&err)
    }
}

fn classify_status(code: u16) -> FailureKind {
    match code {
        401 | 403 => FailureKind::Authorization,
        400 | 404 | 409 | 422 => FailureKind::Validation,
        _ => FailureKind::Transport,
    }
}

/// Where absorbed failures go. Emission never surfaces errors to the caller,
/// so this is the only trace a failed event leaves.
pub trait FailureLog: Send + Sync {
    fn event_not_created(&self, report: &EventReport, failure: &ReportFailure);
}

/// Logs failures at error level through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFailureLog;

impl FailureLog for TracingFailureLog {
    fn event_not_created(&self, report: &EventReport, failure: &ReportFailure) {
        error!(
            kind = %report.subject.kind,
            name = %report.subject.name,
            namespace = %report.subject.namespace,
            reason = %report.reason,
            failure = %failure.kind,
            status = ?failure.status,
            cause = %failure.cause,
            "Failed to create event"
        );
    }
}

impl<L: FailureLog + ?Sized> FailureLog for &L {
    fn event_not_created(&self, report: &EventReport, failure: &ReportFailure) {
        (**self).event_not_created(report, failure)
    }
}

impl<L: FailureLog + ?Sized> FailureLog for Arc<L> {
    fn event_not_created(&self, report: &EventReport, failure: &ReportFailure) {
        (**self).event_not_created(report, failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::error_response;
    use crate::events::{EventReport, Subject};
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_log_writes_cause_at_error_level() {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let report = EventReport::new(
            Subject::node("node-abc123"),
            "NodeRotationStarted",
            "Replacement node build initiated for node-abc123",
        );
        let failure = ReportFailure::from(kube::Error::Api(error_response(403)));

        tracing::subscriber::with_default(subscriber, || {
            TracingFailureLog.event_not_created(&report, &failure);
        });

        let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("ERROR"), "logged: {logged}");
        assert!(logged.contains("Failed to create event"));
        assert!(logged.contains("cause="));
        assert!(logged.contains("events is forbidden"));
        assert!(logged.contains("failure=authorization"));
        assert!(logged.contains("name=node-abc123"));
    }

    #[test]
    fn api_status_codes_are_classified() {
        let cases = [
            (401, FailureKind::Authorization),
            (403, FailureKind::Authorization),
            (400, FailureKind::Validation),
            (404, FailureKind::Validation),
            (409, FailureKind::Validation),
            (422, FailureKind::Validation),
            (500, FailureKind::Transport),
            (503, FailureKind::Transport),
        ];
        for (code, kind) in cases {
            let failure = ReportFailure::from(kube::Error::Api(error_response(code)));
            assert_eq!(failure.kind, kind, "status {code}");
            assert_eq!(failure.status, Some(code));
        }
    }

    #[test]
    fn transport_errors_keep_their_cause() {
        let err = kube::Error::Service(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )));
        let failure = ReportFailure::from(err);
        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.status, None);
        assert!(failure.cause.contains("connection refused"));
        assert!(failure.to_string().starts_with("transport failure: "));
    }

    #[test]
    fn undecodable_response_is_validation() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure = ReportFailure::from(kube::Error::SerdeError(err));
        assert_eq!(failure.kind, FailureKind::Validation);
    }
}
