use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid Event Type: {0}")]
    InvalidEventType(String),

    /// NB: this is a catch-all for any other errors
    #[error("Other Error: {0}")]
    OtherError(String),
}
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Kubernetes Event construction and best-effort submission
pub mod events;
pub mod events_helper;
pub mod helper;
/// Reason and action codes reported during node rotation
pub mod reasons;

pub use crate::events::{
    Delivery, EventReport, EventReporter, FailureKind, FailureLog, ReportFailure,
    ReportingIdentity, Subject, TracingFailureLog, report_event,
};
pub use crate::events::sink::EventSink;

/// Log and trace integrations
pub mod telemetry;
