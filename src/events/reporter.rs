use chrono::{DateTime, SubsecRound, Utc};
use k8s_openapi::api::core::v1::{Event, EventSource};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{MicroTime, ObjectMeta, Time};
use tracing::*;
use uuid::Uuid;

use super::sink::{EventSink, event_namespace};
use super::{
    EventReport, FailureLog, ReportFailure, ReportingIdentity, TracingFailureLog, event_type_name,
};

/// Outcome of one emission attempt.
#[derive(Debug)]
#[must_use]
pub enum Delivery {
    /// The record as acknowledged by the API server
    Created(Box<Event>),
    /// Nothing was stored; the failure has already been logged
    NotCreated(ReportFailure),
}

impl Delivery {
    pub fn is_created(&self) -> bool {
        matches!(self, Delivery::Created(_))
    }

    pub fn created(&self) -> Option<&Event> {
        match self {
            Delivery::Created(event) => Some(event),
            Delivery::NotCreated(_) => None,
        }
    }

    pub fn into_created(self) -> Option<Event> {
        match self {
            Delivery::Created(event) => Some(*event),
            Delivery::NotCreated(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ReportFailure> {
        match self {
            Delivery::Created(_) => None,
            Delivery::NotCreated(failure) => Some(failure),
        }
    }
}

/// Assemble a single-occurrence event observed at `now`.
///
/// The name is a fresh v4 UUID on every call.
pub fn build_event(
    identity: &ReportingIdentity,
    report: &EventReport,
    now: DateTime<Utc>,
) -> Event {
    Event {
        metadata: ObjectMeta {
            name: Some(Uuid::new_v4().to_string()),
            namespace: Some(event_namespace(&report.subject.namespace).to_string()),
            ..ObjectMeta::default()
        },
        involved_object: report.subject.object_reference(),
        reason: Some(report.reason.clone()),
        message: Some(report.message.clone()),
        type_: Some(event_type_name(report.type_).to_string()),
        action: Some(report.action.clone()),
        source: Some(EventSource {
            component: Some(identity.component.clone()),
            host: Some(identity.instance.clone()),
        }),
        reporting_component: Some(identity.component.clone()),
        reporting_instance: Some(identity.instance.clone()),
        event_time: Some(MicroTime(now)),
        first_timestamp: Some(Time(now)),
        last_timestamp: Some(Time(now)),
        count: Some(1),
        ..Event::default()
    }
}

/// `Time` goes over the wire with second precision; truncating up front keeps
/// all three timestamps equal after the round trip. The stored instant may
/// therefore precede the call by up to a second.
fn observed_at() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Create one event for `report`, absorbing any failure.
///
/// Invalid subjects are rejected without a request. Every failure is passed
/// to `log` before `NotCreated` is returned.
pub async fn report_event<S, L>(
    sink: &S,
    log: &L,
    identity: &ReportingIdentity,
    report: &EventReport,
) -> Delivery
where
    S: EventSink + ?Sized,
    L: FailureLog + ?Sized,
{
    if let Err(failure) = report.subject.validate() {
        log.event_not_created(report, &failure);
        return Delivery::NotCreated(failure);
    }
    let event = build_event(identity, report, observed_at());
    let namespace = event_namespace(&report.subject.namespace);
    match sink.create_event(namespace, &event).await {
        Ok(created) => {
            debug!(
                "Created event {:?} ({}) for {} {:?}",
                created.metadata.name, report.reason, report.subject.kind, report.subject.name
            );
            Delivery::Created(Box::new(created))
        }
        Err(err) => {
            let failure = ReportFailure::from(err);
            log.event_not_created(report, &failure);
            Delivery::NotCreated(failure)
        }
    }
}

/// Event API handle, failure log and reporting identity bundled for callers
/// that emit many events.
#[derive(Clone, Debug)]
pub struct EventReporter<S, L = TracingFailureLog> {
    sink: S,
    log: L,
    identity: ReportingIdentity,
}

impl<S: EventSink> EventReporter<S> {
    pub fn new(sink: S, identity: ReportingIdentity) -> Self {
        Self {
            sink,
            log: TracingFailureLog,
            identity,
        }
    }
}

impl<S: EventSink, L: FailureLog> EventReporter<S, L> {
    pub fn with_log<L2: FailureLog>(self, log: L2) -> EventReporter<S, L2> {
        EventReporter {
            sink: self.sink,
            log,
            identity: self.identity,
        }
    }

    pub fn identity(&self) -> &ReportingIdentity {
        &self.identity
    }

    pub async fn report(&self, report: &EventReport) -> Delivery {
        report_event(&self.sink, &self.log, &self.identity, report).await
    }
}
