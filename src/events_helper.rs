use kube::Resource;
use kube::runtime::events::EventType;

use crate::events::{Delivery, EventReport, EventReporter, FailureLog, Subject};
use crate::events::sink::EventSink;

/// Publish an event about a live object, ignoring errors.
pub async fn emit<S, L, R>(
    reporter: &EventReporter<S, L>,
    obj: &R,
    type_: EventType,
    reason: &str,
    action: &str,
    message: impl Into<String>,
) -> Delivery
where
    S: EventSink,
    L: FailureLog,
    R: Resource<DynamicType = ()>,
{
    let report = EventReport::new(Subject::from_resource(obj), reason, message)
        .with_action(action)
        .with_type(type_);
    reporter.report(&report).await
}

/// Publish a simple Normal event with given reason and message, ignoring errors.
pub async fn emit_info<S: EventSink, L: FailureLog, R: Resource<DynamicType = ()>>(
    reporter: &EventReporter<S, L>,
    obj: &R,
    reason: &str,
    action: &str,
    message: impl Into<String>,
) -> Delivery {
    emit(reporter, obj, EventType::Normal, reason, action, message).await
}

pub async fn emit_warning<S: EventSink, L: FailureLog, R: Resource<DynamicType = ()>>(
    reporter: &EventReporter<S, L>,
    obj: &R,
    reason: &str,
    action: &str,
    message: impl Into<String>,
) -> Delivery {
    emit(reporter, obj, EventType::Warning, reason, action, message).await
}
