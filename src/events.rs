use k8s_openapi::api::core::v1::ObjectReference;
use kube::Resource;
pub use kube::runtime::events::EventType;

use crate::{Error, Result, helper};

mod failure;
mod reporter;
pub mod sink;
#[cfg(test)]
pub(crate) mod testing;

pub use failure::{FailureKind, FailureLog, ReportFailure, TracingFailureLog};
pub use reporter::{Delivery, EventReporter, build_event, report_event};

/// Action recorded when the caller does not name one
pub static DEFAULT_ACTION: &str = "Update";

/// The resource an event is about.
///
/// `namespace` is empty for cluster-scoped kinds such as `Node`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subject {
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub api_version: Option<String>,
    pub uid: Option<String>,
}

impl Subject {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            namespace: namespace.into(),
            api_version: None,
            uid: None,
        }
    }

    pub fn node(name: impl Into<String>) -> Self {
        Self {
            api_version: Some("v1".into()),
            ..Self::new("Node", name, "")
        }
    }

    pub fn pod(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            api_version: Some("v1".into()),
            ..Self::new("Pod", name, namespace)
        }
    }

    /// Reference a live object, keeping its apiVersion and uid so the event
    /// shows up under `kubectl describe`.
    pub fn from_resource<R: Resource<DynamicType = ()>>(obj: &R) -> Self {
        Self::from_object_reference(&obj.object_ref(&()))
    }

    pub fn from_object_reference(oref: &ObjectReference) -> Self {
        Self {
            kind: oref.kind.clone().unwrap_or_default(),
            name: oref.name.clone().unwrap_or_default(),
            namespace: oref.namespace.clone().unwrap_or_default(),
            api_version: oref.api_version.clone(),
            uid: oref.uid.clone(),
        }
    }

    pub fn object_reference(&self) -> ObjectReference {
        ObjectReference {
            api_version: self.api_version.clone(),
            kind: Some(self.kind.clone()),
            name: Some(self.name.clone()),
            namespace: (!self.namespace.is_empty()).then(|| self.namespace.clone()),
            uid: self.uid.clone(),
            ..ObjectReference::default()
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Kind and name are the only fields the event API cannot do without.
    pub fn validate(&self) -> Result<(), ReportFailure> {
        if self.kind.trim().is_empty() {
            return Err(ReportFailure::rejected("subject kind must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(ReportFailure::rejected(format!(
                "name of `{}` subject must not be empty",
                self.kind
            )));
        }
        Ok(())
    }
}

/// One observed state transition, as handed over by the caller.
///
/// Reason and message are forwarded verbatim.
#[derive(Clone, Debug)]
pub struct EventReport {
    pub subject: Subject,
    pub reason: String,
    pub message: String,
    pub action: String,
    pub type_: EventType,
}

impl EventReport {
    pub fn new(subject: Subject, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject,
            reason: reason.into(),
            message: message.into(),
            action: DEFAULT_ACTION.into(),
            type_: EventType::Normal,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_type(mut self, type_: EventType) -> Self {
        self.type_ = type_;
        self
    }

    pub fn warning(self) -> Self {
        self.with_type(EventType::Warning)
    }
}

/// Who is emitting: `reportingComponent` and `reportingInstance` of every event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportingIdentity {
    pub component: String,
    pub instance: String,
}

impl ReportingIdentity {
    pub fn new(component: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            instance: instance.into(),
        }
    }

    /// Resolve the instance from the host environment. Meant to be called once
    /// at process startup; never fails.
    pub fn from_env(component: impl Into<String>) -> Self {
        Self::new(component, helper::get_reporting_instance())
    }
}

pub fn event_type_name(type_: EventType) -> &'static str {
    match type_ {
        EventType::Normal => "Normal",
        EventType::Warning => "Warning",
    }
}

/// Parse the wire form of an event type. Only `Normal` and `Warning` are accepted.
pub fn parse_event_type(value: &str) -> Result<EventType> {
    match value {
        "Normal" => Ok(EventType::Normal),
        "Warning" => Ok(EventType::Warning),
        other => Err(Error::InvalidEventType(other.to_string())),
    }
}
