use std::future::Future;

use k8s_openapi::api::core::v1::Event;
use kube::{
    Client,
    api::{Api, PostParams},
};

/// Namespace holding events about cluster-scoped objects such as Nodes
pub static DEFAULT_EVENT_NAMESPACE: &str = "default";

pub fn event_namespace(subject_namespace: &str) -> &str {
    if subject_namespace.is_empty() {
        DEFAULT_EVENT_NAMESPACE
    } else {
        subject_namespace
    }
}

/// The cluster's event store.
///
/// One call is one create request. Authentication, timeouts and connection
/// reuse belong to whoever built the handle.
pub trait EventSink: Send + Sync {
    fn create_event(
        &self,
        namespace: &str,
        event: &Event,
    ) -> impl Future<Output = kube::Result<Event>> + Send;
}

impl EventSink for Client {
    async fn create_event(&self, namespace: &str, event: &Event) -> kube::Result<Event> {
        let api: Api<Event> = Api::namespaced(self.clone(), namespace);
        api.create(&PostParams::default(), event).await
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn create_event(
        &self,
        namespace: &str,
        event: &Event,
    ) -> impl Future<Output = kube::Result<Event>> + Send {
        (**self).create_event(namespace, event)
    }
}
