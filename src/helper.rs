/// Reported when no host identity can be resolved
pub static UNKNOWN_INSTANCE: &str = "unknown";

/// Checked in order; `HOSTNAME` is the pod name inside a Kubernetes pod
pub static INSTANCE_ENV_VARS: [&str; 2] = ["REPORTING_INSTANCE", "HOSTNAME"];

pub fn get_reporting_instance() -> String {
    resolve_instance(|key| std::env::var(key).ok(), get_host_name)
}

pub fn get_host_name() -> Option<String> {
    hostname::get().ok().and_then(|h| h.into_string().ok())
}

/// First non-blank value among the env vars, then the host name, then
/// [`UNKNOWN_INSTANCE`].
pub fn resolve_instance(
    env: impl Fn(&str) -> Option<String>,
    host: impl FnOnce() -> Option<String>,
) -> String {
    INSTANCE_ENV_VARS
        .iter()
        .filter_map(|key| env(*key))
        .chain(std::iter::once_with(host).flatten())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN_INSTANCE.to_string())
}
