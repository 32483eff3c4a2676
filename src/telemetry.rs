use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::{Error, Result};

/// Set to `json` for one JSON object per log line
pub static LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Initialize tracing
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or(EnvFilter::try_new("info"))
        .map_err(|e| Error::OtherError(e.to_string()))?;
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    // Decide on layers
    let reg = Registry::default().with(env_filter);
    let res = if json {
        reg.with(fmt::layer().json()).try_init()
    } else {
        reg.with(fmt::layer().compact()).try_init()
    };
    res.map_err(|e| Error::OtherError(e.to_string()))
}
