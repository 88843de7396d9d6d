//! Config loader (strict parsing).
//!
//! The config file is optional: without one the server runs on built-in
//! defaults (`0.0.0.0:8000`, 5-200 ms simulated work).

pub mod schema;

use std::fs;
use std::path::Path;

use sample_app_core::error::{Result, SampleAppError};

pub use schema::{SampleAppConfig, ServerSection, WorkSection};

/// Environment variable naming an explicit config path.
pub const CONFIG_ENV: &str = "SAMPLE_APP_CONFIG";
/// Looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "sample-app.yaml";

/// Resolve the config: `$SAMPLE_APP_CONFIG`, then `./sample-app.yaml`, then defaults.
pub fn load() -> Result<SampleAppConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        tracing::info!(%path, "loading config from {CONFIG_ENV}");
        return load_from_file(&path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        tracing::info!(path = DEFAULT_CONFIG_PATH, "loading config");
        return load_from_file(DEFAULT_CONFIG_PATH);
    }
    tracing::info!("no config file, using defaults");
    Ok(SampleAppConfig::default())
}

pub fn load_from_file(path: &str) -> Result<SampleAppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SampleAppError::Io(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SampleAppConfig> {
    let cfg: SampleAppConfig = serde_yaml::from_str(s)
        .map_err(|e| SampleAppError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
