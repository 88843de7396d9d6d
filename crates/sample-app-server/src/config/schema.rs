use std::net::SocketAddr;

use serde::Deserialize;
use sample_app_core::error::{Result, SampleAppError};

/// Upper limit for the simulated work delay.
const MAX_DELAY_LIMIT_MS: u64 = 60_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleAppConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub work: WorkSection,
}

impl Default for SampleAppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            work: WorkSection::default(),
        }
    }
}

impl SampleAppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SampleAppError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.listen_addr()?;
        self.work.validate()?;

        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server.listen_addr()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SampleAppError::BadConfig(format!("server.listen `{}` is not a socket address: {e}", self.listen))
        })
    }
}

/// Bounds of the uniformly drawn delay on `GET /`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkSection {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for WorkSection {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl WorkSection {
    pub fn validate(&self) -> Result<()> {
        if self.min_delay_ms == 0 {
            return Err(SampleAppError::BadConfig(
                "work.min_delay_ms must be at least 1".into(),
            ));
        }
        if self.max_delay_ms > MAX_DELAY_LIMIT_MS {
            return Err(SampleAppError::BadConfig(format!(
                "work.max_delay_ms must not exceed {MAX_DELAY_LIMIT_MS}"
            )));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(SampleAppError::BadConfig(
                "work.min_delay_ms must not be greater than work.max_delay_ms".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_min_delay_ms() -> u64 {
    5
}
fn default_max_delay_ms() -> u64 {
    200
}
