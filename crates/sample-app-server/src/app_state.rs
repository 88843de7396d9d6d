//! Shared application state for the sample app server.

use std::sync::Arc;

use sample_app_core::error::Result;

use crate::config::SampleAppConfig;
use crate::obs::AppMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: SampleAppConfig,
    metrics: AppMetrics,
}

impl AppState {
    /// Build application state with a fresh metrics registry.
    pub fn new(cfg: SampleAppConfig) -> Result<Self> {
        cfg.validate()?;
        let metrics = AppMetrics::new()?;

        tracing::debug!(
            min_delay_ms = cfg.work.min_delay_ms,
            max_delay_ms = cfg.work.max_delay_ms,
            "app state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, metrics }),
        })
    }

    pub fn cfg(&self) -> &SampleAppConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.inner.metrics
    }
}
