//! Shared application state handed to every handler and to the ticker.

use std::sync::Arc;

use pulseboard_core::RuntimeState;

use crate::config::Settings;
use crate::obs::DashboardMetrics;

#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    runtime: Arc<RuntimeState>,
    metrics: Arc<DashboardMetrics>,
}

impl AppState {
    /// Capture start time and freeze the environment mapping from `settings`.
    pub fn new(settings: Settings) -> Self {
        let runtime = Arc::new(RuntimeState::new(settings.vars.clone()));
        Self {
            settings: Arc::new(settings),
            runtime,
            metrics: Arc::new(DashboardMetrics::default()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runtime(&self) -> Arc<RuntimeState> {
        Arc::clone(&self.runtime)
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }
}
