use crate::HealthRes;
use chrono::{SecondsFormat, Utc};
use std::time::Instant;

/// Liveness probe shared by the REST API and the CLI.
///
/// Records when it was created so it can report process uptime. Create one at startup and clone
/// it into request handlers.
#[derive(Clone, Debug)]
pub struct HealthService {
    started: Instant,
}

impl HealthService {
    /// Creates a new instance of HealthService, starting the uptime clock now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Reports the service as healthy, with the current time and uptime in seconds.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: self.started.elapsed().as_secs_f64(),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
