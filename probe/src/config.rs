use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    pub frontend_url: String,
    pub backend_url: String,
    pub home_timeout: Duration,
    pub route_timeout: Duration,
    pub resource_timeout: Duration,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            backend_url: "http://localhost:8080".to_string(),
            home_timeout: Duration::from_secs(10),
            route_timeout: Duration::from_secs(5),
            resource_timeout: Duration::from_secs(3),
        }
    }
}

impl SmokeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontend_url(mut self, frontend_url: impl Into<String>) -> Self {
        self.frontend_url = frontend_url.into();
        self
    }

    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    pub fn with_home_timeout(mut self, timeout: Duration) -> Self {
        self.home_timeout = timeout;
        self
    }

    pub fn with_route_timeout(mut self, timeout: Duration) -> Self {
        self.route_timeout = timeout;
        self
    }

    pub fn with_resource_timeout(mut self, timeout: Duration) -> Self {
        self.resource_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        for (label, url) in [
            ("Frontend URL", &self.frontend_url),
            ("Backend URL", &self.backend_url),
        ] {
            if url.is_empty() {
                return Err(format!("{} cannot be empty", label));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("{} must start with http:// or https://", label));
            }
        }

        if self.home_timeout.is_zero()
            || self.route_timeout.is_zero()
            || self.resource_timeout.is_zero()
        {
            return Err("Timeouts must be greater than 0".to_string());
        }

        Ok(())
    }
}
