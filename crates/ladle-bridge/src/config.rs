use serde::{Deserialize, Serialize};

/// Where the hosted backend lives and which public key to present.
///
/// Only the read-only client key belongs here; the privileged service-role
/// key used by the seeder is taken from the environment and never touches
/// this file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendEndpointConfig {
    /// Base URL of the hosted backend project.
    pub url: String,
    /// Public (anonymous) API key. Safe to ship with the client.
    pub anon_key: String,
}

impl Default for BackendEndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:54321".to_owned(),
            anon_key: String::new(),
        }
    }
}

/// Tuning for the dashboard list view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Maximum number of recipes fetched per list request.
    pub page_size: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { page_size: 12 }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Hosted backend endpoint and public key.
    pub backend: BackendEndpointConfig,
    /// Dashboard list behavior.
    pub dashboard: DashboardConfig,
}
