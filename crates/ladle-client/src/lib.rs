//! Typed HTTP client for the hosted backend-as-a-service.
//!
//! The hosted backend exposes two API surfaces this crate wraps:
//! - an auth API issuing and refreshing session tokens
//!   (`/auth/v1/...`), and
//! - a REST data API over the Postgres tables (`/rest/v1/...`), with
//!   row-level security enforced server-side from the bearer token.
//!
//! The client itself holds no session; callers pass the current access token
//! into each operation, and the anonymous key is used when none is given.

mod admin;
mod auth;
mod error;
mod query;
mod rest;

pub use crate::admin::jwt_role;
pub use crate::auth::{AuthSession, AuthUserRecord, SignUpData};
pub use crate::error::{ApiError, AuthApiError, ClientError};
pub use crate::query::Query;

/// Shared, pooled client for one hosted backend project.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Creates a client presenting the public (anonymous) key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: anon_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client presenting a privileged service-role key. Row-level
    /// security does not apply to it, so this must only ever run in trusted
    /// tooling such as the seeder.
    pub fn with_service_role(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self::new(base_url, service_key)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// The token an operation should present: the caller's access token when
    /// a session exists, the project key otherwise.
    fn bearer<'a>(&'a self, access_token: Option<&'a str>) -> &'a str {
        access_token.unwrap_or(&self.api_key)
    }
}
