//! Session issuance and lifecycle against the auth API.

use serde::{Deserialize, Serialize};

use crate::error::{AuthApiError, ClientError};
use crate::BackendClient;

/// The user object embedded in auth responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserRecord {
    pub id: String,
    pub email: Option<String>,
}

/// A full token-bearing session.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: u64,
    pub user: AuthUserRecord,
}

/// What the sign-up endpoint returns. When email confirmation is required
/// the body is just the user record; otherwise it is a full session with the
/// user nested inside.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUserRecord>,
}

impl SignUpData {
    /// The created user's id, wherever the response put it.
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.id.as_str())
            .or(self.id.as_deref())
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

impl BackendClient {
    /// Exchanges email/password credentials for a session.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ClientError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;
        let response = Self::check_auth(response).await?;
        Ok(response.json().await?)
    }

    /// Exchanges a refresh token for a fresh session. Failing with an
    /// invalid-refresh-token condition means the session no longer exists.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, ClientError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.api_key)
            .json(&RefreshGrant { refresh_token })
            .send()
            .await?;
        let response = Self::check_auth(response).await?;
        Ok(response.json().await?)
    }

    /// Registers a new user.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpData, ClientError> {
        let response = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;
        let response = Self::check_auth(response).await?;
        Ok(response.json().await?)
    }

    /// Revokes the session behind the given access token. Local state must
    /// only be cleared after this resolves successfully.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::check_auth(response).await?;
        Ok(())
    }

    pub(crate) async fn check_auth(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("Auth API request failed with {status}: {body}");
        let error: AuthApiError = serde_json::from_str(&body).unwrap_or(AuthApiError {
            msg: (!body.is_empty()).then_some(body),
            ..AuthApiError::default()
        });
        Err(ClientError::Auth(error))
    }
}
