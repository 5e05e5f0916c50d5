//! Error shapes for both API surfaces.

use serde::Deserialize;

/// The error body the data API returns. Fields are surfaced to the user
/// verbatim, falling back through message → details → hint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
    pub code: Option<String>,
}

impl ApiError {
    /// One human-readable line, preferring the most specific field present.
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .or_else(|| self.hint.clone())
            .unwrap_or_else(|| "Unknown database error".to_owned())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_message())
    }
}

/// The error body the auth API returns. The service has grown a few formats
/// over time, so every known field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthApiError {
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub error_code: Option<String>,
    pub msg: Option<String>,
}

impl AuthApiError {
    pub fn message(&self) -> String {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Authentication failed".to_owned())
    }

    /// A missing or expired refresh token is a recoverable condition: the
    /// session simply no longer exists. Callers treat it as "became
    /// unauthenticated" rather than a failure to retry.
    pub fn is_invalid_refresh_token(&self) -> bool {
        if self
            .error_code
            .as_deref()
            .is_some_and(|code| code == "refresh_token_not_found")
        {
            return true;
        }
        let message = self.message();
        message.contains("Refresh Token Not Found") || message.contains("Invalid Refresh Token")
    }
}

impl std::fmt::Display for AuthApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Errors that can occur while talking to the hosted backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, body decoding).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The data API rejected the request.
    #[error("{0}")]
    Api(ApiError),
    /// The auth API rejected the request.
    #[error("{0}")]
    Auth(AuthApiError),
    /// A single-row lookup matched nothing.
    #[error("record not found")]
    NotFound,
}

impl ClientError {
    pub fn is_invalid_refresh_token(&self) -> bool {
        match self {
            ClientError::Auth(error) => error.is_invalid_refresh_token(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_falls_back_through_message_details_hint() {
        let full: ApiError = serde_json::from_str(
            r#"{"message":"duplicate key","details":"Key (id) exists","hint":null,"code":"23505"}"#,
        )
        .unwrap();
        assert_eq!(full.display_message(), "duplicate key");

        let hint_only = ApiError {
            hint: Some("check the id".to_owned()),
            ..ApiError::default()
        };
        assert_eq!(hint_only.display_message(), "check the id");

        assert_eq!(ApiError::default().display_message(), "Unknown database error");
    }

    #[test]
    fn refresh_token_conditions_are_recognized() {
        let by_code = AuthApiError {
            error_code: Some("refresh_token_not_found".to_owned()),
            ..AuthApiError::default()
        };
        assert!(by_code.is_invalid_refresh_token());

        let by_message = AuthApiError {
            msg: Some("Invalid Refresh Token: Already Used".to_owned()),
            ..AuthApiError::default()
        };
        assert!(by_message.is_invalid_refresh_token());

        let unrelated = AuthApiError {
            msg: Some("Invalid login credentials".to_owned()),
            ..AuthApiError::default()
        };
        assert!(!unrelated.is_invalid_refresh_token());
    }
}
