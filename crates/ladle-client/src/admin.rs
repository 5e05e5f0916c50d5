//! Service-role operations for trusted tooling (the seeder). Nothing in the
//! application runtime calls into this module.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUserRecord;
use crate::error::ClientError;
use crate::BackendClient;

#[derive(Serialize)]
struct AdminCreateUser<'a> {
    email: &'a str,
    password: &'a str,
    email_confirm: bool,
}

/// Extracts the `role` claim from a JWT without verifying it. Used only to
/// catch the easy mistake of seeding with the public key instead of the
/// service-role secret.
pub fn jwt_role(jwt: &str) -> Option<String> {
    let payload = jwt.split('.').nth(1)?;
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;

    #[derive(Deserialize)]
    struct Claims {
        role: Option<String>,
    }

    let claims: Claims = serde_json::from_slice(&decoded).ok()?;
    claims.role
}

#[derive(Deserialize)]
struct UserList {
    users: Vec<AuthUserRecord>,
}

impl BackendClient {
    /// Creates a user with a confirmed email address. Requires a
    /// service-role key.
    pub async fn admin_create_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthUserRecord, ClientError> {
        let response = self
            .http
            .post(self.auth_url("admin/users"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&AdminCreateUser {
                email,
                password,
                email_confirm: true,
            })
            .send()
            .await?;
        let response = Self::check_auth(response).await?;
        Ok(response.json().await?)
    }

    /// Lists existing users so the seeder can reuse an account instead of
    /// failing on a duplicate email. Requires a service-role key.
    pub async fn admin_list_users(&self) -> Result<Vec<AuthUserRecord>, ClientError> {
        let response = self
            .http
            .get(self.auth_url("admin/users"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let response = Self::check_auth(response).await?;
        let list: UserList = response.json().await?;
        Ok(list.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_jwt(payload: &str) -> String {
        let encode = |part: &str| {
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(part.as_bytes())
        };
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(payload),
            encode("signature")
        )
    }

    #[test]
    fn role_claim_is_extracted_from_the_payload() {
        let jwt = fake_jwt(r#"{"iss":"backend","role":"service_role"}"#);
        assert_eq!(jwt_role(&jwt).as_deref(), Some("service_role"));

        let anon = fake_jwt(r#"{"role":"anon"}"#);
        assert_eq!(jwt_role(&anon).as_deref(), Some("anon"));
    }

    #[test]
    fn malformed_tokens_yield_no_role() {
        assert_eq!(jwt_role("not-a-jwt"), None);
        assert_eq!(jwt_role("a.%%%.c"), None);
        assert_eq!(jwt_role(&fake_jwt(r#"{"iss":"backend"}"#)), None);
    }
}
