//! Session lifecycle handlers: sign-in, sign-up, sign-out, initial session
//! resolution, and the background token refresh.

use std::time::Duration;

use ladle_bridge::{
    MessageFromBackend,
    notification::ToastMessage,
    session::{AuthEvent, AuthUser},
    signup::{SignUpOutcome, SignUpRequest},
};
use ladle_client::AuthSession;

use super::AppContextHandle;

/// How much earlier than the access token's expiry the refresh fires.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

fn bridge_user(session: &AuthSession) -> AuthUser {
    AuthUser {
        id: session.user.id.clone(),
        email: session.user.email.clone(),
    }
}

/// Resolves the current session for the frontend's startup fetch (see
/// [`ladle_bridge::MessageToBackend::SessionRequest`]). The desktop client
/// keeps no session on disk, so this reports whatever the runtime holds.
pub async fn handle_session_request(context: AppContextHandle) {
    let user = {
        let state = context.state.read().await;
        state.session.as_ref().map(bridge_user)
    };
    context
        .send(MessageFromBackend::AuthStateChanged(
            AuthEvent::SessionResolved(user),
        ))
        .await;
}

/// Handles a password sign-in request. On success the session is stored, a
/// background refresh is armed, and a `SignedIn` event is pushed; on failure
/// the auth API's message reaches the user as an error toast.
pub async fn handle_sign_in(context: AppContextHandle, email: String, password: String) {
    let client = {
        let state = context.state.read().await;
        state.client.clone()
    };

    match client.sign_in_with_password(&email, &password).await {
        Ok(session) => {
            let user = bridge_user(&session);
            let epoch = {
                let mut state = context.state.write().await;
                state.session_epoch += 1;
                state.session = Some(session);
                state.session_epoch
            };
            spawn_refresh_task(context.clone(), epoch);
            context
                .send(MessageFromBackend::AuthStateChanged(AuthEvent::SignedIn(
                    user,
                )))
                .await;
        }
        Err(error) => {
            log::warn!("Sign-in failed for {email}: {error}");
            context
                .send_toast(ToastMessage::error("Sign in failed").body(error.to_string()))
                .await;
        }
    }
}

/// Handles a sign-up request: pre-checks username availability, registers
/// the user, and stores the profile row.
pub async fn handle_sign_up(context: AppContextHandle, request: SignUpRequest) {
    let client = {
        let state = context.state.read().await;
        state.client.clone()
    };

    match super::profile_service::username_taken(&client, &request.username).await {
        Ok(true) => {
            context
                .send(MessageFromBackend::SignUpResponse(SignUpOutcome::UsernameTaken))
                .await;
            return;
        }
        Ok(false) => {}
        Err(error) => {
            context
                .send(MessageFromBackend::SignUpResponse(SignUpOutcome::Failed(
                    error.to_string(),
                )))
                .await;
            return;
        }
    }

    let data = match client.sign_up(&request.email, &request.password).await {
        Ok(data) => data,
        Err(error) => {
            log::warn!("Sign-up failed for {}: {error}", request.email);
            context
                .send(MessageFromBackend::SignUpResponse(SignUpOutcome::Failed(
                    error.to_string(),
                )))
                .await;
            return;
        }
    };

    if let Some(user_id) = data.user_id() {
        if let Err(error) = super::profile_service::upsert_profile(
            &client,
            user_id,
            &request.username,
            &request.fullname,
        )
        .await
        {
            // the account exists either way; the profile row is best-effort
            log::error!("Failed to store profile for {user_id}: {error}");
        }
    }

    context
        .send(MessageFromBackend::SignUpResponse(SignUpOutcome::Success))
        .await;
}

/// Handles a sign-out request. Local state is cleared only after the backend
/// confirms the revocation; a failure keeps the session and surfaces an
/// error toast instead.
pub async fn handle_sign_out(context: AppContextHandle) {
    let (client, access_token) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
        )
    };

    let Some(access_token) = access_token else {
        // nothing to revoke; report the terminal state
        context
            .send(MessageFromBackend::AuthStateChanged(AuthEvent::SignedOut))
            .await;
        return;
    };

    match client.sign_out(&access_token).await {
        Ok(()) => {
            {
                let mut state = context.state.write().await;
                state.session = None;
                state.session_epoch += 1;
            }
            context
                .send(MessageFromBackend::AuthStateChanged(AuthEvent::SignedOut))
                .await;
        }
        Err(error) => {
            log::warn!("Sign-out failed: {error}");
            context
                .send_toast(ToastMessage::error("Sign out failed").body(error.to_string()))
                .await;
        }
    }
}

/// Arms a background task that refreshes the access token shortly before it
/// expires, for as long as the captured session epoch stays current.
fn spawn_refresh_task(context: AppContextHandle, epoch: u64) {
    tokio::spawn(async move {
        loop {
            let (client, refresh_token, expires_in) = {
                let state = context.state.read().await;
                if state.session_epoch != epoch {
                    return;
                }
                let Some(session) = &state.session else {
                    return;
                };
                (
                    state.client.clone(),
                    session.refresh_token.clone(),
                    session.expires_in,
                )
            };

            let delay = Duration::from_secs(expires_in)
                .saturating_sub(REFRESH_MARGIN)
                .max(Duration::from_secs(30));
            tokio::time::sleep(delay).await;

            match client.refresh_session(&refresh_token).await {
                Ok(session) => {
                    let user = bridge_user(&session);
                    {
                        let mut state = context.state.write().await;
                        if state.session_epoch != epoch {
                            // a newer sign-in or sign-out won the race
                            return;
                        }
                        state.session = Some(session);
                    }
                    log::info!("Access token refreshed");
                    context
                        .send(MessageFromBackend::AuthStateChanged(
                            AuthEvent::TokenRefreshed(user),
                        ))
                        .await;
                }
                Err(error) if error.is_invalid_refresh_token() => {
                    // the session is simply gone; become unauthenticated and
                    // let the next user action lead back to the login screen
                    log::warn!("Refresh token expired or invalid, clearing session");
                    {
                        let mut state = context.state.write().await;
                        if state.session_epoch != epoch {
                            return;
                        }
                        state.session = None;
                        state.session_epoch += 1;
                    }
                    context
                        .send(MessageFromBackend::AuthStateChanged(AuthEvent::SignedOut))
                        .await;
                    return;
                }
                Err(error) => {
                    // transient failure; the token is still valid until its
                    // expiry, so surface nothing and stop refreshing
                    log::error!("Token refresh failed: {error}");
                    return;
                }
            }
        }
    });
}
