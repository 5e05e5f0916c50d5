/// The core application state that holds configuration, the API client, and
/// the current auth session.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: ladle_bridge::config::Config,
    /// Shared client for the hosted auth and data APIs (pooled HTTP).
    pub client: ladle_client::BackendClient,
    /// The authoritative session, when someone is signed in.
    pub session: Option<ladle_client::AuthSession>,
    /// Bumped on every sign-in and sign-out so a stale background refresh
    /// can detect that the session it was armed for no longer exists.
    pub session_epoch: u64,
}

impl State {
    /// The access token operations should present, if a session exists.
    pub fn access_token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.access_token.as_str())
    }

    /// The signed-in user's id, if a session exists.
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.user.id.as_str())
    }
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
