//! Client-side view of the authoritative auth session.
//!
//! The backend owns the tokens; the frontend only ever sees [`AuthEvent`]s
//! and folds them into a [`Session`] value with [`Session::apply`]. Events
//! are applied strictly in arrival order and none are dropped, so the final
//! state always reflects the last event the backend emitted.

/// The identity carried by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Backend-issued user id (uuid).
    pub id: String,
    pub email: Option<String>,
}

/// A discrete auth-state change pushed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The initial session fetch finished. `None` means nobody is signed in,
    /// including the case where the stored refresh token turned out to be
    /// invalid or missing.
    SessionResolved(Option<AuthUser>),
    SignedIn(AuthUser),
    SignedOut,
    TokenRefreshed(AuthUser),
}

impl AuthEvent {
    /// Whether a user is present after this event is applied.
    pub fn has_user(&self) -> bool {
        match self {
            AuthEvent::SessionResolved(user) => user.is_some(),
            AuthEvent::SignedIn(_) | AuthEvent::TokenRefreshed(_) => true,
            AuthEvent::SignedOut => false,
        }
    }
}

/// Current authenticated-user identity plus the initial loading flag.
///
/// Owned exclusively by the frontend session entity; everything else reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<AuthUser>,
    /// True until the first [`AuthEvent::SessionResolved`] (or any later
    /// event) lands, so views can render a spinner instead of flashing the
    /// logged-out state.
    pub is_loading: bool,
}

impl Session {
    /// The state the app mounts with: nobody known yet, still resolving.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }

    /// Folds one event into the session. Every event resolves the loading
    /// flag; a failed initial fetch therefore lands on "not authenticated"
    /// rather than leaving stale state behind.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SessionResolved(user) => self.user = user,
            AuthEvent::SignedIn(user) | AuthEvent::TokenRefreshed(user) => {
                self.user = Some(user);
            }
            AuthEvent::SignedOut => self.user = None,
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> AuthUser {
        AuthUser {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
        }
    }

    #[test]
    fn initial_resolution_clears_loading_even_without_a_user() {
        let mut session = Session::loading();
        assert!(session.is_loading);

        session.apply(AuthEvent::SessionResolved(None));
        assert!(!session.is_loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn final_state_matches_the_last_event_applied() {
        let sequences: Vec<Vec<AuthEvent>> = vec![
            vec![
                AuthEvent::SessionResolved(Some(user("a"))),
                AuthEvent::TokenRefreshed(user("a")),
                AuthEvent::SignedOut,
            ],
            vec![
                AuthEvent::SessionResolved(None),
                AuthEvent::SignedIn(user("b")),
            ],
            vec![
                AuthEvent::SignedIn(user("a")),
                AuthEvent::SignedOut,
                AuthEvent::SignedIn(user("c")),
                AuthEvent::TokenRefreshed(user("c")),
            ],
        ];

        for events in sequences {
            let last_has_user = events.last().unwrap().has_user();
            let mut session = Session::loading();
            for event in events {
                session.apply(event);
            }
            assert_eq!(session.is_authenticated(), last_has_user);
            assert!(!session.is_loading);
        }
    }

    #[test]
    fn sign_in_overwrites_previous_identity() {
        let mut session = Session::loading();
        session.apply(AuthEvent::SignedIn(user("a")));
        session.apply(AuthEvent::SignedIn(user("b")));
        assert_eq!(session.user_id(), Some("b"));
        assert_eq!(session.email(), Some("b@example.com"));
    }

    #[test]
    fn only_an_explicit_signed_out_event_clears_the_session() {
        // The backend emits SignedOut only after the sign-out call succeeds;
        // no other event may drop the identity.
        let mut session = Session::loading();
        session.apply(AuthEvent::SignedIn(user("a")));
        session.apply(AuthEvent::TokenRefreshed(user("a")));
        assert!(session.is_authenticated());

        session.apply(AuthEvent::SignedOut);
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }
}
