//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the graphical
//! frontend with an asynchronous backend responsible for talking to the
//! hosted auth and data APIs.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., sign in, list recipes, save a
//!   recipe).
//! - The backend pushes events (e.g., auth-state changes, query results,
//!   notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.
//!
//! The crate also hosts the pure state machines the frontend builds on: the
//! session reducer ([`session`]), the toast queue ([`notification`]), the
//! dialog stack ([`dialog`]), and recipe draft validation ([`recipe`]).

pub mod config;
pub mod dialog;
pub mod notification;
pub mod profile;
pub mod recipe;
pub mod session;
pub mod signup;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous events (e.g., a token refresh that happened in the
/// background).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// A discrete change to the authoritative auth session. Events must be
    /// applied in arrival order.
    AuthStateChanged(session::AuthEvent),
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::ToastMessage),
    /// Outcome of a sign-up attempt.
    SignUpResponse(signup::SignUpOutcome),
    /// Result of a recipe list query for the dashboard.
    RecipeListResponse(Result<Vec<recipe::RecipeSummary>, String>),
    /// Result of fetching a single recipe (detail and edit views).
    RecipeResponse(Result<recipe::Recipe, String>),
    /// A create or update finished; the frontend navigates to the detail view.
    RecipeSaved { id: String },
    /// A create or update failed; the form stays populated for retry.
    RecipeSaveFailed(String),
    /// A recipe was deleted.
    RecipeDeleted { id: String },
    /// The requested operation needs an authenticated session.
    AuthRequired,
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Resolve the current session on startup.
    SessionRequest,
    SignInRequest { email: String, password: String },
    SignUpRequest(signup::SignUpRequest),
    SignOutRequest,
    /// Request the dashboard recipe list with the given filters applied.
    RecipeListRequest(recipe::RecipeFilter),
    RecipeFetchRequest(String),
    RecipeCreateRequest(recipe::RecipePayload),
    RecipeUpdateRequest { id: String, payload: recipe::RecipePayload },
    RecipeDeleteRequest(String),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
