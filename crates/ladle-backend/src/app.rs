//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use ladle_bridge::{MessageFromBackend, MessageToBackend, notification::ToastMessage};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::SessionRequest => {
                services::auth_service::handle_session_request(self.clone()).await;
            }
            MessageToBackend::SignInRequest { email, password } => {
                services::auth_service::handle_sign_in(self.clone(), email, password).await;
            }
            MessageToBackend::SignUpRequest(request) => {
                services::auth_service::handle_sign_up(self.clone(), request).await;
            }
            MessageToBackend::SignOutRequest => {
                services::auth_service::handle_sign_out(self.clone()).await;
            }
            MessageToBackend::RecipeListRequest(filter) => {
                services::recipe_service::handle_list_request(self.clone(), filter).await;
            }
            MessageToBackend::RecipeFetchRequest(id) => {
                services::recipe_service::handle_fetch_request(self.clone(), id).await;
            }
            MessageToBackend::RecipeCreateRequest(payload) => {
                services::recipe_service::handle_create_request(self.clone(), payload).await;
            }
            MessageToBackend::RecipeUpdateRequest { id, payload } => {
                services::recipe_service::handle_update_request(self.clone(), id, payload).await;
            }
            MessageToBackend::RecipeDeleteRequest(id) => {
                services::recipe_service::handle_delete_request(self.clone(), id).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send a toast notification to the frontend bridge.
    pub async fn send_toast(&self, toast: ToastMessage) {
        self.send(MessageFromBackend::NotificationMessage(toast)).await;
    }
}
