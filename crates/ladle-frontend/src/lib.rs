use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::Root;
use ladle_bridge::MessageFromBackend;
use ladle_bridge::notification::ToastMessage;
use tokio::sync::mpsc;

use crate::entities::{
    dialogs_entity::DialogsEntity,
    recipes_entity::{RecipeStoreEvent, RecipesEntity},
    session_entity::SessionEntity,
    signup_entity::SignupEntity,
    toasts_entity::ToastsEntity,
};

pub mod components;
pub mod entities;
mod views;

/// Frontend-side handle for sending commands over the bridge. Stored as a
/// global so any view can reach the backend.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<ladle_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_session(&self) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::SessionRequest)
            .await
            .expect("failed to request the session");
    }

    pub async fn sign_in(&self, email: String, password: String) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::SignInRequest { email, password })
            .await
            .expect("failed to request sign-in");
    }

    pub async fn sign_up(&self, request: ladle_bridge::signup::SignUpRequest) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::SignUpRequest(request))
            .await
            .expect("failed to request sign-up");
    }

    pub async fn sign_out(&self) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::SignOutRequest)
            .await
            .expect("failed to request sign-out");
    }

    pub async fn request_recipes(&self, filter: ladle_bridge::recipe::RecipeFilter) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::RecipeListRequest(filter))
            .await
            .expect("failed to request the recipe list");
    }

    pub async fn fetch_recipe(&self, id: String) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::RecipeFetchRequest(id))
            .await
            .expect("failed to request a recipe");
    }

    pub async fn create_recipe(&self, payload: ladle_bridge::recipe::RecipePayload) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::RecipeCreateRequest(payload))
            .await
            .expect("failed to request recipe creation");
    }

    pub async fn update_recipe(&self, id: String, payload: ladle_bridge::recipe::RecipePayload) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::RecipeUpdateRequest { id, payload })
            .await
            .expect("failed to request recipe update");
    }

    pub async fn delete_recipe(&self, id: String) {
        self.to_backend
            .send(ladle_bridge::MessageToBackend::RecipeDeleteRequest(id))
            .await
            .expect("failed to request recipe deletion");
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<ladle_bridge::MessageFromBackend>,
    tx: mpsc::Sender<ladle_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let session = cx.new(SessionEntity::new);
        let toasts = cx.new(ToastsEntity::new);
        let dialogs = cx.new(DialogsEntity::new);
        let recipes = cx.new(RecipesEntity::new);
        let signup = cx.new(SignupEntity::new);

        let data = entities::DataEntities {
            session,
            toasts,
            dialogs,
            recipes,
            signup,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        log::debug!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::AuthStateChanged(event) => {
                                SessionEntity::apply(&listener_data.session, event, cx);
                            }
                            MessageFromBackend::NotificationMessage(toast) => {
                                ToastsEntity::push(&listener_data.toasts, toast, cx);
                            }
                            MessageFromBackend::SignUpResponse(outcome) => {
                                if let ladle_bridge::signup::SignUpOutcome::Failed(reason) =
                                    &outcome
                                {
                                    ToastsEntity::push(
                                        &listener_data.toasts,
                                        ToastMessage::error("Sign up failed").body(reason.clone()),
                                        cx,
                                    );
                                }
                                let _ = listener_data.signup.update(cx, |model, cx| {
                                    model.submitting = false;
                                    model.outcome = Some(outcome);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::RecipeListResponse(result) => {
                                let _ = listener_data.recipes.update(cx, |model, cx| {
                                    model.list_loading = false;
                                    match result {
                                        Ok(summaries) => {
                                            model.summaries = summaries;
                                            model.list_error = None;
                                        }
                                        Err(reason) => model.list_error = Some(reason),
                                    }
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::RecipeResponse(result) => {
                                let _ = listener_data.recipes.update(cx, |model, cx| {
                                    model.detail_loading = false;
                                    match result {
                                        Ok(recipe) => {
                                            model.detail = Some(recipe);
                                            model.detail_error = None;
                                        }
                                        Err(reason) => {
                                            model.detail = None;
                                            model.detail_error = Some(reason);
                                        }
                                    }
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::RecipeSaved { id } => {
                                let _ = listener_data.recipes.update(cx, |model, cx| {
                                    model.saving = false;
                                    cx.emit(RecipeStoreEvent::Saved { id });
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::RecipeSaveFailed(reason) => {
                                ToastsEntity::push(
                                    &listener_data.toasts,
                                    ToastMessage::error("Failed to save recipe")
                                        .body(reason.clone()),
                                    cx,
                                );
                                let _ = listener_data.recipes.update(cx, |model, cx| {
                                    model.saving = false;
                                    cx.emit(RecipeStoreEvent::SaveFailed(reason));
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::RecipeDeleted { id } => {
                                let _ = listener_data.recipes.update(cx, |model, cx| {
                                    model.summaries.retain(|summary| summary.id != id);
                                    if model
                                        .detail
                                        .as_ref()
                                        .is_some_and(|recipe| recipe.id == id)
                                    {
                                        model.detail = None;
                                    }
                                    cx.emit(RecipeStoreEvent::Deleted { id });
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::AuthRequired => {
                                let _ = listener_data.session.update(cx, |_, cx| {
                                    cx.emit(entities::AuthRequiredEvent);
                                });
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_session().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
