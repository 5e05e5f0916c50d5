use gpui::Entity;

pub mod dialogs_entity;
pub mod recipes_entity;
pub mod session_entity;
pub mod signup_entity;
pub mod toasts_entity;

/// Fired through the session entity when the backend refuses an operation
/// for lack of a signed-in user.
#[derive(Debug, Clone, Copy)]
pub struct AuthRequiredEvent;

/// The shared stores every view reads from.
#[derive(Clone)]
pub struct DataEntities {
    pub session: Entity<session_entity::SessionEntity>,
    pub toasts: Entity<toasts_entity::ToastsEntity>,
    pub dialogs: Entity<dialogs_entity::DialogsEntity>,
    pub recipes: Entity<recipes_entity::RecipesEntity>,
    pub signup: Entity<signup_entity::SignupEntity>,
}
