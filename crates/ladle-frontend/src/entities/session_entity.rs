use gpui::{AppContext, Entity};
use ladle_bridge::session::{AuthEvent, Session};

/// Owns the frontend's view of the auth session. Everything else reads it.
#[derive(Debug, Clone)]
pub struct SessionEntity {
    pub session: Session,
}

impl SessionEntity {
    pub fn new(_: &mut gpui::Context<Self>) -> Self {
        Self {
            session: Session::loading(),
        }
    }

    /// Folds one backend auth event into the shared session state.
    pub fn apply<C: AppContext>(entity: &Entity<Self>, event: AuthEvent, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.session.apply(event);
            cx.notify();
        });
    }
}

impl gpui::EventEmitter<super::AuthRequiredEvent> for SessionEntity {}
