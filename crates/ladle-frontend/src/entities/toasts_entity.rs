use gpui::{AppContext, Entity};
use ladle_bridge::notification::{DEFAULT_TOAST_DURATION, ToastMessage, ToastQueue};

/// Owns the live toast queue. Timers are armed here so a toast dismisses
/// itself no matter which view happens to be on screen.
#[derive(Debug, Clone)]
pub struct ToastsEntity {
    pub queue: ToastQueue,
}

impl ToastsEntity {
    pub fn new(_: &mut gpui::Context<Self>) -> Self {
        Self {
            queue: ToastQueue::new(),
        }
    }

    /// Enqueues a toast and arms its auto-dismiss timer unless it is
    /// persistent. A manual dismiss racing the timer is harmless because
    /// queue dismissal is idempotent.
    pub fn push<C: AppContext>(entity: &Entity<Self>, message: ToastMessage, cx: &mut C) {
        entity.update(cx, |this, cx| {
            let persistent = message.options.persistent;
            let duration = message.options.duration.unwrap_or(DEFAULT_TOAST_DURATION);
            let id = this.queue.enqueue(message);

            if !persistent {
                cx.spawn(async move |this, cx| {
                    cx.background_executor().timer(duration).await;
                    let _ = this.update(cx, |this, cx| {
                        this.queue.dismiss(id);
                        cx.notify();
                    });
                })
                .detach();
            }
            cx.notify();
        });
    }

    pub fn dismiss(&mut self, id: u64, cx: &mut gpui::Context<Self>) {
        if self.queue.dismiss(id) {
            cx.notify();
        }
    }
}
