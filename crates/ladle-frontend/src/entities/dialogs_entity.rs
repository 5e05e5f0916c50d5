use gpui::{AppContext, Entity};
use ladle_bridge::dialog::{DialogOutcome, DialogSpec, DialogStack, ResolvedDialog};

/// Owns the pending confirmation dialogs. Views push requests here and the
/// dialog layer resolves them by id.
#[derive(Debug, Clone)]
pub struct DialogsEntity {
    pub stack: DialogStack,
}

impl DialogsEntity {
    pub fn new(_: &mut gpui::Context<Self>) -> Self {
        Self {
            stack: DialogStack::new(),
        }
    }

    pub fn open<C: AppContext>(entity: &Entity<Self>, spec: DialogSpec, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.stack.push(spec);
            cx.notify();
        });
    }

    pub fn resolve(
        &mut self,
        id: u64,
        outcome: DialogOutcome,
        cx: &mut gpui::Context<Self>,
    ) -> Option<ResolvedDialog> {
        let resolved = self.stack.resolve(id, outcome);
        if resolved.is_some() {
            cx.notify();
        }
        resolved
    }

    pub fn backdrop(&mut self, id: u64, cx: &mut gpui::Context<Self>) -> Option<ResolvedDialog> {
        let resolved = self.stack.backdrop(id);
        if resolved.is_some() {
            cx.notify();
        }
        resolved
    }
}
