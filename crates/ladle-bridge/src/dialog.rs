//! Modal confirmation requests, decoupled from the component that asks.
//!
//! A caller pushes a [`DialogSpec`] onto the [`DialogStack`] and later some
//! UI layer resolves it by id. Resolution hands back the request together
//! with its outcome as a value ([`ResolvedDialog`]) instead of firing a
//! stored callback, so the effect runs exactly once and tests can assert on
//! the emitted request directly.

/// What kind of affordance the dialog presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Two buttons; cancel is a real choice.
    Confirm,
    /// A single acknowledge button.
    Alert,
}

/// Visual emphasis of the confirm action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Danger,
    Warning,
    Info,
}

/// How the user (or the program) resolved a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// The effect the opener wants performed when the dialog is confirmed.
///
/// Kept as data so the resolution site owns the side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Nothing to do beyond closing (alerts).
    None,
    /// Delete the recipe with this id.
    DeleteRecipe(String),
}

/// A dialog waiting on the stack for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    /// Unique within the stack's lifetime.
    pub id: u64,
    pub kind: DialogKind,
    pub variant: DialogVariant,
    pub title: String,
    pub body: Option<String>,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Persistent dialogs ignore backdrop clicks; only the explicit buttons
    /// resolve them.
    pub persistent: bool,
    pub action: DialogAction,
}

/// Everything about a dialog except its id, which the stack assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub kind: DialogKind,
    pub variant: DialogVariant,
    pub title: String,
    pub body: Option<String>,
    pub confirm_label: String,
    pub cancel_label: String,
    pub persistent: bool,
    pub action: DialogAction,
}

impl DialogSpec {
    fn new(kind: DialogKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            variant: DialogVariant::default(),
            title: title.into(),
            body: None,
            confirm_label: "Confirm".to_owned(),
            cancel_label: "Cancel".to_owned(),
            persistent: false,
            action: DialogAction::None,
        }
    }

    pub fn confirm(title: impl Into<String>) -> Self {
        Self::new(DialogKind::Confirm, title)
    }

    pub fn alert(title: impl Into<String>) -> Self {
        let mut spec = Self::new(DialogKind::Alert, title);
        spec.confirm_label = "OK".to_owned();
        spec
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    pub fn action(mut self, action: DialogAction) -> Self {
        self.action = action;
        self
    }
}

/// A request that has been answered and removed from the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDialog {
    pub request: DialogRequest,
    pub outcome: DialogOutcome,
}

/// Insertion-ordered stack of pending dialogs. Usually one deep, but
/// concurrent requests must coexist without crashing.
#[derive(Debug, Clone, Default)]
pub struct DialogStack {
    next_id: u64,
    dialogs: Vec<DialogRequest>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a request and returns its id.
    pub fn push(&mut self, spec: DialogSpec) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.dialogs.push(DialogRequest {
            id,
            kind: spec.kind,
            variant: spec.variant,
            title: spec.title,
            body: spec.body,
            confirm_label: spec.confirm_label,
            cancel_label: spec.cancel_label,
            persistent: spec.persistent,
            action: spec.action,
        });
        id
    }

    /// Resolves one request by id. The entry is removed synchronously, so
    /// resolving the same id twice yields `None` the second time and the
    /// caller can safely open a new dialog from within its handling of the
    /// result.
    pub fn resolve(&mut self, id: u64, outcome: DialogOutcome) -> Option<ResolvedDialog> {
        let position = self.dialogs.iter().position(|dialog| dialog.id == id)?;
        let request = self.dialogs.remove(position);
        Some(ResolvedDialog { request, outcome })
    }

    /// A click on the backdrop. Resolves as cancel unless the request is
    /// persistent, in which case it is ignored.
    pub fn backdrop(&mut self, id: u64) -> Option<ResolvedDialog> {
        let persistent = self
            .dialogs
            .iter()
            .find(|dialog| dialog.id == id)
            .map(|dialog| dialog.persistent)?;
        if persistent {
            return None;
        }
        self.resolve(id, DialogOutcome::Cancelled)
    }

    pub fn clear(&mut self) {
        self.dialogs.clear();
    }

    pub fn dialogs(&self) -> &[DialogRequest] {
        &self.dialogs
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fires_exactly_once_per_request() {
        let mut stack = DialogStack::new();
        let id = stack.push(
            DialogSpec::confirm("Delete recipe?")
                .variant(DialogVariant::Danger)
                .action(DialogAction::DeleteRecipe("r1".to_owned())),
        );

        // rapid double-click
        let first = stack.resolve(id, DialogOutcome::Confirmed);
        let second = stack.resolve(id, DialogOutcome::Confirmed);

        let resolved = first.expect("first resolve returns the request");
        assert_eq!(resolved.outcome, DialogOutcome::Confirmed);
        assert_eq!(
            resolved.request.action,
            DialogAction::DeleteRecipe("r1".to_owned())
        );
        assert!(second.is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn backdrop_cancels_unless_persistent() {
        let mut stack = DialogStack::new();
        let plain = stack.push(DialogSpec::confirm("plain"));
        let sticky = stack.push(DialogSpec::alert("sticky").persistent());

        let resolved = stack.backdrop(plain).expect("backdrop cancels");
        assert_eq!(resolved.outcome, DialogOutcome::Cancelled);

        assert!(stack.backdrop(sticky).is_none());
        assert_eq!(stack.dialogs().len(), 1);
        assert!(stack.resolve(sticky, DialogOutcome::Confirmed).is_some());
    }

    #[test]
    fn stack_preserves_insertion_order_and_supports_reentrant_pushes() {
        let mut stack = DialogStack::new();
        let a = stack.push(DialogSpec::confirm("a"));
        let b = stack.push(DialogSpec::confirm("b"));
        assert_eq!(
            stack.dialogs().iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![a, b]
        );

        // entry is gone before the caller reacts, so opening a follow-up
        // dialog from the resolution site is safe
        let resolved = stack.resolve(a, DialogOutcome::Cancelled).unwrap();
        assert_eq!(resolved.request.title, "a");
        let c = stack.push(DialogSpec::alert("c"));
        assert_eq!(
            stack.dialogs().iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![b, c]
        );
    }
}
