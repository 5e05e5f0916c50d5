//! User-visible notifications and the process-wide toast queue.

use std::time::Duration;

/// How long a non-persistent toast stays visible when the caller does not
/// pick a duration.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Severity or category for user-visible notifications.
///
/// This enum classifies notifications by their intent and visual styling,
/// allowing the UI to display them appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates an error or failure that may affect functionality.
    Error,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Neutral informational message that does not indicate success or failure.
    Info,
}

/// Presentation options a caller may attach to a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Visible duration override. Ignored for persistent toasts.
    pub duration: Option<Duration>,
    /// Persistent toasts never auto-dismiss; only an explicit dismiss (or
    /// clear-all) removes them.
    pub persistent: bool,
}

/// A notification payload intended for the user interface.
///
/// This is what crosses the bridge; the frontend queue assigns ids and
/// schedules auto-dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
    pub options: ToastOptions,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: None,
            options: ToastOptions::default(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.options.duration = Some(duration);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.options.persistent = true;
        self
    }
}

/// A toast that has been enqueued and assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique within the queue's lifetime, strictly increasing in enqueue
    /// order.
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
    /// Resolved visible duration. Meaningless when `persistent` is set.
    pub duration: Duration,
    pub persistent: bool,
}

/// Insertion-ordered queue of live toasts (oldest first).
///
/// The queue itself is pure bookkeeping; timers live with whoever renders it.
/// Dismissal is idempotent so a late auto-dismiss firing after a manual
/// dismiss is a harmless no-op.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its id.
    pub fn enqueue(&mut self, message: ToastMessage) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind: message.kind,
            title: message.title,
            body: message.body,
            duration: message.options.duration.unwrap_or(DEFAULT_TOAST_DURATION),
            persistent: message.options.persistent,
        });
        id
    }

    /// Removes one toast regardless of its position. Returns whether anything
    /// was removed; an absent id is a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Empties the queue.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_generation_ordered() {
        let mut queue = ToastQueue::new();
        let a = queue.enqueue(ToastMessage::info("a"));
        let b = queue.enqueue(ToastMessage::info("b"));
        let c = queue.enqueue(ToastMessage::info("c"));
        assert!(a < b && b < c);
    }

    #[test]
    fn dismissing_a_subset_keeps_the_rest_in_original_order() {
        let mut queue = ToastQueue::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| queue.enqueue(ToastMessage::success(format!("toast {i}"))))
            .collect();

        assert!(queue.dismiss(ids[1]));
        assert!(queue.dismiss(ids[3]));

        let remaining: Vec<u64> = queue.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);
    }

    #[test]
    fn dismissing_an_absent_id_is_a_no_op() {
        let mut queue = ToastQueue::new();
        let id = queue.enqueue(ToastMessage::error("oops"));
        assert!(queue.dismiss(id));
        // the auto-dismiss timer firing later must not disturb anything
        assert!(!queue.dismiss(id));
        assert!(!queue.dismiss(999));
        assert!(queue.is_empty());
    }

    #[test]
    fn default_duration_applies_unless_overridden() {
        let mut queue = ToastQueue::new();
        queue.enqueue(ToastMessage::info("default"));
        queue.enqueue(ToastMessage::info("custom").duration(Duration::from_secs(10)));

        assert_eq!(queue.toasts()[0].duration, DEFAULT_TOAST_DURATION);
        assert_eq!(queue.toasts()[1].duration, Duration::from_secs(10));
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut queue = ToastQueue::new();
        queue.enqueue(ToastMessage::info("a"));
        queue.enqueue(ToastMessage::warning("b").persistent());
        queue.clear();
        assert!(queue.is_empty());
    }
}
