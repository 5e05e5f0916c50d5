use ladle_bridge::signup::SignUpOutcome;

/// Tracks the in-flight sign-up attempt and its outcome for the signup view.
#[derive(Debug, Clone, Default)]
pub struct SignupEntity {
    pub submitting: bool,
    pub outcome: Option<SignUpOutcome>,
}

impl SignupEntity {
    pub fn new(_: &mut gpui::Context<Self>) -> Self {
        Self::default()
    }
}
