use gpui::{
    AppContext,
    Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, px,
};
use gpui_component::{
    ActiveTheme, Disableable, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputEvent, InputState},
};
use ladle_bridge::signup::{SignUpOutcome, SignUpRequest, evaluate_password, is_valid_email};

use crate::BackendBridge;
use crate::components::form_field::FormField;
use crate::entities::DataEntities;
use crate::views::{NavigateEvent, Page};

pub struct SignupPage {
    data: DataEntities,
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    username_input: Entity<InputState>,
    fullname_input: Entity<InputState>,
}

impl SignupPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let email_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let password_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Password").masked(true));
        let username_input = cx.new(|cx| InputState::new(window, cx).placeholder("Username"));
        let fullname_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Full name (optional)"));

        // the validity gates re-evaluate on every keystroke
        for input in [&email_input, &password_input, &username_input] {
            cx.subscribe_in(input, window, |_, _, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    cx.notify();
                }
            })
            .detach();
        }

        cx.observe(&data.signup, |_, _, cx| cx.notify()).detach();

        Self {
            data: data.clone(),
            email_input,
            password_input,
            username_input,
            fullname_input,
        }
    }

    fn current_request(&self, cx: &gpui::App) -> SignUpRequest {
        SignUpRequest {
            email: self.email_input.read(cx).value().trim().to_owned(),
            password: self.password_input.read(cx).value().to_string(),
            username: self.username_input.read(cx).value().trim().to_owned(),
            fullname: self.fullname_input.read(cx).value().trim().to_owned(),
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let request = self.current_request(cx);
        if !request.is_submittable() {
            return;
        }

        self.data.signup.update(cx, |model, cx| {
            model.submitting = true;
            model.outcome = None;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.sign_up(request).await;
        })
        .detach();
    }

    fn rule_row(&self, label: &'static str, ok: bool, cx: &Context<Self>) -> impl IntoElement {
        let color = if ok {
            cx.theme().success
        } else {
            cx.theme().muted_foreground
        };
        div()
            .flex()
            .items_center()
            .gap_2()
            .text_sm()
            .text_color(color)
            .child(if ok { "✓" } else { "•" })
            .child(label)
    }
}

impl gpui::EventEmitter<NavigateEvent> for SignupPage {}

impl Render for SignupPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let request = self.current_request(cx);
        let rules = evaluate_password(&request.password);
        let signup = self.data.signup.read(cx).clone();

        let email_error = (!request.email.is_empty() && !is_valid_email(&request.email))
            .then_some("Enter a valid email address");
        let username_error = matches!(signup.outcome, Some(SignUpOutcome::UsernameTaken))
            .then_some("Username is already taken");

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(360.0))
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(div().child("Create account").text_2xl().font_bold())
                    .child(
                        FormField::new("Email")
                            .error(email_error)
                            .child(TextInput::new(&self.email_input)),
                    )
                    .child(
                        FormField::new("Username")
                            .error(username_error)
                            .child(TextInput::new(&self.username_input)),
                    )
                    .child(FormField::new("Full name").child(TextInput::new(&self.fullname_input)))
                    .child(FormField::new("Password").child(TextInput::new(&self.password_input)))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(self.rule_row("At least 8 characters", rules.length, cx))
                            .child(self.rule_row("One uppercase letter", rules.upper, cx))
                            .child(self.rule_row("One lowercase letter", rules.lower, cx))
                            .child(self.rule_row("One number", rules.number, cx))
                            .child(self.rule_row("One special character", rules.special, cx)),
                    )
                    .child(
                        Button::new("sign_up_submit")
                            .primary()
                            .loading(signup.submitting)
                            .disabled(!request.is_submittable() || signup.submitting)
                            .label("Sign up")
                            .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .child("Already have an account?")
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground),
                            )
                            .child(Button::new("go_login").ghost().label("Sign in").on_click(
                                cx.listener(|_, _, _, cx| {
                                    cx.emit(NavigateEvent(Page::Login));
                                }),
                            )),
                    ),
            )
    }
}
