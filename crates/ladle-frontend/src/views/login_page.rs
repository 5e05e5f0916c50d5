use gpui::{
    AppContext,
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputEvent, InputState},
};

use crate::BackendBridge;
use crate::components::form_field::FormField;
use crate::entities::DataEntities;
use crate::views::{NavigateEvent, Page};

pub struct LoginPage {
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    error: Option<SharedString>,
    submitting: bool,
}

impl LoginPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let email_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("you@example.com"));
        let password_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Password").masked(true));

        cx.subscribe_in(
            &password_input,
            window,
            |this, _, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.submit(cx);
                }
            },
        )
        .detach();

        // a failed sign-in comes back as an error toast, which is the only
        // signal that the attempt is over
        cx.observe(&data.toasts, |this, _, cx| {
            if this.submitting {
                this.submitting = false;
                cx.notify();
            }
        })
        .detach();

        Self {
            email_input,
            password_input,
            error: None,
            submitting: false,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let email = self.email_input.read(cx).value().trim().to_owned();
        let password = self.password_input.read(cx).value().to_string();

        if email.is_empty() || password.is_empty() {
            self.error = Some("Enter your email and password.".into());
            cx.notify();
            return;
        }

        self.error = None;
        self.submitting = true;
        cx.notify();

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.sign_in(email, password).await;
        })
        .detach();
    }
}

impl gpui::EventEmitter<NavigateEvent> for LoginPage {}

impl Render for LoginPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
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
                    .child(div().child("Sign in").text_2xl().font_bold())
                    .child(FormField::new("Email").child(TextInput::new(&self.email_input)))
                    .child(FormField::new("Password").child(TextInput::new(&self.password_input)))
                    .when_some(self.error.clone(), |this, error| {
                        this.child(div().child(error).text_sm().text_color(cx.theme().danger))
                    })
                    .child(
                        Button::new("sign_in_submit")
                            .primary()
                            .loading(self.submitting)
                            .label("Sign in")
                            .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .child("Need an account?")
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground),
                            )
                            .child(Button::new("go_signup").ghost().label("Create one").on_click(
                                cx.listener(|_, _, _, cx| {
                                    cx.emit(NavigateEvent(Page::Signup));
                                }),
                            )),
                    ),
            )
    }
}
