use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};
use ladle_bridge::notification::ToastKind;

use crate::entities::DataEntities;

/// Renders the live toast queue in the window's bottom-right corner.
pub struct ToastStack {
    data: DataEntities,
}

impl ToastStack {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.toasts, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }
}

impl Render for ToastStack {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toasts = self.data.toasts.read(cx).queue.toasts().to_vec();

        div()
            .absolute()
            .bottom(px(16.0))
            .right(px(16.0))
            .flex()
            .flex_col()
            .gap_2()
            .children(toasts.into_iter().map(|toast| {
                let accent = match toast.kind {
                    ToastKind::Success => cx.theme().success,
                    ToastKind::Error => cx.theme().danger,
                    ToastKind::Warning => cx.theme().warning,
                    ToastKind::Info => cx.theme().primary,
                };
                let id = toast.id;

                div()
                    .w(px(320.0))
                    .p_3()
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(accent)
                    .rounded_lg()
                    .shadow_md()
                    .flex()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(div().child(toast.title.clone()).font_semibold())
                            .when_some(toast.body.clone(), |this, body| {
                                this.child(
                                    div()
                                        .child(body)
                                        .text_sm()
                                        .text_color(cx.theme().muted_foreground),
                                )
                            }),
                    )
                    .child(
                        Button::new(SharedString::from(format!("toast-dismiss-{id}")))
                            .ghost()
                            .label("✕")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.data.toasts.update(cx, |model, cx| {
                                    model.dismiss(id, cx);
                                });
                            })),
                    )
            }))
    }
}
