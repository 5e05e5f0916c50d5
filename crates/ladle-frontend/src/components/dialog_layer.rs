use gpui::{
    Context, InteractiveElement, IntoElement, MouseButton, ParentElement, Render, Styled, Window,
    div, px, rgba, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};
use ladle_bridge::dialog::{DialogAction, DialogKind, DialogOutcome, DialogVariant, ResolvedDialog};

use crate::BackendBridge;
use crate::entities::DataEntities;

/// Renders the topmost pending dialog as a modal overlay and resolves it.
/// The resolution also owns the confirmed side effect, so a rapid double
/// click cannot fire it twice.
pub struct DialogLayer {
    data: DataEntities,
}

impl DialogLayer {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.dialogs, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }

    fn resolve(&mut self, id: u64, outcome: DialogOutcome, cx: &mut Context<Self>) {
        let resolved = self
            .data
            .dialogs
            .update(cx, |model, cx| model.resolve(id, outcome, cx));
        if let Some(resolved) = resolved {
            Self::perform(resolved, cx);
        }
    }

    fn backdrop_click(&mut self, id: u64, cx: &mut Context<Self>) {
        let resolved = self
            .data
            .dialogs
            .update(cx, |model, cx| model.backdrop(id, cx));
        if let Some(resolved) = resolved {
            Self::perform(resolved, cx);
        }
    }

    fn perform(resolved: ResolvedDialog, cx: &mut Context<Self>) {
        if resolved.outcome != DialogOutcome::Confirmed {
            return;
        }
        match resolved.request.action {
            DialogAction::None => {}
            DialogAction::DeleteRecipe(id) => {
                let bridge = cx.global::<BackendBridge>().clone();
                cx.spawn(async move |_, _| {
                    bridge.delete_recipe(id).await;
                })
                .detach();
            }
        }
    }
}

impl Render for DialogLayer {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(dialog) = self.data.dialogs.read(cx).stack.dialogs().last().cloned() else {
            return div().into_any_element();
        };
        let id = dialog.id;

        let confirm = match dialog.variant {
            DialogVariant::Danger => Button::new("dialog-confirm").danger(),
            _ => Button::new("dialog-confirm").primary(),
        };

        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(rgba(0x00000080))
            .occlude()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, _, cx| {
                    this.backdrop_click(id, cx);
                }),
            )
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(400.0))
                    .p_4()
                    .bg(cx.theme().background)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .shadow_md()
                    .occlude()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|_, _, _, cx| cx.stop_propagation()),
                    )
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(div().child(dialog.title.clone()).text_lg().font_bold())
                    .when_some(dialog.body.clone(), |this, body| {
                        this.child(div().child(body).text_color(cx.theme().muted_foreground))
                    })
                    .child(
                        div()
                            .flex()
                            .justify_end()
                            .gap_2()
                            .when(dialog.kind == DialogKind::Confirm, |this| {
                                this.child(
                                    Button::new("dialog-cancel")
                                        .outline()
                                        .label(dialog.cancel_label.clone())
                                        .on_click(cx.listener(move |this, _, _, cx| {
                                            this.resolve(id, DialogOutcome::Cancelled, cx);
                                        })),
                                )
                            })
                            .child(confirm.label(dialog.confirm_label.clone()).on_click(
                                cx.listener(move |this, _, _, cx| {
                                    this.resolve(id, DialogOutcome::Confirmed, cx);
                                }),
                            )),
                    ),
            )
            .into_any_element()
    }
}
