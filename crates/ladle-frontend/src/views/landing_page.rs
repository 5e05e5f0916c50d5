use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::entities::DataEntities;
use crate::views::{NavigateEvent, Page};

pub struct LandingPage {
    data: DataEntities,
}

impl LandingPage {
    pub fn new(data: &DataEntities, _: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.session, |_, _, cx| cx.notify()).detach();
        Self { data: data.clone() }
    }
}

impl gpui::EventEmitter<NavigateEvent> for LandingPage {}

impl Render for LandingPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.data.session.read(cx).session.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_3()
            .child(div().child("Ladle").text_2xl().font_bold())
            .child(
                div()
                    .child("Share the dishes you love and find your next favorite one.")
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div()
                    .mt_4()
                    .flex()
                    .gap_3()
                    .child(
                        Button::new("browse_recipes")
                            .primary()
                            .label("Browse recipes")
                            .on_click(cx.listener(|_, _, _, cx| {
                                cx.emit(NavigateEvent(Page::Dashboard));
                            })),
                    )
                    .children(if session.is_authenticated() {
                        None
                    } else {
                        Some(
                            div()
                                .flex()
                                .gap_3()
                                .child(Button::new("sign_in").outline().label("Sign in").on_click(
                                    cx.listener(|_, _, _, cx| {
                                        cx.emit(NavigateEvent(Page::Login));
                                    }),
                                ))
                                .child(
                                    Button::new("create_account")
                                        .ghost()
                                        .label("Create account")
                                        .on_click(cx.listener(|_, _, _, cx| {
                                            cx.emit(NavigateEvent(Page::Signup));
                                        })),
                                ),
                        )
                    }),
            )
    }
}
