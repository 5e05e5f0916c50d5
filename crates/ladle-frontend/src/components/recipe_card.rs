use gpui::{IntoElement, ParentElement, SharedString, Styled, div, px, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};
use ladle_bridge::recipe::RecipeSummary;

/// A dashboard tile for one recipe. The enclosing view makes it clickable.
#[derive(IntoElement)]
pub struct RecipeCard {
    title: SharedString,
    category: Option<SharedString>,
}

impl RecipeCard {
    pub fn new(summary: &RecipeSummary) -> Self {
        Self {
            title: summary
                .title
                .clone()
                .unwrap_or_else(|| "Untitled recipe".to_owned())
                .into(),
            category: summary.category.clone().map(Into::into),
        }
    }
}

impl gpui::RenderOnce for RecipeCard {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let initial: SharedString = self
            .title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
            .into();

        div()
            .w_full()
            .flex()
            .flex_col()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_lg()
            .child(
                div()
                    .h(px(96.0))
                    .bg(cx.theme().muted)
                    .rounded_t_lg()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .child(initial)
                            .text_2xl()
                            .font_bold()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(
                div()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(div().child(self.title).font_semibold())
                    .when_some(self.category, |this, category| {
                        this.child(
                            div()
                                .child(category)
                                .text_sm()
                                .text_color(cx.theme().muted_foreground),
                        )
                    }),
            )
    }
}
