use gpui::{IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder};
use gpui_component::{ActiveTheme, StyledExt};

/// A labelled form row with an optional validation error underneath.
#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    error: Option<SharedString>,
    child: Option<gpui::AnyElement>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            error: None,
            child: None,
        }
    }

    pub fn error(mut self, error: Option<impl Into<SharedString>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl gpui::RenderOnce for FormField {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .child(div().child(self.label).text_sm().font_semibold())
            .when(self.child.is_some(), |this| this.child(self.child.unwrap()))
            .when_some(self.error, |this, error| {
                this.child(div().child(error).text_sm().text_color(cx.theme().danger))
            })
    }
}
