use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};
use ladle_bridge::dialog::{DialogAction, DialogSpec, DialogVariant};
use ladle_bridge::recipe::{Recipe, direct_image_url};

use crate::BackendBridge;
use crate::entities::{DataEntities, dialogs_entity::DialogsEntity};
use crate::views::{NavigateEvent, Page};

pub struct RecipeDetailPage {
    data: DataEntities,
    id: String,
}

impl RecipeDetailPage {
    pub fn new(data: &DataEntities, id: String, _: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.recipes, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.session, |_, _, cx| cx.notify()).detach();

        data.recipes.update(cx, |model, cx| {
            model.detail_loading = true;
            model.detail_error = None;
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        let recipe_id = id.clone();
        cx.spawn(async move |_, _| {
            bridge.fetch_recipe(recipe_id).await;
        })
        .detach();

        Self {
            data: data.clone(),
            id,
        }
    }

    fn confirm_delete(&mut self, recipe: &Recipe, cx: &mut Context<Self>) {
        let title = recipe.title.clone().unwrap_or_else(|| "this recipe".to_owned());
        DialogsEntity::open(
            &self.data.dialogs,
            DialogSpec::confirm("Delete recipe?")
                .body(format!("\"{title}\" will be removed for everyone. This cannot be undone."))
                .variant(DialogVariant::Danger)
                .confirm_label("Delete")
                .action(DialogAction::DeleteRecipe(self.id.clone())),
            cx,
        );
    }
}

impl gpui::EventEmitter<NavigateEvent> for RecipeDetailPage {}

impl Render for RecipeDetailPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (detail, loading, error) = {
            let state = self.data.recipes.read(cx);
            (
                state.detail.clone(),
                state.detail_loading,
                state.detail_error.clone(),
            )
        };
        let session = self.data.session.read(cx).session.clone();

        let back_button = Button::new("back_to_recipes")
            .ghost()
            .label("← Back to recipes")
            .on_click(cx.listener(|_, _, _, cx| {
                cx.emit(NavigateEvent(Page::Dashboard));
            }));

        let content: gpui::AnyElement = if loading {
            div()
                .child("Loading recipe...")
                .text_color(cx.theme().muted_foreground)
                .into_any_element()
        } else if let Some(error) = error {
            div().child(error).text_color(cx.theme().danger).into_any_element()
        } else if let Some(recipe) = detail.filter(|recipe| recipe.id == self.id) {
            let is_owner = session.user_id().is_some()
                && recipe.user_id.as_deref() == session.user_id();

            let mut meta: Vec<String> = Vec::new();
            if let Some(category) = &recipe.category {
                meta.push(category.clone());
            }
            if let Some(difficulty) = recipe.difficulty_label() {
                meta.push(difficulty.to_owned());
            }
            if let Some(minutes) = recipe.cooking_time {
                meta.push(format!("{minutes} min"));
            }

            div()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .child(recipe.title.clone().unwrap_or_else(|| "Untitled recipe".to_owned()))
                        .text_2xl()
                        .font_bold(),
                )
                .when(!meta.is_empty(), |this| {
                    this.child(
                        div()
                            .child(meta.join(" · "))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                })
                .when_some(recipe.description.clone(), |this, description| {
                    this.child(div().child(description))
                })
                .when_some(recipe.image_url.clone(), |this, url| {
                    this.child(
                        div()
                            .child(format!("Image: {}", direct_image_url(&url)))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                })
                .when_some(recipe.ingredients.clone(), |this, ingredients| {
                    this.child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(div().child("Ingredients").text_lg().font_semibold())
                            .child(div().child(ingredients)),
                    )
                })
                .when_some(recipe.instructions.clone(), |this, instructions| {
                    this.child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(div().child("Instructions").text_lg().font_semibold())
                            .children(
                                instructions
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, step)| {
                                        div().child(format!("{}. {step}", index + 1))
                                    }),
                            ),
                    )
                })
                .when(is_owner, |this| {
                    let recipe = recipe.clone();
                    this.child(
                        div()
                            .mt_2()
                            .flex()
                            .gap_3()
                            .child(Button::new("edit_recipe").outline().label("Edit").on_click(
                                cx.listener(|this, _, _, cx| {
                                    cx.emit(NavigateEvent(Page::EditRecipe(this.id.clone())));
                                }),
                            ))
                            .child(Button::new("delete_recipe").danger().label("Delete").on_click(
                                cx.listener(move |this, _, _, cx| {
                                    this.confirm_delete(&recipe, cx);
                                }),
                            )),
                    )
                })
                .into_any_element()
        } else {
            div()
                .child("Recipe not found.")
                .text_color(cx.theme().muted_foreground)
                .into_any_element()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(div().child(back_button))
            .child(content)
    }
}
