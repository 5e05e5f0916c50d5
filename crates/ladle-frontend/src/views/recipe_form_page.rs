use gpui::{
    AppContext,
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, IndexPath, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputEvent, InputState},
    select::{Select, SelectEvent, SelectItem, SelectState},
};
use ladle_bridge::recipe::{Category, Difficulty, DraftErrors, DraftField, RecipeDraft};

use crate::BackendBridge;
use crate::components::form_field::FormField;
use crate::entities::DataEntities;
use crate::views::{NavigateEvent, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone)]
struct DifficultyOption {
    label: SharedString,
    value: Difficulty,
}

impl SelectItem for DifficultyOption {
    type Value = Difficulty;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

#[derive(Debug, Clone)]
struct CategoryOption {
    label: SharedString,
    value: Category,
}

impl SelectItem for CategoryOption {
    type Value = Category;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

/// The create/edit recipe form. All field state lives in the inputs until
/// submit, when it is assembled into a draft and validated as a whole.
pub struct RecipeFormPage {
    data: DataEntities,
    mode: FormMode,
    title_input: Entity<InputState>,
    description_input: Entity<InputState>,
    ingredients_input: Entity<InputState>,
    cooking_time_input: Entity<InputState>,
    image_url_input: Entity<InputState>,
    instruction_inputs: Vec<Entity<InputState>>,
    difficulty_select: Entity<SelectState<Vec<DifficultyOption>>>,
    category_select: Entity<SelectState<Vec<CategoryOption>>>,
    errors: DraftErrors,
    seeded: bool,
}

impl RecipeFormPage {
    pub fn new(
        data: &DataEntities,
        mode: FormMode,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let detail = data.recipes.read(cx).detail.clone();
        let (draft, seeded) = match &mode {
            FormMode::Create => (RecipeDraft::default(), true),
            FormMode::Edit(id) => match detail {
                Some(recipe) if recipe.id == *id => (RecipeDraft::from_recipe(&recipe), true),
                _ => (RecipeDraft::default(), false),
            },
        };

        let title_input = Self::text_input(&draft.title, "Recipe title", window, cx);
        let description_input = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .placeholder("What makes this dish special?")
                .default_value(draft.description.clone())
        });
        let ingredients_input = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .placeholder("One ingredient per line")
                .default_value(draft.ingredients.clone())
        });
        let cooking_time_input = Self::text_input(&draft.cooking_time, "30", window, cx);
        let image_url_input =
            Self::text_input(&draft.image_url, "https://example.com/dish.jpg", window, cx);

        let instruction_inputs: Vec<_> = draft
            .instructions
            .iter()
            .map(|step| Self::step_input(step, window, cx))
            .collect();

        let difficulty_select = cx.new(|cx| {
            let options: Vec<DifficultyOption> = Difficulty::ALL
                .into_iter()
                .map(|difficulty| DifficultyOption {
                    label: difficulty.label().into(),
                    value: difficulty,
                })
                .collect();
            let selected = draft
                .difficulty
                .and_then(|active| Difficulty::ALL.into_iter().position(|d| d == active))
                .map(IndexPath::new);
            SelectState::new(options, selected, window, cx)
        });
        let category_select = cx.new(|cx| {
            let options: Vec<CategoryOption> = Category::ALL
                .into_iter()
                .map(|category| CategoryOption {
                    label: category.label().into(),
                    value: category,
                })
                .collect();
            let selected = draft
                .category
                .and_then(|active| Category::ALL.into_iter().position(|c| c == active))
                .map(IndexPath::new);
            SelectState::new(options, selected, window, cx)
        });

        // editing a field clears its stale validation error
        Self::clear_on_change(&title_input, DraftField::Title, window, cx);
        Self::clear_on_change(&description_input, DraftField::Description, window, cx);
        Self::clear_on_change(&ingredients_input, DraftField::Ingredients, window, cx);
        Self::clear_on_change(&cooking_time_input, DraftField::CookingTime, window, cx);

        cx.subscribe_in(&difficulty_select, window, |this, _, event, _, cx| {
            match event {
                SelectEvent::Confirm(_) => {
                    this.errors.clear(DraftField::Difficulty);
                    cx.notify();
                }
            }
        })
        .detach();
        cx.subscribe_in(&category_select, window, |this, _, event, _, cx| match event {
            SelectEvent::Confirm(_) => {
                this.errors.clear(DraftField::Category);
                cx.notify();
            }
        })
        .detach();

        if !seeded {
            data.recipes.update(cx, |model, cx| {
                model.detail_loading = true;
                model.detail_error = None;
                cx.notify();
            });
            if let FormMode::Edit(id) = &mode {
                let bridge = cx.global::<BackendBridge>().clone();
                let id = id.clone();
                cx.spawn(async move |_, _| {
                    bridge.fetch_recipe(id).await;
                })
                .detach();
            }
            cx.observe_in(&data.recipes.clone(), window, |this, _, window, cx| {
                this.seed_from_detail(window, cx);
                cx.notify();
            })
            .detach();
        }

        cx.observe(&data.recipes, |_, _, cx| cx.notify()).detach();

        Self {
            data: data.clone(),
            mode,
            title_input,
            description_input,
            ingredients_input,
            cooking_time_input,
            image_url_input,
            instruction_inputs,
            difficulty_select,
            category_select,
            errors: DraftErrors::default(),
            seeded,
        }
    }

    fn text_input(
        value: &str,
        placeholder: &'static str,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<InputState> {
        let value = value.to_owned();
        cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .default_value(value)
        })
    }

    fn step_input(value: &str, window: &mut Window, cx: &mut Context<Self>) -> Entity<InputState> {
        let input = Self::text_input(value, "Describe this step", window, cx);
        Self::clear_on_change(&input, DraftField::Instructions, window, cx);
        input
    }

    fn clear_on_change(
        input: &Entity<InputState>,
        field: DraftField,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        cx.subscribe_in(input, window, move |this, _, event: &InputEvent, _, cx| {
            if matches!(event, InputEvent::Change { .. }) {
                this.errors.clear(field);
                cx.notify();
            }
        })
        .detach();
    }

    /// Fills the form once the recipe being edited arrives from the backend.
    fn seed_from_detail(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.seeded {
            return;
        }
        let FormMode::Edit(id) = self.mode.clone() else {
            return;
        };
        let Some(recipe) = self.data.recipes.read(cx).detail.clone() else {
            return;
        };
        if recipe.id != id {
            return;
        }

        let draft = RecipeDraft::from_recipe(&recipe);
        self.title_input.update(cx, |input, cx| {
            input.set_value(draft.title.clone(), window, cx);
        });
        self.description_input.update(cx, |input, cx| {
            input.set_value(draft.description.clone(), window, cx);
        });
        self.ingredients_input.update(cx, |input, cx| {
            input.set_value(draft.ingredients.clone(), window, cx);
        });
        self.cooking_time_input.update(cx, |input, cx| {
            input.set_value(draft.cooking_time.clone(), window, cx);
        });
        self.image_url_input.update(cx, |input, cx| {
            input.set_value(draft.image_url.clone(), window, cx);
        });

        self.instruction_inputs = draft
            .instructions
            .iter()
            .map(|step| Self::step_input(step, window, cx))
            .collect();

        if let Some(position) = draft
            .difficulty
            .and_then(|active| Difficulty::ALL.into_iter().position(|d| d == active))
        {
            self.difficulty_select.update(cx, |state, cx| {
                state.set_selected_index(Some(IndexPath::new(position)), window, cx);
            });
        }
        if let Some(position) = draft
            .category
            .and_then(|active| Category::ALL.into_iter().position(|c| c == active))
        {
            self.category_select.update(cx, |state, cx| {
                state.set_selected_index(Some(IndexPath::new(position)), window, cx);
            });
        }

        self.seeded = true;
        cx.notify();
    }

    fn current_draft(&self, cx: &gpui::App) -> RecipeDraft {
        RecipeDraft {
            title: self.title_input.read(cx).value().to_string(),
            description: self.description_input.read(cx).value().to_string(),
            ingredients: self.ingredients_input.read(cx).value().to_string(),
            cooking_time: self.cooking_time_input.read(cx).value().to_string(),
            difficulty: self.difficulty_select.read(cx).selected_value().copied(),
            category: self.category_select.read(cx).selected_value().copied(),
            instructions: self
                .instruction_inputs
                .iter()
                .map(|input| input.read(cx).value().to_string())
                .collect(),
            image_url: self.image_url_input.read(cx).value().to_string(),
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        if self.data.recipes.read(cx).saving {
            return;
        }
        let draft = self.current_draft(cx);
        match draft.validate() {
            Err(errors) => {
                self.errors = errors;
                cx.notify();
            }
            Ok(payload) => {
                self.errors = DraftErrors::default();
                self.data.recipes.update(cx, |model, cx| {
                    model.saving = true;
                    cx.notify();
                });

                let bridge = cx.global::<BackendBridge>().clone();
                let mode = self.mode.clone();
                cx.spawn(async move |_, _| match mode {
                    FormMode::Create => bridge.create_recipe(payload).await,
                    FormMode::Edit(id) => bridge.update_recipe(id, payload).await,
                })
                .detach();
                cx.notify();
            }
        }
    }
}

impl gpui::EventEmitter<NavigateEvent> for RecipeFormPage {}

impl Render for RecipeFormPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.seeded {
            return div()
                .child("Loading recipe...")
                .text_color(cx.theme().muted_foreground)
                .into_any_element();
        }

        let saving = self.data.recipes.read(cx).saving;
        let (heading, submit_label) = match self.mode {
            FormMode::Create => ("Add a recipe", "Create recipe"),
            FormMode::Edit(_) => ("Edit recipe", "Save changes"),
        };

        let error = |field: DraftField| self.errors.get(field).map(str::to_owned);

        let steps: Vec<_> = self
            .instruction_inputs
            .iter()
            .cloned()
            .enumerate()
            .collect();
        let removable = steps.len() > 1;

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .max_w(px(560.0))
            .child(div().child(heading).text_2xl().font_bold())
            .child(
                FormField::new("Title")
                    .error(error(DraftField::Title))
                    .child(TextInput::new(&self.title_input)),
            )
            .child(
                FormField::new("Description")
                    .error(error(DraftField::Description))
                    .child(TextInput::new(&self.description_input)),
            )
            .child(
                FormField::new("Ingredients")
                    .error(error(DraftField::Ingredients))
                    .child(TextInput::new(&self.ingredients_input)),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(
                        div().flex_1().child(
                            FormField::new("Cooking time (minutes)")
                                .error(error(DraftField::CookingTime))
                                .child(TextInput::new(&self.cooking_time_input)),
                        ),
                    )
                    .child(
                        div().flex_1().child(
                            FormField::new("Difficulty")
                                .error(error(DraftField::Difficulty))
                                .child(
                                    Select::new(&self.difficulty_select)
                                        .placeholder("Select difficulty..."),
                                ),
                        ),
                    ),
            )
            .child(
                FormField::new("Category")
                    .error(error(DraftField::Category))
                    .child(Select::new(&self.category_select).placeholder("Select category...")),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(div().child("Instructions").text_sm().font_semibold())
                    .children(steps.into_iter().map(|(index, input)| {
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().w(px(24.0)).child(format!("{}.", index + 1)))
                            .child(div().flex_1().child(TextInput::new(&input)))
                            .when(removable, |this| {
                                this.child(
                                    Button::new(SharedString::from(format!(
                                        "remove-step-{index}"
                                    )))
                                    .ghost()
                                    .label("Remove")
                                    .on_click(cx.listener(move |this, _, _, cx| {
                                        if this.instruction_inputs.len() > 1 {
                                            this.instruction_inputs.remove(index);
                                            cx.notify();
                                        }
                                    })),
                                )
                            })
                    }))
                    .when_some(error(DraftField::Instructions), |this, message| {
                        this.child(
                            div()
                                .child(message)
                                .text_sm()
                                .text_color(cx.theme().danger),
                        )
                    })
                    .child(
                        div().child(
                            Button::new("add_step").outline().label("Add step").on_click(
                                cx.listener(|this, _, window, cx| {
                                    let input = Self::step_input("", window, cx);
                                    this.instruction_inputs.push(input);
                                    cx.notify();
                                }),
                            ),
                        ),
                    ),
            )
            .child(
                FormField::new("Image URL (optional)")
                    .child(TextInput::new(&self.image_url_input)),
            )
            .child(
                div()
                    .mt_2()
                    .flex()
                    .gap_3()
                    .child(
                        Button::new("submit_recipe")
                            .primary()
                            .loading(saving)
                            .label(submit_label)
                            .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                    )
                    .child(Button::new("cancel_form").ghost().label("Cancel").on_click(
                        cx.listener(|_, _, _, cx| {
                            cx.emit(NavigateEvent(Page::Dashboard));
                        }),
                    )),
            )
            .into_any_element()
    }
}
