use gpui::{
    AppContext,
    Context, Entity, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::{
    ActiveTheme, IndexPath, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputEvent, InputState},
    select::{Select, SelectEvent, SelectItem, SelectState},
    switch::Switch,
};
use ladle_bridge::recipe::Category;

use crate::BackendBridge;
use crate::components::recipe_card::RecipeCard;
use crate::entities::DataEntities;
use crate::views::{NavigateEvent, Page};

#[derive(Debug, Clone)]
struct CategoryOption {
    label: SharedString,
    value: Option<Category>,
}

impl SelectItem for CategoryOption {
    type Value = Option<Category>;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

pub struct DashboardPage {
    data: DataEntities,
    search_input: Entity<InputState>,
    category_select: Entity<SelectState<Vec<CategoryOption>>>,
}

impl DashboardPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let filter = data.recipes.read(cx).filter.clone();

        let search_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Search recipes...")
                .default_value(filter.search.clone())
        });

        let category_select = cx.new(|cx| {
            let mut options = vec![CategoryOption {
                label: "All categories".into(),
                value: None,
            }];
            options.extend(Category::ALL.into_iter().map(|category| CategoryOption {
                label: category.label().into(),
                value: Some(category),
            }));

            let selected = filter
                .category
                .and_then(|active| Category::ALL.into_iter().position(|c| c == active))
                .map(|position| IndexPath::new(position + 1))
                .unwrap_or_default();
            SelectState::new(options, Some(selected), window, cx)
        });

        cx.observe(&data.recipes, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.session, |_, _, cx| cx.notify()).detach();

        // search narrows the already-loaded list locally
        cx.subscribe_in(
            &search_input,
            window,
            |this, _, event: &InputEvent, _, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    let search = this.search_input.read(cx).value().to_string();
                    this.data.recipes.update(cx, |model, cx| {
                        model.filter.search = search;
                        cx.notify();
                    });
                }
            },
        )
        .detach();

        // category changes are pushed down into the backend query
        cx.subscribe_in(
            &category_select,
            window,
            |this, _, event, _, cx| match event {
                SelectEvent::Confirm(value) => {
                    let category = value.clone().flatten();
                    this.data.recipes.update(cx, |model, cx| {
                        model.filter.category = category;
                        cx.notify();
                    });
                    this.refetch(cx);
                }
            },
        )
        .detach();

        let page = Self {
            data: data.clone(),
            search_input,
            category_select,
        };
        page.refetch(cx);
        page
    }

    fn refetch(&self, cx: &mut Context<Self>) {
        let filter = self.data.recipes.read(cx).filter.clone();
        self.data.recipes.update(cx, |model, cx| {
            model.list_loading = true;
            model.list_error = None;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_recipes(filter).await;
        })
        .detach();
    }

    fn toggle_mine(&mut self, mine_only: bool, cx: &mut Context<Self>) {
        self.data.recipes.update(cx, |model, cx| {
            model.filter.mine_only = mine_only;
            cx.notify();
        });
        self.refetch(cx);
    }
}

impl gpui::EventEmitter<NavigateEvent> for DashboardPage {}

impl Render for DashboardPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (summaries, filter, list_loading, list_error) = {
            let state = self.data.recipes.read(cx);
            (
                state.summaries.clone(),
                state.filter.clone(),
                state.list_loading,
                state.list_error.clone(),
            )
        };
        let session = self.data.session.read(cx).session.clone();
        let user_id = session.user_id().map(str::to_owned);

        let body: gpui::AnyElement = if list_loading {
            div()
                .child("Loading recipes...")
                .text_color(cx.theme().muted_foreground)
                .into_any_element()
        } else if let Some(error) = list_error {
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(div().child(error).text_color(cx.theme().danger))
                .child(
                    Button::new("retry_list")
                        .outline()
                        .label("Try again")
                        .on_click(cx.listener(|this, _, _, cx| this.refetch(cx))),
                )
                .into_any_element()
        } else {
            let visible: Vec<_> = summaries
                .iter()
                .filter(|summary| filter.matches(summary, user_id.as_deref()))
                .cloned()
                .collect();

            if visible.is_empty() {
                div()
                    .child("No recipes match. Try different filters, or add the first one.")
                    .text_color(cx.theme().muted_foreground)
                    .into_any_element()
            } else {
                div()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .children(visible.into_iter().map(|summary| {
                        let id = summary.id.clone();
                        div()
                            .id(SharedString::from(format!("recipe-{}", summary.id)))
                            .w(px(240.0))
                            .cursor_pointer()
                            .on_click(cx.listener(move |_, _, _, cx| {
                                cx.emit(NavigateEvent(Page::RecipeDetail(id.clone())));
                            }))
                            .child(RecipeCard::new(&summary))
                    }))
                    .into_any_element()
            }
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().child("Recipes").text_2xl().font_bold())
                    .children(session.is_authenticated().then(|| {
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().child("My recipes only").text_sm())
                            .child(
                                Switch::new("mine_only")
                                    .checked(filter.mine_only)
                                    .on_click(cx.listener(|this, checked: &bool, _, cx| {
                                        this.toggle_mine(*checked, cx);
                                    })),
                            )
                    })),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(div().flex_1().child(TextInput::new(&self.search_input)))
                    .child(Select::new(&self.category_select).placeholder("All categories")),
            )
            .child(body)
    }
}
