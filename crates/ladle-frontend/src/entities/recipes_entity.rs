use ladle_bridge::recipe::{Recipe, RecipeFilter, RecipeSummary};

/// Lifecycle events other views react to (navigation after a save, leaving
/// a deleted recipe's page).
#[derive(Debug, Clone)]
pub enum RecipeStoreEvent {
    Saved { id: String },
    SaveFailed(String),
    Deleted { id: String },
}

/// Owns everything the recipe views render: the dashboard list, the active
/// filters, the currently opened recipe, and the in-flight write state.
#[derive(Debug, Clone, Default)]
pub struct RecipesEntity {
    pub summaries: Vec<RecipeSummary>,
    pub list_error: Option<String>,
    pub list_loading: bool,
    /// Survives navigation so returning to the dashboard keeps the filters.
    pub filter: RecipeFilter,
    pub detail: Option<Recipe>,
    pub detail_error: Option<String>,
    pub detail_loading: bool,
    pub saving: bool,
}

impl RecipesEntity {
    pub fn new(_: &mut gpui::Context<Self>) -> Self {
        Self::default()
    }
}

impl gpui::EventEmitter<RecipeStoreEvent> for RecipesEntity {}
