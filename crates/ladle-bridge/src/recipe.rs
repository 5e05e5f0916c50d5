//! Recipe records, the fixed category/difficulty sets, and the form draft
//! with its validation rules.

use serde::{Deserialize, Serialize};

/// The fixed set of recipe categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Appetizers,
    Main,
    Desserts,
    Breakfast,
    Snack,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Appetizers,
        Category::Main,
        Category::Desserts,
        Category::Breakfast,
        Category::Snack,
    ];

    /// The label shown in the UI, which is also the stored column value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Appetizers => "Appetizers",
            Category::Main => "Main",
            Category::Desserts => "Desserts",
            Category::Breakfast => "Breakfast",
            Category::Snack => "Snack",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == value)
    }
}

/// The fixed set of difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.label() == value)
    }
}

/// A full recipe row as stored by the backend. The schema keeps difficulty
/// as a text array; the application only ever writes a single element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<Vec<String>>,
    pub category: Option<String>,
    pub instructions: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

impl Recipe {
    /// The single difficulty value behind the array wire shape.
    pub fn difficulty_label(&self) -> Option<&str> {
        self.difficulty
            .as_ref()
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// The subset of columns the dashboard lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub created_at: Option<String>,
}

/// The write shape for inserts and updates. `user_id` is attached on create
/// and omitted on update (ownership is part of the update's row scope, not
/// the payload).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub cooking_time: i32,
    pub difficulty: Vec<String>,
    pub category: String,
    pub instructions: Vec<String>,
    pub image_url: Option<String>,
}

/// The fields the form validates, for targeted error clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Ingredients,
    CookingTime,
    Difficulty,
    Category,
    Instructions,
}

/// Per-field validation errors. Empty means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub cooking_time: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub instructions: Option<String>,
}

impl DraftErrors {
    pub fn get(&self, field: DraftField) -> Option<&str> {
        let slot = match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Ingredients => &self.ingredients,
            DraftField::CookingTime => &self.cooking_time,
            DraftField::Difficulty => &self.difficulty,
            DraftField::Category => &self.category,
            DraftField::Instructions => &self.instructions,
        };
        slot.as_deref()
    }

    /// Clears the stale error for one field once the user edits it.
    pub fn clear(&mut self, field: DraftField) {
        match field {
            DraftField::Title => self.title = None,
            DraftField::Description => self.description = None,
            DraftField::Ingredients => self.ingredients = None,
            DraftField::CookingTime => self.cooking_time = None,
            DraftField::Difficulty => self.difficulty = None,
            DraftField::Category => self.category = None,
            DraftField::Instructions => self.instructions = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_none()
            && self.cooking_time.is_none()
            && self.difficulty.is_none()
            && self.category.is_none()
            && self.instructions.is_none()
    }
}

/// In-memory, unpersisted recipe form state. Initialized empty (create) or
/// from a fetched recipe (edit); discarded on navigation or successful
/// submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    /// Raw field text; validated as an integer on submit.
    pub cooking_time: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    pub instructions: Vec<String>,
    pub image_url: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: String::new(),
            cooking_time: String::new(),
            difficulty: None,
            category: None,
            instructions: vec![String::new()],
            image_url: String::new(),
        }
    }
}

impl RecipeDraft {
    /// Seeds the draft from a persisted recipe for the edit form.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let instructions = match &recipe.instructions {
            Some(steps) if !steps.is_empty() => steps.clone(),
            _ => vec![String::new()],
        };
        Self {
            title: recipe.title.clone().unwrap_or_default(),
            description: recipe.description.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.clone().unwrap_or_default(),
            cooking_time: recipe
                .cooking_time
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            difficulty: recipe.difficulty_label().and_then(Difficulty::parse),
            category: recipe.category.as_deref().and_then(Category::parse),
            instructions,
            image_url: recipe.image_url.clone().unwrap_or_default(),
        }
    }

    /// Validates every rule and, when all pass, builds the write payload:
    /// text fields trimmed, empty instruction steps dropped in place, the
    /// single difficulty wrapped in its array wire shape.
    ///
    /// Validation is evaluated fully on each attempt, so correcting a field
    /// and resubmitting succeeds without leftover errors.
    pub fn validate(&self) -> Result<RecipePayload, DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_owned());
        }
        if self.description.trim().is_empty() {
            errors.description = Some("Description is required".to_owned());
        }
        if self.ingredients.trim().is_empty() {
            errors.ingredients = Some("Ingredients are required".to_owned());
        }

        let cooking_time = self.cooking_time.trim().parse::<i32>().ok();
        if !cooking_time.is_some_and(|minutes| minutes > 0) {
            errors.cooking_time = Some("Cooking time must be greater than 0".to_owned());
        }

        if self.difficulty.is_none() {
            errors.difficulty = Some("Please select a difficulty level".to_owned());
        }
        if self.category.is_none() {
            errors.category = Some("Category is required".to_owned());
        }

        let instructions: Vec<String> = self
            .instructions
            .iter()
            .map(|step| step.trim())
            .filter(|step| !step.is_empty())
            .map(str::to_owned)
            .collect();
        if instructions.is_empty() {
            errors.instructions = Some("At least one instruction is required".to_owned());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let image_url = self.image_url.trim();
        Ok(RecipePayload {
            user_id: None,
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ingredients: self.ingredients.trim().to_owned(),
            cooking_time: cooking_time.unwrap(),
            difficulty: vec![self.difficulty.unwrap().label().to_owned()],
            category: self.category.unwrap().label().to_owned(),
            instructions,
            image_url: (!image_url.is_empty()).then(|| image_url.to_owned()),
        })
    }
}

/// Dashboard filters. Category and mine-only are also pushed down into the
/// backend query; matching here keeps an already-loaded list consistent with
/// the active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub category: Option<Category>,
    pub search: String,
    pub mine_only: bool,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &RecipeSummary, current_user_id: Option<&str>) -> bool {
        if let Some(category) = self.category
            && recipe.category.as_deref() != Some(category.label())
        {
            return false;
        }

        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let title = recipe.title.as_deref().unwrap_or_default().to_lowercase();
            if !title.contains(&search) {
                return false;
            }
        }

        if self.mine_only && (current_user_id.is_none() || recipe.user_id.as_deref() != current_user_id) {
            return false;
        }

        true
    }
}

/// Rewrites Google Drive share links into directly loadable image URLs;
/// any other URL passes through untouched.
pub fn direct_image_url(url: &str) -> String {
    if let Some(rest) = url.split("drive.google.com/file/d/").nth(1)
        && let Some(id) = rest.split('/').next()
        && !id.is_empty()
    {
        return format!("https://drive.google.com/uc?export=view&id={id}");
    }
    url.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Shakshuka".to_owned(),
            description: "Eggs poached in tomato sauce".to_owned(),
            ingredients: "eggs, tomatoes, peppers".to_owned(),
            cooking_time: "30".to_owned(),
            difficulty: Some(Difficulty::Easy),
            category: Some(Category::Breakfast),
            instructions: vec!["Simmer the sauce".to_owned(), "Crack the eggs".to_owned()],
            image_url: String::new(),
        }
    }

    #[test]
    fn every_missing_required_field_is_reported() {
        let errors = RecipeDraft::default().validate().unwrap_err();
        assert!(errors.get(DraftField::Title).is_some());
        assert!(errors.get(DraftField::Description).is_some());
        assert!(errors.get(DraftField::Ingredients).is_some());
        assert!(errors.get(DraftField::CookingTime).is_some());
        assert!(errors.get(DraftField::Difficulty).is_some());
        assert!(errors.get(DraftField::Category).is_some());
        assert!(errors.get(DraftField::Instructions).is_some());
    }

    #[test]
    fn zero_cooking_time_is_rejected_with_a_field_error() {
        let mut draft = valid_draft();
        draft.cooking_time = "0".to_owned();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(DraftField::CookingTime),
            Some("Cooking time must be greater than 0")
        );
        assert!(errors.get(DraftField::Title).is_none());
    }

    #[test]
    fn non_numeric_cooking_time_is_rejected() {
        let mut draft = valid_draft();
        draft.cooking_time = "half an hour".to_owned();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn correcting_a_field_makes_revalidation_succeed() {
        let mut draft = valid_draft();
        draft.title = "   ".to_owned();
        assert!(draft.validate().is_err());

        draft.title = "Fixed".to_owned();
        let payload = draft.validate().expect("draft is now valid");
        assert_eq!(payload.title, "Fixed");
    }

    #[test]
    fn whitespace_only_instructions_are_dropped_preserving_order() {
        let mut draft = valid_draft();
        draft.instructions = vec![
            "  first ".to_owned(),
            "   ".to_owned(),
            String::new(),
            "second".to_owned(),
        ];
        let payload = draft.validate().unwrap();
        assert_eq!(payload.instructions, vec!["first", "second"]);
    }

    #[test]
    fn difficulty_is_written_as_a_single_element_array() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.difficulty, vec!["Easy"]);
        assert_eq!(payload.category, "Breakfast");
        assert!(payload.image_url.is_none());
    }

    #[test]
    fn draft_round_trips_from_a_persisted_recipe() {
        let recipe = Recipe {
            id: "r1".to_owned(),
            title: Some("Tiramisu".to_owned()),
            description: Some("Layered dessert".to_owned()),
            ingredients: Some("mascarpone".to_owned()),
            cooking_time: Some(45),
            difficulty: Some(vec!["Hard".to_owned()]),
            category: Some("Desserts".to_owned()),
            instructions: Some(vec!["Dip".to_owned(), "Layer".to_owned()]),
            ..Recipe::default()
        };

        let draft = RecipeDraft::from_recipe(&recipe);
        assert_eq!(draft.cooking_time, "45");
        assert_eq!(draft.difficulty, Some(Difficulty::Hard));
        assert_eq!(draft.category, Some(Category::Desserts));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn category_filter_keeps_only_matching_recipes() {
        let mut recipes: Vec<RecipeSummary> = (0..5)
            .map(|i| RecipeSummary {
                id: format!("main-{i}"),
                category: Some("Main".to_owned()),
                ..RecipeSummary::default()
            })
            .collect();
        recipes.extend((0..2).map(|i| RecipeSummary {
            id: format!("dessert-{i}"),
            category: Some("Desserts".to_owned()),
            ..RecipeSummary::default()
        }));

        let filter = RecipeFilter {
            category: Some(Category::Desserts),
            ..RecipeFilter::default()
        };
        let visible = recipes
            .iter()
            .filter(|recipe| filter.matches(recipe, None))
            .count();
        assert_eq!(visible, 2);
    }

    #[test]
    fn mine_only_requires_a_matching_owner() {
        let mine = RecipeSummary {
            id: "a".to_owned(),
            user_id: Some("me".to_owned()),
            ..RecipeSummary::default()
        };
        let theirs = RecipeSummary {
            id: "b".to_owned(),
            user_id: Some("them".to_owned()),
            ..RecipeSummary::default()
        };

        let filter = RecipeFilter {
            mine_only: true,
            ..RecipeFilter::default()
        };
        assert!(filter.matches(&mine, Some("me")));
        assert!(!filter.matches(&theirs, Some("me")));
        assert!(!filter.matches(&mine, None));
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let recipe = RecipeSummary {
            id: "a".to_owned(),
            title: Some("Garlic Butter Shrimp".to_owned()),
            ..RecipeSummary::default()
        };
        let filter = RecipeFilter {
            search: "shrimp".to_owned(),
            ..RecipeFilter::default()
        };
        assert!(filter.matches(&recipe, None));
    }

    #[test]
    fn drive_share_links_become_direct_urls() {
        assert_eq!(
            direct_image_url("https://drive.google.com/file/d/abc123/view?usp=sharing"),
            "https://drive.google.com/uc?export=view&id=abc123"
        );
        assert_eq!(
            direct_image_url("https://example.com/image.jpg"),
            "https://example.com/image.jpg"
        );
    }
}
