pub mod dialog_layer;
pub mod form_field;
pub mod recipe_card;
pub mod toast_stack;
