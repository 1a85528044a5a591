pub mod delete_saved_recipe;
pub mod get_saved_recipe_status;
pub mod get_saved_recipes;
pub mod save_recipe;
