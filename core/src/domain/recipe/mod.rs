pub mod entities;
pub mod helpers;
pub mod ports;
pub mod query;
pub mod schema;
pub mod services;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

/// Name of the single durable slot holding the saved recipe collection.
pub const SAVED_RECIPES_KEY: &str = "pantryChefSavedRecipes";
