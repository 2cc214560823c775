//! A console cookbook for cookie recipes.
//!
//! Recipes are ordered lists of ingredients from a fixed [`Catalog`] and are
//! stored one per line as comma-separated ingredient ids.
//!
//! Note the asymmetry when reading stored recipes: an id that is not in the
//! catalog is silently dropped from its recipe, while a token that is not a
//! number at all aborts with [`RecipeError::MalformedLine`].

pub mod app;
pub mod codec;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod interaction;
pub mod model;
pub mod repository;
pub mod storage;

pub use app::CookieRecipesApp;
pub use crate::config::AppConfig;
pub use error::{RecipeError, Result};
pub use ingredients::{render_instructions, Catalog, Ingredient, IngredientKind};
pub use interaction::{ConsoleInteraction, RecipesUserInteraction};
pub use model::Recipe;
pub use repository::RecipesRepository;
pub use storage::{FileStorage, TextStorage};
