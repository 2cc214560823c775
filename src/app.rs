use std::path::Path;

use log::info;

use crate::error::Result;
use crate::interaction::RecipesUserInteraction;
use crate::model::Recipe;
use crate::repository::RecipesRepository;
use crate::storage::TextStorage;

pub const NO_INGREDIENTS_MESSAGE: &str =
    "No ingredients have been suggested. Recipe will not be served.";

/// Shows the stored recipes, lets the user compose one more and saves it
pub struct CookieRecipesApp<'a, S, U> {
    repository: RecipesRepository<'a, S>,
    interaction: U,
}

impl<'a, S: TextStorage, U: RecipesUserInteraction> CookieRecipesApp<'a, S, U> {
    pub fn new(repository: RecipesRepository<'a, S>, interaction: U) -> Self {
        Self {
            repository,
            interaction,
        }
    }

    /// Run one session against the recipes file at `path`.
    ///
    /// Returns the recipe that was added, or `None` when the user picked no
    /// ingredients, in which case nothing is written.
    pub fn run(&mut self, path: &Path) -> Result<Option<Recipe>> {
        let mut recipes = self.repository.read(path)?;
        self.interaction.print_existing_recipes(&recipes)?;

        self.interaction.prompt_user_to_create_recipe()?;
        let ingredients = self.interaction.read_ingredients_from_user()?;

        let added = if ingredients.is_empty() {
            self.interaction.show_message(NO_INGREDIENTS_MESSAGE)?;
            None
        } else {
            let recipe = Recipe::new(ingredients);
            recipes.push(recipe.clone());
            self.repository.write(path, &recipes)?;
            info!("Added recipe #{} to {}", recipes.len(), path.display());

            self.interaction.show_message("Recipe added:")?;
            self.interaction.show_message(&recipe.to_string())?;
            Some(recipe)
        };

        self.interaction.exit()?;
        Ok(added)
    }

    /// Hand back the interaction layer once the session is over
    pub fn into_interaction(self) -> U {
        self.interaction
    }
}
