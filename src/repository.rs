use std::path::Path;

use log::debug;

use crate::codec;
use crate::error::Result;
use crate::ingredients::Catalog;
use crate::model::Recipe;
use crate::storage::TextStorage;

/// Loads and saves the full recipe list through a [`TextStorage`]
pub struct RecipesRepository<'a, S> {
    storage: S,
    catalog: &'a Catalog,
}

impl<'a, S: TextStorage> RecipesRepository<'a, S> {
    pub fn new(storage: S, catalog: &'a Catalog) -> Self {
        Self { storage, catalog }
    }

    pub fn read(&self, path: &Path) -> Result<Vec<Recipe>> {
        let lines = self.storage.read(path)?;
        let recipes = codec::decode_all(&lines, self.catalog)?;
        debug!("Loaded {} recipes from {}", recipes.len(), path.display());
        Ok(recipes)
    }

    /// Save `recipes`, leaving out any that have no ingredients
    pub fn write(&self, path: &Path, recipes: &[Recipe]) -> Result<()> {
        let kept: Vec<Recipe> = recipes.iter().filter(|r| !r.is_empty()).cloned().collect();
        if kept.len() < recipes.len() {
            debug!("Dropping {} empty recipes", recipes.len() - kept.len());
        }
        self.storage.write(path, &codec::encode_all(&kept))
    }
}
