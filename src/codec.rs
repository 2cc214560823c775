//! Text form of recipes: one line per recipe, ingredient ids separated by commas.
//!
//! Ids that are not in the catalog are dropped while decoding, but a token
//! that is not an integer at all fails the whole decode.

use log::debug;

use crate::error::{RecipeError, Result};
use crate::ingredients::Catalog;
use crate::model::Recipe;

pub const SEPARATOR: &str = ",";

pub fn encode(recipe: &Recipe) -> String {
    recipe
        .ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn decode(line: &str, catalog: &Catalog) -> Result<Recipe> {
    let mut ingredients = Vec::new();

    for token in line.split(SEPARATOR) {
        let id: i32 = token
            .trim()
            .parse()
            .map_err(|source| RecipeError::MalformedLine {
                line: line.to_string(),
                token: token.to_string(),
                source,
            })?;

        match catalog.get_by_id(id) {
            Some(ingredient) => ingredients.push(ingredient),
            None => debug!("Skipping unknown ingredient id {} in {:?}", id, line),
        }
    }

    Ok(Recipe::new(ingredients))
}

pub fn encode_all(recipes: &[Recipe]) -> Vec<String> {
    recipes.iter().map(encode).collect()
}

/// Decode every non-empty line into a recipe, stopping at the first malformed one
pub fn decode_all<S: AsRef<str>>(lines: &[S], catalog: &Catalog) -> Result<Vec<Recipe>> {
    let mut recipes = Vec::new();
    for line in lines {
        let line: &str = line.as_ref();
        if line.is_empty() {
            continue;
        }
        recipes.push(decode(line, catalog)?);
    }
    Ok(recipes)
}
