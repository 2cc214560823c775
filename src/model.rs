use std::fmt;

use crate::ingredients::Ingredient;

/// An ordered list of ingredients; repeats are allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.ingredients.iter().map(|i| i.id()).collect()
    }
}

impl fmt::Display for Recipe {
    /// One line per ingredient: its name followed by how to prepare it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self
            .ingredients
            .iter()
            .map(|i| format!("{}. {}", i.name(), i.preparation_instructions()))
            .collect();
        write!(f, "{}", steps.join("\n"))
    }
}
