use std::fmt;

/// Instruction fragment every ingredient finishes with
const ADD_TO_OTHERS: &str = "Add to other ingredients.";
/// Fragment prepended to every spice
const SPICE_PREFIX: &str = "Take half a teaspoon.";

/// Broad family an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientKind {
    Flour,
    Fat,
    Flavoring,
    Spice,
}

/// Every ingredient a cookie recipe can be made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    WheatFlour,
    CoconutFlour,
    Butter,
    Chocolate,
    Sugar,
    Cardamom,
    Cinnamon,
    CocoaPowder,
}

impl Ingredient {
    /// Stable identifier used in the recipes file
    pub const fn id(self) -> i32 {
        match self {
            Ingredient::WheatFlour => 1,
            Ingredient::CoconutFlour => 2,
            Ingredient::Butter => 3,
            Ingredient::Chocolate => 4,
            Ingredient::Sugar => 5,
            Ingredient::Cardamom => 6,
            Ingredient::Cinnamon => 7,
            Ingredient::CocoaPowder => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Ingredient::WheatFlour => "Wheat flour",
            Ingredient::CoconutFlour => "Coconut flour",
            Ingredient::Butter => "Butter",
            Ingredient::Chocolate => "Chocolate",
            Ingredient::Sugar => "Sugar",
            Ingredient::Cardamom => "Cardamom",
            Ingredient::Cinnamon => "Cinnamon",
            Ingredient::CocoaPowder => "Cocoa powder",
        }
    }

    pub const fn kind(self) -> IngredientKind {
        match self {
            Ingredient::WheatFlour | Ingredient::CoconutFlour => IngredientKind::Flour,
            Ingredient::Butter => IngredientKind::Fat,
            Ingredient::Chocolate | Ingredient::Sugar | Ingredient::CocoaPowder => {
                IngredientKind::Flavoring
            }
            Ingredient::Cardamom | Ingredient::Cinnamon => IngredientKind::Spice,
        }
    }

    /// Instruction specific to this ingredient, if it has one
    const fn own_instruction(self) -> Option<&'static str> {
        match self {
            Ingredient::WheatFlour | Ingredient::CoconutFlour => Some("Sieve."),
            Ingredient::Butter => Some("Melt on low heat."),
            Ingredient::Chocolate => Some("Melt in a water bath."),
            _ => None,
        }
    }

    /// How to prepare this ingredient, see [`render_instructions`]
    pub fn preparation_instructions(self) -> String {
        render_instructions(self)
    }
}

/// Compose the preparation instructions of an ingredient.
///
/// Spices get the shared spice prefix, then comes the ingredient's own
/// fragment, and everything ends with [`ADD_TO_OTHERS`].
pub fn render_instructions(ingredient: Ingredient) -> String {
    let mut fragments = Vec::with_capacity(3);
    if ingredient.kind() == IngredientKind::Spice {
        fragments.push(SPICE_PREFIX);
    }
    if let Some(own) = ingredient.own_instruction() {
        fragments.push(own);
    }
    fragments.push(ADD_TO_OTHERS);
    fragments.join(" ")
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id(), self.name())
    }
}

/// The fixed set of known ingredients with lookup by id.
///
/// Built once at startup and handed by reference to whatever needs lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            ingredients: vec![
                Ingredient::WheatFlour,
                Ingredient::CoconutFlour,
                Ingredient::Butter,
                Ingredient::Chocolate,
                Ingredient::Sugar,
                Ingredient::Cardamom,
                Ingredient::Cinnamon,
                Ingredient::CocoaPowder,
            ],
        }
    }

    /// All ingredients in definition order
    pub fn all(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn get_by_id(&self, id: i32) -> Option<Ingredient> {
        self.ingredients.iter().copied().find(|i| i.id() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::new();
        let ids: HashSet<i32> = catalog.all().iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn test_all_keeps_definition_order() {
        let ids: Vec<i32> = Catalog::new().all().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new();
        assert_eq!(catalog.get_by_id(3), Some(Ingredient::Butter));
        assert_eq!(catalog.get_by_id(8), Some(Ingredient::CocoaPowder));
        assert_eq!(catalog.get_by_id(0), None);
        assert_eq!(catalog.get_by_id(999), None);
        assert_eq!(catalog.get_by_id(-1), None);
    }

    #[test]
    fn test_render_instructions() {
        assert_eq!(
            render_instructions(Ingredient::WheatFlour),
            "Sieve. Add to other ingredients."
        );
        assert_eq!(
            render_instructions(Ingredient::Butter),
            "Melt on low heat. Add to other ingredients."
        );
        assert_eq!(
            render_instructions(Ingredient::Sugar),
            "Add to other ingredients."
        );
    }

    #[test]
    fn test_spices_share_prefix() {
        for spice in [Ingredient::Cardamom, Ingredient::Cinnamon] {
            assert_eq!(
                spice.preparation_instructions(),
                "Take half a teaspoon. Add to other ingredients."
            );
        }
    }

    #[test]
    fn test_display_shows_id_and_name() {
        assert_eq!(Ingredient::CocoaPowder.to_string(), "8. Cocoa powder");
    }
}
