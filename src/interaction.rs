use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::Result;
use crate::ingredients::{Catalog, Ingredient};
use crate::model::Recipe;

/// Everything the app needs from the person at the terminal
pub trait RecipesUserInteraction {
    fn show_message(&mut self, message: &str) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn print_existing_recipes(&mut self, recipes: &[Recipe]) -> Result<()>;
    fn prompt_user_to_create_recipe(&mut self) -> Result<()>;
    fn read_ingredients_from_user(&mut self) -> Result<Vec<Ingredient>>;
}

/// Line-oriented console over any reader/writer pair
pub struct ConsoleInteraction<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
    pause_on_exit: bool,
}

impl<'a> ConsoleInteraction<'a, StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio(catalog: &'a Catalog, pause_on_exit: bool) -> Self {
        Self::new(catalog, io::stdin().lock(), io::stdout(), pause_on_exit)
    }
}

impl<'a, R: BufRead, W: Write> ConsoleInteraction<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W, pause_on_exit: bool) -> Self {
        Self {
            catalog,
            input,
            output,
            pause_on_exit,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> RecipesUserInteraction for ConsoleInteraction<'_, R, W> {
    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        if !self.pause_on_exit {
            return Ok(());
        }
        writeln!(self.output, "Press any key to close.")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn print_existing_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        if recipes.is_empty() {
            return Ok(());
        }

        writeln!(self.output, "Existing recipes are:")?;
        writeln!(self.output)?;
        for (index, recipe) in recipes.iter().enumerate() {
            writeln!(self.output, "*****{}*****", index + 1)?;
            writeln!(self.output, "{}", recipe)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn prompt_user_to_create_recipe(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Create a new cookie recipe! Available ingredients are:"
        )?;
        for ingredient in self.catalog.all() {
            writeln!(
                self.output,
                "{}. {}",
                ingredient,
                ingredient.preparation_instructions()
            )?;
        }
        Ok(())
    }

    /// Collect ingredients until the user types something that is not a number.
    ///
    /// Numbers that match no ingredient are ignored and prompting continues.
    fn read_ingredients_from_user(&mut self) -> Result<Vec<Ingredient>> {
        let mut ingredients = Vec::new();

        loop {
            writeln!(
                self.output,
                "Add an ingredient by its ID, or type anything else if finished."
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Ok(id) = line.trim().parse::<i32>() else {
                break;
            };
            if let Some(ingredient) = self.catalog.get_by_id(id) {
                ingredients.push(ingredient);
            }
        }

        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole<'a> = ConsoleInteraction<'a, Cursor<Vec<u8>>, Vec<u8>>;

    fn console<'a>(catalog: &'a Catalog, input: &str) -> TestConsole<'a> {
        ConsoleInteraction::new(
            catalog,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            true,
        )
    }

    fn printed(console: TestConsole<'_>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn ids(ingredients: &[Ingredient]) -> Vec<i32> {
        ingredients.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_read_stops_at_non_numeric() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "3\n4\ndone\n5\n");
        let ingredients = console.read_ingredients_from_user().unwrap();
        assert_eq!(ids(&ingredients), vec![3, 4]);
    }

    #[test]
    fn test_read_skips_unknown_ids() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "3\n999\n4\ndone\n");
        let ingredients = console.read_ingredients_from_user().unwrap();
        assert_eq!(ids(&ingredients), vec![3, 4]);
    }

    #[test]
    fn test_read_nothing() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "done\n");
        assert!(console.read_ingredients_from_user().unwrap().is_empty());
    }

    #[test]
    fn test_read_stops_at_end_of_input() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "7\n 2 ");
        let ingredients = console.read_ingredients_from_user().unwrap();
        assert_eq!(ids(&ingredients), vec![7, 2]);
    }

    #[test]
    fn test_read_prompts_before_every_line() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "1\nq\n");
        console.read_ingredients_from_user().unwrap();
        let output = printed(console);
        assert_eq!(output.matches("Add an ingredient by its ID").count(), 2);
    }

    #[test]
    fn test_print_existing_recipes_numbers_from_one() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "");
        let recipes = vec![
            Recipe::new(vec![Ingredient::Sugar]),
            Recipe::new(vec![Ingredient::Butter]),
        ];
        console.print_existing_recipes(&recipes).unwrap();

        let output = printed(console);
        assert!(output.starts_with("Existing recipes are:\n\n*****1*****\n"));
        assert!(output.contains("*****2*****\nButter. Melt on low heat."));
    }

    #[test]
    fn test_print_existing_recipes_empty_prints_nothing() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "");
        console.print_existing_recipes(&[]).unwrap();
        assert!(printed(console).is_empty());
    }

    #[test]
    fn test_prompt_lists_catalog() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "");
        console.prompt_user_to_create_recipe().unwrap();

        let output = printed(console);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + catalog.all().len());
        assert_eq!(lines[1], "1. Wheat flour. Sieve. Add to other ingredients.");
        assert_eq!(
            lines[6],
            "6. Cardamom. Take half a teaspoon. Add to other ingredients."
        );
    }

    #[test]
    fn test_exit_without_pause_is_silent() {
        let catalog = Catalog::new();
        let mut console =
            ConsoleInteraction::new(&catalog, Cursor::new(Vec::new()), Vec::new(), false);
        console.exit().unwrap();
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_exit_with_pause_consumes_a_line() {
        let catalog = Catalog::new();
        let mut console = console(&catalog, "\n");
        console.exit().unwrap();
        assert_eq!(printed(console), "Press any key to close.\n");
    }
}
