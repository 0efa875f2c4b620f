//! Numbered-menu front end over a [`RecipeStore`].
//!
//! The session only prompts, collects text and prints outcomes; every
//! decision is made by the store.

use std::io::{self, BufRead, Write};

use log::{debug, error};

use crate::codec::{parse_rating, RecordCodec};
use crate::error::RecipeError;
use crate::model::Recipe;
use crate::store::RecipeStore;

const MENU: &str = "\nRecipe App
1. Add Recipe
2. Edit Recipe
3. Delete Recipe
4. View Recipes by Category
5. Search Recipes
6. Rate and Review Recipe
7. Share Recipe
8. Exit";

const NOT_FOUND: &str = "Recipe not found.";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit,
    Delete,
    ViewByCategory,
    Search,
    RateAndReview,
    Share,
    Exit,
}

impl Command {
    /// Parse a menu choice such as `"3"`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::Add),
            "2" => Some(Command::Edit),
            "3" => Some(Command::Delete),
            "4" => Some(Command::ViewByCategory),
            "5" => Some(Command::Search),
            "6" => Some(Command::RateAndReview),
            "7" => Some(Command::Share),
            "8" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Split comma separated input into trimmed, non-empty entries.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Session<'a, C: RecordCodec, R, W> {
    store: &'a mut RecipeStore<C>,
    input: R,
    output: W,
}

impl<'a, C: RecordCodec, R: BufRead, W: Write> Session<'a, C, R, W> {
    pub fn new(store: &'a mut RecipeStore<C>, input: R, output: W) -> Self {
        Session {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.ask("Choose an option: ")? else {
                debug!("Input closed, leaving session");
                return Ok(());
            };
            match Command::from_choice(&choice) {
                Some(Command::Exit) => return Ok(()),
                Some(command) => {
                    if !self.dispatch(command)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    /// Execute one command. Returns `false` when input ran out mid-command.
    fn dispatch(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Add => {
                let Some(recipe) = self.read_recipe()? else {
                    return Ok(false);
                };
                let result = self.store.add(recipe);
                self.report(result.map(|()| Some(())), "Recipe added successfully.")?;
            }
            Command::Edit => {
                let Some(name) = self.ask("Enter the name of the recipe to edit: ")? else {
                    return Ok(false);
                };
                let Some(recipe) = self.read_recipe()? else {
                    return Ok(false);
                };
                let result = self.store.edit(&name, recipe);
                self.report(result, "Recipe edited successfully.")?;
            }
            Command::Delete => {
                let Some(name) = self.ask("Enter the name of the recipe to delete: ")? else {
                    return Ok(false);
                };
                let result = self.store.delete(&name);
                self.report(result, "Recipe deleted successfully.")?;
            }
            Command::ViewByCategory => {
                let Some(category) = self.ask("Enter the category: ")? else {
                    return Ok(false);
                };
                writeln!(self.output, "Recipes under category '{}':", category)?;
                let found = self.store.view_by_category(&category);
                if found.is_empty() {
                    writeln!(self.output, "No recipes found in this category.")?;
                }
                for recipe in found {
                    writeln!(self.output, "{}", recipe)?;
                }
            }
            Command::Search => {
                let Some(keyword) = self.ask("Enter the keyword to search: ")? else {
                    return Ok(false);
                };
                writeln!(self.output, "Search results for '{}':", keyword)?;
                let found = self.store.search(&keyword);
                if found.is_empty() {
                    writeln!(self.output, "No recipes found.")?;
                }
                for recipe in found {
                    writeln!(self.output, "{}", recipe)?;
                }
            }
            Command::RateAndReview => {
                let Some(name) = self.ask("Enter the name of the recipe to rate and review: ")?
                else {
                    return Ok(false);
                };
                let Some(rating) = self.ask("Enter your rating (0-5): ")? else {
                    return Ok(false);
                };
                let Some(review) = self.ask("Enter your review: ")? else {
                    return Ok(false);
                };
                let result = self
                    .store
                    .rate_and_review(&name, parse_rating(&rating), review)
                    .map(|updated| updated.map(|_| ()));
                self.report(result, "Rating and review updated.")?;
            }
            Command::Share => {
                let Some(name) = self.ask("Enter the name of the recipe to share: ")? else {
                    return Ok(false);
                };
                match self.store.share(&name) {
                    Some(recipe) => {
                        writeln!(self.output, "Sharing recipe:")?;
                        writeln!(self.output, "{}", recipe)?;
                    }
                    None => writeln!(self.output, "{}", NOT_FOUND)?,
                }
            }
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Print the outcome of a mutation. Persist failures are reported and
    /// the session carries on.
    fn report<T>(
        &mut self,
        result: Result<Option<T>, RecipeError>,
        success: &str,
    ) -> io::Result<()> {
        match result {
            Ok(Some(_)) => writeln!(self.output, "{}", success),
            Ok(None) => writeln!(self.output, "{}", NOT_FOUND),
            Err(e) => {
                error!("Failed to save recipes: {}", e);
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    fn read_recipe(&mut self) -> io::Result<Option<Recipe>> {
        let Some(name) = self.ask("Enter the name of the recipe: ")? else {
            return Ok(None);
        };
        let Some(category) = self.ask("Enter the category of the recipe: ")? else {
            return Ok(None);
        };
        let Some(ingredients) = self.ask("Enter the ingredients (comma separated): ")? else {
            return Ok(None);
        };
        let Some(steps) = self.ask("Enter the steps (comma separated): ")? else {
            return Ok(None);
        };
        let Some(image_path) = self.ask("Enter the path to the image: ")? else {
            return Ok(None);
        };
        let Some(video_path) = self.ask("Enter the path to the video: ")? else {
            return Ok(None);
        };
        Ok(Some(Recipe::new(
            name,
            category,
            parse_list(&ingredients),
            parse_list(&steps),
            image_path,
            video_path,
        )))
    }

    /// Prompt and read one line without its line ending. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}
