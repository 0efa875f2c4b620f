use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::codec::{DelimitedCodec, RecordCodec};
use crate::error::RecipeError;
use crate::model::Recipe;

/// Owns the recipe collection and keeps its backing file in sync.
///
/// Every mutation rewrites the whole file. The write is not atomic, and when
/// it fails the in-memory change is kept.
#[derive(Debug)]
pub struct RecipeStore<C: RecordCodec = DelimitedCodec> {
    path: PathBuf,
    codec: C,
    recipes: Vec<Recipe>,
}

impl RecipeStore<DelimitedCodec> {
    /// Open the store at `path` using the `recipes.txt` line format.
    ///
    /// A missing file yields an empty store; the file is only created by the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RecipeError> {
        Self::open_with_codec(path, DelimitedCodec)
    }
}

impl<C: RecordCodec> RecipeStore<C> {
    /// Open the store at `path`, decoding each line with `codec`.
    ///
    /// # Errors
    /// Returns `RecipeError::MalformedRecord` naming the first line that
    /// fails to decode, or `RecipeError::IoError` if the file exists but cannot
    /// be read.
    pub fn open_with_codec(path: impl Into<PathBuf>, codec: C) -> Result<Self, RecipeError> {
        let path = path.into();
        let recipes = if path.exists() {
            let data = fs::read_to_string(&path)?;
            load_lines(&codec, &data)?
        } else {
            debug!("{} does not exist, starting empty", path.display());
            Vec::new()
        };
        debug!("Loaded {} recipes from {}", recipes.len(), path.display());

        Ok(RecipeStore {
            path,
            codec,
            recipes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name_matches(name))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.name_matches(name))
    }

    /// Append a recipe. Duplicate names are allowed.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), RecipeError> {
        info!("Adding recipe '{}'", recipe.name);
        self.recipes.push(recipe);
        self.persist()
    }

    /// Remove the first recipe named `name`, returning it.
    pub fn delete(&mut self, name: &str) -> Result<Option<Recipe>, RecipeError> {
        let Some(index) = self.position(name) else {
            warn!("Cannot delete '{}': recipe not found", name);
            return Ok(None);
        };
        let removed = self.recipes.remove(index);
        info!("Deleted recipe '{}'", removed.name);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Replace the first recipe named `name` in place, returning the old one.
    pub fn edit(&mut self, name: &str, recipe: Recipe) -> Result<Option<Recipe>, RecipeError> {
        let Some(index) = self.position(name) else {
            warn!("Cannot edit '{}': recipe not found", name);
            return Ok(None);
        };
        let previous = std::mem::replace(&mut self.recipes[index], recipe);
        info!("Edited recipe '{}' at position {}", previous.name, index);
        self.persist()?;
        Ok(Some(previous))
    }

    /// Recipes in `category` (case-insensitive), in collection order.
    pub fn view_by_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category_matches(category))
            .collect()
    }

    /// Recipes whose name or any ingredient contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.mentions(keyword)).collect()
    }

    /// Overwrite rating and review of the first recipe named `name`.
    pub fn rate_and_review(
        &mut self,
        name: &str,
        rating: f64,
        review: impl Into<String>,
    ) -> Result<Option<&Recipe>, RecipeError> {
        let Some(index) = self.position(name) else {
            warn!("Cannot rate '{}': recipe not found", name);
            return Ok(None);
        };
        let recipe = &mut self.recipes[index];
        recipe.rating = rating;
        recipe.review = review.into();
        info!("Rated recipe '{}' with {}", recipe.name, rating);
        self.persist()?;
        Ok(Some(&self.recipes[index]))
    }

    /// Look up a recipe for presentation. Nothing is transmitted.
    pub fn share(&self, name: &str) -> Option<&Recipe> {
        let found = self.find(name);
        if found.is_none() {
            warn!("Cannot share '{}': recipe not found", name);
        }
        found
    }

    /// Rewrite the backing file with the whole collection.
    pub fn persist(&self) -> Result<(), RecipeError> {
        let data = self
            .recipes
            .iter()
            .map(|r| self.codec.encode(r))
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.path, data)?;
        debug!(
            "Wrote {} recipes to {}",
            self.recipes.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn load_lines<C: RecordCodec>(codec: &C, data: &str) -> Result<Vec<Recipe>, RecipeError> {
    let mut recipes = Vec::new();
    for (index, line) in data.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let recipe = codec.decode(line).map_err(|e| e.at_line(index + 1))?;
        recipes.push(recipe);
    }
    Ok(recipes)
}
