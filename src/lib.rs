//! A single-user recipe manager persisted to a flat delimited text file.
//!
//! # Example
//! ```no_run
//! use recipe_box::{Recipe, RecipeStore};
//!
//! # fn main() -> Result<(), recipe_box::RecipeError> {
//! let mut store = RecipeStore::open("recipes.txt")?;
//! store.add(Recipe::new(
//!     "Soup",
//!     "Starter",
//!     vec!["Water".to_string(), "Salt".to_string()],
//!     vec!["Boil".to_string(), "Serve".to_string()],
//!     "",
//!     "",
//! ))?;
//! for recipe in store.search("salt") {
//!     println!("{}", recipe);
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

pub use codec::{DelimitedCodec, RecordCodec};
pub use config::AppConfig;
pub use error::RecipeError;
pub use model::Recipe;
pub use session::{Command, Session};
pub use store::RecipeStore;

/// Open the store named by `config`.
pub fn open_store(config: &AppConfig) -> Result<RecipeStore, RecipeError> {
    RecipeStore::open(config.data_file.clone())
}
