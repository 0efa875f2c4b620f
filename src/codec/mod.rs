use crate::error::RecipeError;
use crate::model::Recipe;

mod delimited;

pub use self::delimited::{parse_rating, DelimitedCodec};

/// Line-oriented serialization of a single recipe.
///
/// Implementations must not emit newlines; the store joins encoded records
/// with `\n`.
pub trait RecordCodec {
    fn encode(&self, recipe: &Recipe) -> String;
    fn decode(&self, line: &str) -> Result<Recipe, RecipeError>;
}
