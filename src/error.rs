use thiserror::Error;

/// Errors that can occur while loading, saving or configuring the recipe store
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A line of the backing file could not be decoded into a recipe.
    ///
    /// `line` is the 1-based position in the backing file, or 0 when the
    /// record was decoded outside of a file.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The backing file could not be read or written
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl RecipeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RecipeError::MalformedRecord {
            line: 0,
            reason: reason.into(),
        }
    }

    /// Attach the backing-file line number to a decode failure.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            RecipeError::MalformedRecord { reason, .. } => {
                RecipeError::MalformedRecord { line, reason }
            }
            other => other,
        }
    }
}
