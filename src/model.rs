use std::fmt;

/// A single recipe record.
///
/// `name` is used as a case-insensitive lookup key but uniqueness is not
/// enforced; the first match in collection order wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image_path: String,
    pub video_path: String,
    /// Conventionally 0-5 but never validated; may be NaN after loading a
    /// record whose rating field was not numeric.
    pub rating: f64,
    pub review: String,
}

impl Recipe {
    /// Create an unrated recipe with an empty review.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        image_path: impl Into<String>,
        video_path: impl Into<String>,
    ) -> Self {
        Recipe {
            name: name.into(),
            category: category.into(),
            ingredients,
            steps,
            image_path: image_path.into(),
            video_path: video_path.into(),
            rating: 0.0,
            review: String::new(),
        }
    }

    pub(crate) fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub(crate) fn category_matches(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// True when the name or any ingredient contains `keyword`, ignoring case.
    pub(crate) fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&keyword))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Category: {})", self.name, self.category)
    }
}
