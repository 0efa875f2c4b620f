use crate::codec::RecordCodec;
use crate::error::RecipeError;
use crate::model::Recipe;

const FIELD_DELIMITER: char = '|';
const LIST_DELIMITER: char = ',';
const FIELD_COUNT: usize = 8;

/// The `recipes.txt` layout:
///
/// ```text
/// name|category|ingredient,ingredient|step,step|image|video|rating|review
/// ```
///
/// Nothing is escaped. A field containing `|`, a list entry containing `,`
/// or any value containing a newline will not survive a reload.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedCodec;

impl RecordCodec for DelimitedCodec {
    fn encode(&self, recipe: &Recipe) -> String {
        let rating = format_rating(recipe.rating);
        let ingredients = recipe.ingredients.join(",");
        let steps = recipe.steps.join(",");
        let fields: [&str; FIELD_COUNT] = [
            &recipe.name,
            &recipe.category,
            &ingredients,
            &steps,
            &recipe.image_path,
            &recipe.video_path,
            &rating,
            &recipe.review,
        ];
        fields.join("|")
    }

    fn decode(&self, line: &str) -> Result<Recipe, RecipeError> {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() < FIELD_COUNT {
            return Err(RecipeError::malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                parts.len()
            )));
        }
        // Anything past the review field is ignored.
        Ok(Recipe {
            name: parts[0].to_string(),
            category: parts[1].to_string(),
            ingredients: split_list(parts[2]),
            steps: split_list(parts[3]),
            image_path: parts[4].to_string(),
            video_path: parts[5].to_string(),
            rating: parse_rating(parts[6]),
            review: parts[7].to_string(),
        })
    }
}

fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(LIST_DELIMITER).map(str::to_string).collect()
}

fn format_rating(rating: f64) -> String {
    if rating == f64::INFINITY {
        "Infinity".to_string()
    } else if rating == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        rating.to_string()
    }
}

/// Parse a rating leniently.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"4.5 stars"` reads as 4.5 and `"4,5"` as 4. Only text with no numeric
/// prefix at all becomes NaN.
pub fn parse_rating(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts when it has digits: "1e" reads as 1.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
