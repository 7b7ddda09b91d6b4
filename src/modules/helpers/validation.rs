use inflections::case::to_title_case;

use crate::errors::ValidationError;

/// strip surrounding whitespace and title-case a make or model name
pub fn normalize_name(raw: &str) -> String {
    to_title_case(raw.trim())
}

/// ratings are whole stars from 1 to 5
pub fn validate_rating(value: i32) -> Result<i32, ValidationError> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::new("Rating value should be between 1-5"));
    }

    Ok(value)
}
