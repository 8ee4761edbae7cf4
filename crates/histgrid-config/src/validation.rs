//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters (C:\)
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

/// Validate the class color pair: exactly two hex colors.
#[allow(clippy::ptr_arg)]
pub fn validate_class_colors(colors: &Vec<String>) -> Result<(), ValidationError> {
    if colors.len() != 2 {
        return Err(ValidationError::new("class_colors_must_be_a_pair"));
    }
    if colors.iter().all(|c| HEX_COLOR_REGEX.is_match(c)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_class_color"))
    }
}
