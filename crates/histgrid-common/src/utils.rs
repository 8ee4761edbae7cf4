//! Text helpers shared by the renderer and the command line.

use crate::{HistGridError, Result};

/// Title-case a string: the first letter of every alphabetic run is
/// upper-cased and the remaining letters of the run are lower-cased.
/// Any non-alphabetic character (digits, `_`, spaces) ends a run.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Human-readable axis title for a column name (`unif_size` -> `Unif Size`).
pub fn column_display_name(column: &str) -> String {
    title_case(column).replace('_', " ")
}

/// Validate that a string is not empty after trimming
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(HistGridError::validation_field(
            format!("{field_name} cannot be empty"),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
