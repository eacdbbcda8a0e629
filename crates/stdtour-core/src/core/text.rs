use crate::error::TextError;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Extract every maximal run of digits, left to right, verbatim
///
/// # Examples
/// ```
/// use stdtour_core::core::text::find_numbers;
/// assert_eq!(find_numbers("Room 007, floor 12"), vec!["007", "12"]);
/// ```
pub fn find_numbers(text: &str) -> Vec<String> {
    DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Same as [`find_numbers`] for raw input that may not be text
pub fn find_numbers_in_bytes(input: &[u8]) -> Result<Vec<String>, TextError> {
    let text = std::str::from_utf8(input).map_err(|e| TextError::NotText {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(find_numbers(text))
}
