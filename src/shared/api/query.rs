// src/shared/api/query.rs
use serde::{de, Deserialize, Deserializer};

/// Parses the loose boolean spellings browsers and scripts put in query
/// strings.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

/// `deserialize_with` helper for `Option<bool>` query parameters.
/// Use together with `#[serde(default)]` so an absent key stays `None`.
pub fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(value) => parse_flag(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{value}` is not a valid boolean"))),
    }
}

/// Empty query values (`?category=`) behave like absent ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
