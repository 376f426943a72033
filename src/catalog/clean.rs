use regex::Regex;
use std::sync::LazyLock;

/// Quantities, measurement units, connector words and stray symbols.
/// Words only match whole; units also match their plural.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+|\b(?:(?:tsp|tbsp|oz|g|kg|lbs|cm|inch|cup|tablespoon|teaspoon|pound|grams|milliliter|liter|serving)s?|to|and|from|by)\b|[()+\-]",
    )
    .expect("noise pattern is valid")
});

/// Normalize ingredient name (trim, lowercase)
pub fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Reduce a raw ingredient name to the key used for duplicate detection.
///
/// The key is never displayed: `"2 tbsp Butter"` and `"butter"` both clean to
/// `"butter"`.
///
/// Unit and connector words are stripped as whole words, never as
/// substrings, so `"garlic"` keeps its `g` and `"tomatoes"` keeps its `to`.
pub fn clean_ingredient_name(name: &str) -> String {
    let normalized = normalize_ingredient(name);
    NOISE.replace_all(&normalized, "").trim().to_string()
}
