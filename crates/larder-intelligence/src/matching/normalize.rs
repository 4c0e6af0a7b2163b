// ABOUTME: Ingredient string normalization and the pairwise ingredient match predicate
// ABOUTME: Reduces free-text ingredient lines to a comparable canonical form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Reduce an ingredient line to its canonical form
///
/// Lower-cases the line, collapses whitespace runs to a single space, trims,
/// and keeps only the text before the first comma. The result is trimmed
/// again so the function is idempotent.
///
/// # Examples
///
/// ```
/// use larder_intelligence::matching::normalize_ingredient;
///
/// assert_eq!(normalize_ingredient("  Tomatoes,  chopped "), "tomatoes");
/// assert_eq!(normalize_ingredient("Cherry\t\tTomato"), "cherry tomato");
/// assert_eq!(normalize_ingredient("   "), "");
/// ```
#[must_use]
pub fn normalize_ingredient(ingredient: &str) -> String {
    let collapsed = ingredient
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    match collapsed.split_once(',') {
        Some((head, _descriptor)) => head.trim_end().to_owned(),
        None => collapsed,
    }
}

/// Whether an owned ingredient satisfies a recipe ingredient
///
/// True when the normalized strings are equal or one contains the other.
/// The predicate is symmetric. An empty normalized string is contained in
/// every string, so a blank line on either side matches anything.
///
/// # Examples
///
/// ```
/// use larder_intelligence::matching::ingredients_match;
///
/// assert!(ingredients_match("tomato", "Cherry Tomato, halved"));
/// assert!(ingredients_match("Cherry Tomato", "tomato"));
/// assert!(!ingredients_match("basil", "pasta"));
/// ```
#[must_use]
pub fn ingredients_match(owned_ingredient: &str, recipe_ingredient: &str) -> bool {
    normalized_match(
        &normalize_ingredient(owned_ingredient),
        &normalize_ingredient(recipe_ingredient),
    )
}

/// Pairwise predicate over already-normalized strings
pub(crate) fn normalized_match(owned: &str, recipe: &str) -> bool {
    owned == recipe || owned.contains(recipe) || recipe.contains(owned)
}

/// Normalize every owned ingredient once per call
pub(crate) fn normalize_all<S: AsRef<str>>(owned: &[S]) -> Vec<String> {
    owned
        .iter()
        .map(|ingredient| normalize_ingredient(ingredient.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_descriptor_is_dropped() {
        assert_eq!(normalize_ingredient("Onion, finely diced, about 1 cup"), "onion");
    }

    #[test]
    fn test_space_before_comma_does_not_survive() {
        assert_eq!(normalize_ingredient("garlic , minced"), "garlic");
    }

    #[test]
    fn test_leading_comma_yields_empty() {
        assert_eq!(normalize_ingredient(", to taste"), "");
    }

    #[test]
    fn test_normalized_match_substring_either_way() {
        assert!(normalized_match("lime", "limestone"));
        assert!(normalized_match("limestone", "lime"));
        assert!(!normalized_match("lemon", "lime"));
    }
}
