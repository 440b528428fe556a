//! Formatting utilities for terminal output

use crate::core::{Constraints, PLACEHOLDER};

/// Render the positional fields as tiles
///
/// Green for a known letter, yellow for a misplaced one, white otherwise.
/// A green letter wins over a yellow one at the same position.
#[must_use]
pub fn constraint_tiles(constraints: &Constraints) -> String {
    let pattern: Vec<char> = constraints.pattern().chars().collect();
    let include: Vec<char> = constraints.include().chars().collect();
    let width = pattern.len().max(include.len());

    let is_letter = |chars: &[char], i: usize| chars.get(i).is_some_and(|c| *c != PLACEHOLDER);

    (0..width)
        .map(|i| {
            if is_letter(&pattern, i) {
                '🟩'
            } else if is_letter(&include, i) {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Uppercase words for display
#[must_use]
pub fn display_words(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_uppercase()).collect()
}
