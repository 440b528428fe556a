//! Letter constraint fields and keystroke sanitization
//!
//! Three fields describe what is known about the hidden word:
//! - Pattern: green letters by position, `_` for unknown positions
//! - Include: yellow letters by position, `_` where there is no constraint
//! - Exclude: grey letters in any order

use std::fmt;

/// Placeholder for "any letter" in positional fields
pub const PLACEHOLDER: char = '_';

/// Strip everything except ASCII letters and `_`, then uppercase
///
/// # Examples
/// ```
/// use wordle_assist::core::sanitize_pattern_or_include;
///
/// assert_eq!(sanitize_pattern_or_include("_o-3___"), "_O___");
/// ```
#[must_use]
pub fn sanitize_pattern_or_include(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == PLACEHOLDER)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Strip everything except ASCII letters, then uppercase
///
/// Exclusion is unordered, so the placeholder is not allowed here.
#[must_use]
pub fn sanitize_exclude(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// One of the three constraint fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Pattern,
    Include,
    Exclude,
}

impl Field {
    /// Form order: green letters, then grey, then yellow
    pub const FORM_ORDER: [Self; 3] = [Self::Pattern, Self::Exclude, Self::Include];

    /// Apply this field's sanitizer
    #[must_use]
    pub fn sanitize(self, raw: &str) -> String {
        match self {
            Self::Pattern | Self::Include => sanitize_pattern_or_include(raw),
            Self::Exclude => sanitize_exclude(raw),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pattern => "Letters",
            Self::Include => "Include",
            Self::Exclude => "Exclude",
        }
    }

    /// Next field in form order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::FORM_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::FORM_ORDER[(index + 1) % Self::FORM_ORDER.len()]
    }

    /// Previous field in form order, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::FORM_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::FORM_ORDER[(index + Self::FORM_ORDER.len() - 1) % Self::FORM_ORDER.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three constraint fields of the form
///
/// Edits go through the field sanitizers. Values restored from a route are
/// taken verbatim (see [`Constraints::from_route_values`]) and cleaned up the
/// next time the field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pattern: String,
    include: String,
    exclude: String,
}

impl Constraints {
    /// Build constraints from user input, sanitizing every field
    #[must_use]
    pub fn new(pattern: &str, include: &str, exclude: &str) -> Self {
        Self {
            pattern: sanitize_pattern_or_include(pattern),
            include: sanitize_pattern_or_include(include),
            exclude: sanitize_exclude(exclude),
        }
    }

    /// Build constraints from route segments without sanitizing
    #[must_use]
    pub fn from_route_values(
        pattern: impl Into<String>,
        include: impl Into<String>,
        exclude: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            include: include.into(),
            exclude: exclude.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn include(&self) -> &str {
        &self.include
    }

    #[inline]
    #[must_use]
    pub fn exclude(&self) -> &str {
        &self.exclude
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pattern => &self.pattern,
            Field::Include => &self.include,
            Field::Exclude => &self.exclude,
        }
    }

    /// Replace a field with the sanitized form of `raw`
    pub fn set(&mut self, field: Field, raw: &str) {
        let value = field.sanitize(raw);
        *self.slot(field) = value;
    }

    /// Append a keystroke to a field; invalid characters are dropped
    pub fn push_char(&mut self, field: Field, c: char) {
        let mut raw = self.get(field).to_string();
        raw.push(c);
        self.set(field, &raw);
    }

    /// Remove the last character of a field, then sanitize what is left
    pub fn pop_char(&mut self, field: Field) {
        let mut raw = self.get(field).to_string();
        raw.pop();
        self.set(field, &raw);
    }

    /// True when all three fields are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty() && self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn clear(&mut self) {
        self.pattern.clear();
        self.include.clear();
        self.exclude.clear();
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Pattern => &mut self.pattern,
            Field::Include => &mut self.include,
            Field::Exclude => &mut self.exclude,
        }
    }
}
