//! Code representation
//!
//! A `Code` is an ordered row of peg colors. Both the hidden secret and each
//! guess are codes; length is validated by whoever consumes them.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Color;

/// Error type for unparseable code strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeParseError {
    #[error("Code must contain at least one color")]
    Empty,
    #[error("Unknown color '{0}' (use red, blue, green, yellow, purple, orange or their initials)")]
    UnknownColor(String),
}

/// An ordered sequence of peg colors, repetition allowed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Color>);

impl Code {
    #[must_use]
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self(colors.into())
    }

    /// Parse a code from user input
    ///
    /// Two forms are accepted:
    /// - compact initials with no separators: `"rgby"`
    /// - color names or initials separated by commas or whitespace:
    ///   `"red, blue green y"`
    ///
    /// # Errors
    /// Returns `CodeParseError` if the input is blank or names an unknown color.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let compact = Code::parse("rgby").unwrap();
    /// let spelled = Code::parse("red green blue yellow").unwrap();
    ///
    /// assert_eq!(compact.colors()[1], Color::Green);
    /// assert_eq!(spelled.colors()[2], Color::Blue);
    /// assert!(Code::parse("rgbx").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CodeParseError::Empty);
        }

        let is_separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
        let colors = if is_separated {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::parse)
                .collect::<Result<Vec<Color>, _>>()?
        } else if let Ok(color) = trimmed.parse::<Color>() {
            // A single full name such as "red"
            vec![color]
        } else {
            trimmed
                .chars()
                .map(|ch| {
                    Color::from_initial(ch).ok_or_else(|| CodeParseError::UnknownColor(ch.to_string()))
                })
                .collect::<Result<Vec<Color>, _>>()?
        };

        Ok(Self(colors))
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pegs of each color
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Compact initials form, e.g. `"rgby"`
    #[must_use]
    pub fn initials(&self) -> String {
        self.0.iter().map(|c| c.initial()).collect()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromStr for Code {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
