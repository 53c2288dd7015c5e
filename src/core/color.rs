//! Peg colors and the palette secrets are drawn from
//!
//! Colors are symbolic tokens. The terminal layers decide how to paint them.

use std::fmt;
use std::str::FromStr;

use super::code::CodeParseError;
use crate::game::InputError;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    /// Lower-case display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Single-letter shorthand used by compact code strings like `"rgby"`
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Purple => 'p',
            Self::Orange => 'o',
        }
    }

    /// Look a color up by its initial (case-insensitive)
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.initial() == ch)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = CodeParseError;

    /// Accepts full names (`"purple"`) or initials (`"p"`), any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_initial(ch)
        {
            return Ok(color);
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name() == token)
            .ok_or_else(|| CodeParseError::UnknownColor(s.trim().to_string()))
    }
}

/// Ordered set of distinct colors a code may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from an ordered list of colors
    ///
    /// # Errors
    /// Returns `InputError::EmptyPalette` for an empty list and
    /// `InputError::DuplicateColor` if a color appears twice.
    pub fn new(colors: impl Into<Vec<Color>>) -> Result<Self, InputError> {
        let colors = colors.into();

        if colors.is_empty() {
            return Err(InputError::EmptyPalette);
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(InputError::DuplicateColor(*color));
            }
        }

        Ok(Self { colors })
    }

    /// The six-color palette of the classic board
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Position of `color` within the palette
    #[must_use]
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
