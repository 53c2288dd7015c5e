//! Core domain types for Mastermind
//!
//! Pure, deterministic building blocks: colors, codes, scoring, and secret
//! generation from an injected randomness source.

mod code;
mod color;
mod feedback;
mod generator;

pub use code::{Code, CodeParseError};
pub use color::{Color, Palette};
pub use feedback::Feedback;
pub use generator::generate_secret;
