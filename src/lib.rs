//! Mastermind
//!
//! A code-breaking puzzle: guess the hidden row of colored pegs within a
//! fixed number of attempts, guided by exact and color-only match counts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let secret = Code::parse("rgby").unwrap();
//! let guess = Code::parse("ybgr").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess).unwrap();
//! assert_eq!((feedback.exact(), feedback.color_only()), (0, 4));
//! ```

// Core domain types
pub mod core;

// Game sessions and errors
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
