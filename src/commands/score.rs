//! Score command
//!
//! Evaluates a single guess against a given secret.

use crate::core::{Code, Feedback};
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code cannot be parsed or the codes differ in length.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = Code::parse(secret).context("Invalid secret")?;
    let guess = Code::parse(guess).context("Invalid guess")?;
    let feedback = Feedback::evaluate(&secret, &guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_compact_codes() {
        let result = score_codes("rgby", "ybgr").unwrap();
        assert_eq!(result.feedback, Feedback::new(0, 4));
        assert_eq!(result.secret.initials(), "rgby");
    }

    #[test]
    fn scores_named_codes() {
        let result = score_codes("red red blue blue", "red blue blue blue").unwrap();
        assert_eq!(result.feedback, Feedback::new(3, 0));
    }

    #[test]
    fn rejects_bad_input() {
        let err = score_codes("rgbq", "rgby").unwrap_err();
        assert!(err.to_string().contains("Invalid secret"));

        let err = score_codes("rgby", "rgb").unwrap_err();
        assert!(err.to_string().contains("exactly 4 pegs"));
    }
}
