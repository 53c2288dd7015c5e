//! Guess scoring
//!
//! Feedback is a pair of counts: pegs with the right color in the right
//! position (`exact`) and additional pegs whose color appears elsewhere in
//! the secret (`color_only`). Every secret peg is matched at most once.

use std::fmt;

use super::Code;
use crate::game::InputError;

/// Score for one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs with a color present in the secret but at another position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// True when every peg of a `code_length` code is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Guess pegs that matched nothing
    #[inline]
    #[must_use]
    pub const fn misses(self, code_length: usize) -> usize {
        code_length.saturating_sub(self.exact + self.color_only)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: every index where the colors agree counts as exact and
    ///    consumes that index in both codes
    /// 2. Color pass: each unconsumed guess peg, left to right, consumes the
    ///    first unconsumed secret peg of the same color
    ///
    /// # Errors
    /// Returns `InputError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("rrbb").unwrap();
    /// let guess = Code::parse("rbbb").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.exact(), 3);
    /// assert_eq!(feedback.color_only(), 0);
    /// ```
    pub fn evaluate(secret: &Code, guess: &Code) -> Result<Self, InputError> {
        if secret.len() != guess.len() {
            return Err(InputError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let secret = secret.colors();
        let guess = guess.colors();
        let mut secret_used = vec![false; secret.len()];
        let mut guess_used = vec![false; guess.len()];
        let mut exact = 0;
        let mut color_only = 0;

        // Allow: index needed to mark both sides at the same position
        #[allow(clippy::needless_range_loop)]
        for i in 0..guess.len() {
            if guess[i] == secret[i] {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        for (i, &color) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }
            let found = secret
                .iter()
                .zip(&secret_used)
                .position(|(&c, &used)| !used && c == color);
            if let Some(j) = found {
                color_only += 1;
                secret_used[j] = true;
            }
        }

        Ok(Self { exact, color_only })
    }
}

impl fmt::Display for Feedback {
    /// Black pegs for exact matches followed by white pegs for color matches
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.exact {
            f.write_str("●")?;
        }
        for _ in 0..self.color_only {
            f.write_str("○")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Blue, Green, Orange, Purple, Red, Yellow};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn code(colors: &[Color]) -> Code {
        Code::new(colors.to_vec())
    }

    fn score(secret: &[Color], guess: &[Color]) -> (usize, usize) {
        let feedback = Feedback::evaluate(&code(secret), &code(guess)).unwrap();
        (feedback.exact(), feedback.color_only())
    }

    fn random_code(rng: &mut StdRng, length: usize) -> Code {
        (0..length)
            .map(|_| Color::ALL[rng.random_range(0..Color::ALL.len())])
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn repeated_colors_are_not_overcounted() {
        assert_eq!(score(&[Red, Red, Blue, Blue], &[Red, Blue, Blue, Blue]), (3, 0));
        assert_eq!(score(&[Red, Red, Blue, Blue], &[Blue, Red, Blue, Red]), (2, 2));
        assert_eq!(score(&[Red, Red, Blue, Blue], &[Blue, Blue, Blue, Red]), (1, 2));
    }

    #[test]
    fn guess_repeats_more_than_secret() {
        // Only one red in the secret, so only one of the guess reds can score
        assert_eq!(score(&[Red, Blue, Green, Yellow], &[Blue, Red, Red, Red]), (0, 2));
        assert_eq!(score(&[Green, Blue, Red, Yellow], &[Red, Red, Red, Red]), (1, 0));
    }

    #[test]
    fn secret_repeats_more_than_guess() {
        assert_eq!(score(&[Red, Red, Red, Blue], &[Blue, Green, Green, Red]), (0, 2));
    }

    #[test]
    fn exact_match_takes_priority_over_color_match() {
        // guess[0] red could color-match secret[1], but secret[1] is claimed exactly
        assert_eq!(score(&[Blue, Red, Green, Green], &[Red, Red, Yellow, Yellow]), (1, 0));
    }

    #[test]
    fn all_wrong() {
        assert_eq!(
            score(&[Red, Blue, Green, Yellow], &[Purple, Purple, Purple, Purple]),
            (0, 0)
        );
    }

    #[test]
    fn all_misplaced() {
        assert_eq!(
            score(&[Red, Blue, Green, Yellow], &[Yellow, Green, Blue, Red]),
            (0, 4)
        );
    }

    #[test]
    fn identical_codes_are_solved() {
        for colors in [
            [Red, Blue, Green, Yellow],
            [Orange, Orange, Orange, Orange],
            [Purple, Red, Purple, Red],
        ] {
            let feedback = Feedback::evaluate(&code(&colors), &code(&colors)).unwrap();
            assert_eq!(feedback, Feedback::new(4, 0));
            assert!(feedback.is_solved(4));
            assert_eq!(feedback.misses(4), 0);
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let secret = code(&[Red, Blue, Green, Yellow]);
        let guess = code(&[Red, Blue, Green]);
        assert_eq!(
            Feedback::evaluate(&secret, &guess),
            Err(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn other_lengths_are_scored() {
        assert_eq!(score(&[Red], &[Red]), (1, 0));
        assert_eq!(score(&[Red, Blue, Blue, Green, Red, Orange], &[Blue, Red, Blue, Red, Red, Yellow]), (2, 2));
        assert_eq!(score(&[], &[]), (0, 0));
    }

    #[test]
    fn invariants_hold_for_random_pairs() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2000 {
            let secret = random_code(&mut rng, 4);
            let guess = random_code(&mut rng, 4);
            let forward = Feedback::evaluate(&secret, &guess).unwrap();
            let backward = Feedback::evaluate(&guess, &secret).unwrap();

            assert!(forward.exact() + forward.color_only() <= 4);
            assert_eq!(forward.exact(), backward.exact());
            assert_eq!(forward.color_only(), backward.color_only());

            // Total matches equal the multiset intersection size
            let secret_counts = secret.color_counts();
            let guess_counts = guess.color_counts();
            let common: usize = secret_counts
                .iter()
                .map(|(color, &n)| n.min(guess_counts.get(color).copied().unwrap_or(0)))
                .sum();
            assert_eq!(forward.exact() + forward.color_only(), common, "{secret} vs {guess}");
        }
    }

    #[test]
    fn display_renders_black_then_white_pegs() {
        assert_eq!(Feedback::new(2, 1).to_string(), "●●○");
        assert_eq!(Feedback::new(0, 0).to_string(), "");
        assert_eq!(Feedback::new(0, 1).misses(4), 3);
    }
}
