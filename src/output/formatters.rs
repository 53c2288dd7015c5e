//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Code, Color, Feedback};

/// Paint `text` in the terminal color matching a peg color
#[must_use]
pub fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Blue => text.blue(),
        Color::Green => text.green(),
        Color::Yellow => text.yellow(),
        Color::Purple => text.magenta(),
        Color::Orange => text.truecolor(255, 165, 0),
    }
}

/// One filled circle per peg, painted in the peg's color
#[must_use]
pub fn code_to_pegs(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| paint(c, "●").to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed-width feedback: exact pegs, then color-only pegs, then dots for misses
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, code_length: usize) -> String {
    let mut result = String::with_capacity(code_length * 3);
    result.push_str(&"●".repeat(feedback.exact()));
    result.push_str(&"○".repeat(feedback.color_only()));
    result.push_str(&"·".repeat(feedback.misses(code_length)));
    result
}

/// Plain-text legend of the palette, e.g. `r=red b=blue`
#[must_use]
pub fn palette_legend(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| format!("{}={}", c.initial(), c.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_fill_the_row() {
        assert_eq!(feedback_to_pegs(Feedback::new(2, 1), 4), "●●○·");
        assert_eq!(feedback_to_pegs(Feedback::new(0, 0), 4), "····");
        assert_eq!(feedback_to_pegs(Feedback::new(4, 0), 4), "●●●●");
        assert_eq!(feedback_to_pegs(Feedback::new(0, 4), 4), "○○○○");
    }

    #[test]
    fn legend_lists_palette() {
        assert_eq!(
            palette_legend(&[Color::Red, Color::Purple]),
            "r=red p=purple"
        );
    }

    #[test]
    fn code_pegs_one_per_color() {
        colored::control::set_override(false);
        let code = Code::new([Color::Red, Color::Blue, Color::Red]);
        assert_eq!(code_to_pegs(&code), "● ● ●");
    }
}
