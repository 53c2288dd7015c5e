//! Secret generation

use rand::Rng;

use super::{Code, Palette};

/// Draw a random code of `length` pegs from `palette`
///
/// Each peg is chosen independently and uniformly, with replacement. The
/// randomness source is supplied by the caller so games can be replayed
/// from a seed.
///
/// # Examples
/// ```
/// use mastermind::core::{Palette, generate_secret};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let palette = Palette::classic();
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate_secret(&palette, 4, &mut rng);
///
/// assert_eq!(secret.len(), 4);
/// assert!(secret.colors().iter().all(|&c| palette.contains(c)));
/// ```
pub fn generate_secret<R: Rng + ?Sized>(palette: &Palette, length: usize, rng: &mut R) -> Code {
    debug_assert!(length >= 1, "Code length must be at least 1");

    let colors = palette.colors();
    (0..length)
        .map(|_| colors[rng.random_range(0..colors.len())])
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in 1..=8 {
            assert_eq!(generate_secret(&Palette::classic(), length, &mut rng).len(), length);
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let palette = Palette::classic();
        let a = generate_secret(&palette, 4, &mut StdRng::seed_from_u64(99));
        let b = generate_secret(&palette, 4, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn stays_within_palette() {
        let palette = Palette::new([Color::Purple, Color::Orange]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let secret = generate_secret(&palette, 4, &mut rng);
            assert!(secret.colors().iter().all(|&c| palette.contains(c)));
        }
    }

    #[test]
    fn single_color_palette_is_constant() {
        let palette = Palette::new([Color::Green]).unwrap();
        let secret = generate_secret(&palette, 5, &mut StdRng::seed_from_u64(0));
        assert_eq!(secret, Code::new([Color::Green; 5]));
    }

    #[test]
    fn every_color_gets_drawn() {
        // 4000 draws over 6 colors; a missing color would mean a broken index range
        let palette = Palette::classic();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [0usize; 6];
        for _ in 0..1000 {
            for &color in generate_secret(&palette, 4, &mut rng).colors() {
                seen[palette.index_of(color).unwrap()] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n > 400), "skewed draws: {seen:?}");
    }

    #[test]
    fn repeated_calls_draw_independently() {
        let palette = Palette::classic();
        let mut rng = StdRng::seed_from_u64(5);
        let secrets: Vec<Code> = (0..20).map(|_| generate_secret(&palette, 4, &mut rng)).collect();
        assert!(secrets.windows(2).any(|w| w[0] != w[1]));
    }
}
