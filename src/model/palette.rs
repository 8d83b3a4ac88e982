//! Fixed color palette for the per-card color buttons.

use rand::Rng;

use crate::constants::DEFAULT_PALETTE;

/// Ordered, non-empty list of CSS color values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette. Returns `None` for an empty list.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Draw one color uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.colors.len());
        &self.colors[index]
    }

    /// Whether `color` is a palette entry.
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// All colors in order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let color = palette.pick(&mut rng).to_string();
            assert!(palette.contains(&color), "{color} not in palette");
        }
    }

    #[test]
    fn test_pick_reaches_every_color() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(palette.pick(&mut rng).to_string());
        }
        assert_eq!(seen.len(), palette.colors().len());
    }
}
