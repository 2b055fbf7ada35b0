use super::Rgb;

/// Number of swatches kept in the recent-colors strip
pub const PALETTE_LEN: usize = 5;

/// Recently used colors, most recent first.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build from a seed list, dropping duplicates and anything past `PALETTE_LEN`
    pub fn new(seed: impl IntoIterator<Item = Rgb>) -> Self {
        let mut colors: Vec<Rgb> = Vec::with_capacity(PALETTE_LEN);
        for color in seed {
            if colors.len() == PALETTE_LEN {
                break;
            }
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        Self { colors }
    }

    /// Remember a selected color. Known colors keep their slot;
    /// new ones go to the front and push the oldest out.
    pub fn remember(&mut self, color: Rgb) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.insert(0, color);
        self.colors.truncate(PALETTE_LEN);
        true
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn get(&self, slot: usize) -> Option<Rgb> {
        self.colors.get(slot).copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            Rgb::new(0x63, 0x66, 0xf1),
            Rgb::new(0xef, 0x44, 0x44),
            Rgb::new(0x10, 0xb9, 0x81),
            Rgb::new(0xf5, 0x9e, 0x0b),
            Rgb::new(0x8b, 0x5c, 0xf6),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_five_colors() {
        let palette = Palette::default();
        assert_eq!(palette.colors().len(), PALETTE_LEN);
        assert_eq!(palette.get(0).unwrap().to_hex(), "#6366f1");
    }

    #[test]
    fn test_new_color_goes_first_and_evicts_oldest() {
        let mut palette = Palette::default();
        let black = Rgb::BLACK;
        assert!(palette.remember(black));
        assert_eq!(palette.get(0), Some(black));
        assert_eq!(palette.colors().len(), PALETTE_LEN);
        assert!(!palette.colors().contains(&Rgb::new(0x8b, 0x5c, 0xf6)));
    }

    #[test]
    fn test_known_color_keeps_order() {
        let mut palette = Palette::default();
        let before = palette.clone();
        assert!(!palette.remember(Rgb::new(0xf5, 0x9e, 0x0b)));
        assert_eq!(palette, before);
    }

    #[test]
    fn test_seed_is_deduplicated_and_capped() {
        let palette = Palette::new([Rgb::WHITE, Rgb::WHITE, Rgb::BLACK]);
        assert_eq!(palette.colors(), &[Rgb::WHITE, Rgb::BLACK]);

        let many = (0..10).map(|n| Rgb::new(n, n, n));
        assert_eq!(Palette::new(many).colors().len(), PALETTE_LEN);
    }
}
