//! Fixed colour palette offered next to the hex entry field

use crate::color::Rgba;

/// Palette swatches in display order.
pub const PALETTE: [&str; 30] = [
    "#9b87f5", "#8B5CF6", "#D946EF", "#F97316", "#0EA5E9",
    "#ffffff", "#e5e5e5", "#cccccc", "#999999", "#666666", "#333333", "#000000",
    "#ff0000", "#ff6600", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#9400d3",
    "#8b4513", "#a0522d", "#d2691e", "#cd853f", "#f4a460", "#deb887",
    "#ff69b4", "#ff1493", "#c71585", "#db7093", "#ffc0cb",
];

/// Colour of the palette swatch at `index`, if there is one.
pub fn palette_color(index: usize) -> Option<Rgba> {
    PALETTE
        .get(index)
        .and_then(|hex| Rgba::from_hex(hex).ok())
}

/// All palette colours in order.
pub fn palette_colors() -> impl Iterator<Item = Rgba> {
    PALETTE.iter().filter_map(|hex| Rgba::from_hex(hex).ok())
}

/// Position of `color` in the palette, used to highlight the active swatch.
pub fn palette_index(color: Rgba) -> Option<usize> {
    palette_colors().position(|c| c == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_swatch_parses() {
        assert_eq!(palette_colors().count(), PALETTE.len());
    }

    #[test]
    fn test_first_swatch_is_accent() {
        assert_eq!(palette_color(0), Some(Rgba::ACCENT));
        assert_eq!(palette_index(Rgba::ACCENT), Some(0));
    }

    #[test]
    fn test_out_of_range_swatch() {
        assert_eq!(palette_color(PALETTE.len()), None);
        assert_eq!(palette_index(Rgba::new(1, 2, 3, 4)), None);
    }
}
