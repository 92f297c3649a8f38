use plotters::style::RGBColor;

/// Color palette for generator series
const PALETTE: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // Blue
    RGBColor(251, 188, 5),   // Yellow
    RGBColor(52, 168, 83),   // Green
    RGBColor(234, 67, 53),   // Red
    RGBColor(129, 180, 255), // Light blue
    RGBColor(128, 128, 128), // Grey
];

/// Color for the series at `idx`, cycling when there are more generators
/// than palette entries
pub fn series_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_colors_for_small_indices() {
        assert_ne!(series_color(0), series_color(1));
        assert_ne!(series_color(1), series_color(2));
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(PALETTE.len()));
    }
}
