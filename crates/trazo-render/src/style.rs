//! Shared figure styling: palette and canvas sizes.

use plotters::style::RGBColor;

/// Series palette, cycled by index.
pub const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// Opacity of range fills between min/max envelope curves.
pub const SHADE_ALPHA: f64 = 0.06;

/// Small canvas for single-panel summary figures.
pub const SMALL_CANVAS: (u32, u32) = (650, 340);
/// Default medium canvas.
pub const MEDIUM_CANVAS: (u32, u32) = (650, 450);
/// Square canvas for taller panel stacks.
pub const SQUARE_CANVAS: (u32, u32) = (650, 650);
/// Pixel scale of high-resolution raster output.
pub const RASTER_SCALE: u32 = 2;

/// Color for series `index`, cycling through the palette.
pub fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
