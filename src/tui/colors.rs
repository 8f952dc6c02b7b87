//! Color definitions for the interface chrome
//!
//! Chrome uses the 256-color (indexed) mode for broad terminal compatibility.
//! Swatches themselves are drawn in true color.

use ratatui::style::Color;

use crate::palette::Rgb;

/// Primary accent color (cyan-like)
pub const PRIMARY: Color = Color::Indexed(73); // Steel blue

/// Secondary/muted text color
pub const MUTED: Color = Color::Indexed(243); // Gray

/// Background for selected items
pub const SELECTION_BG: Color = Color::Indexed(236); // Dark gray

/// Error/danger color
pub const ERROR: Color = Color::Indexed(167); // Indian red

/// Success color
pub const SUCCESS: Color = Color::Indexed(108); // Dark sea green

/// Name lookup in flight
pub const PENDING: Color = Color::Indexed(179); // Light goldenrod

/// Grabbed swatch and its drop target
pub const GRAB: Color = Color::Indexed(176); // Plum

/// Header/footer background
pub const BAR_BG: Color = Color::Indexed(236); // Dark gray

/// Border color for focused/active elements
pub const BORDER_FOCUS: Color = Color::Indexed(73); // Steel blue

/// True-color fill for a swatch
pub fn swatch(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on the swatch
pub fn text_on(rgb: Rgb) -> Color {
    // Rec. 601 luma, integer form
    let luma = (299 * rgb.r as u32 + 587 * rgb.g as u32 + 114 * rgb.b as u32) / 1000;
    if luma > 140 {
        Color::Black
    } else {
        Color::White
    }
}
