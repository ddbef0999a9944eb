//! Colors - Table Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Table color palette - All colors are accessed via associated functions
pub struct TableColors;

impl TableColors {
    // Container
    /// Paper background behind the table
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Container and row divider
    pub fn border() -> Rgba { rgb(0xe0e0e0) }

    // Header
    /// Header cell background
    pub fn header_bg() -> Rgba { rgb(0x000000) }
    /// Header cell text
    pub fn header_text() -> Rgba { rgb(0xffffff) }
    /// Header cell hover (sortable columns)
    pub fn header_hover() -> Rgba { rgb(0x212121) }

    // Body
    /// Even row background
    pub fn row_bg() -> Rgba { rgb(0xffffff) }
    /// Odd row background (zebra stripe)
    pub fn row_alt() -> Rgba { rgba(0x0000000a) }
    /// Row hover
    pub fn row_hover() -> Rgba { rgba(0x00000014) }

    // Text
    /// Body text
    pub fn text_primary() -> Rgba { rgba(0x000000de) }
    /// Footer text
    pub fn text_secondary() -> Rgba { rgba(0x00000099) }
    /// Disabled controls, placeholder text
    pub fn text_muted() -> Rgba { rgba(0x00000061) }

    // Controls
    /// Selected rows-per-page option
    pub fn option_selected_bg() -> Rgba { rgba(0x1976d214) }
    /// Selected rows-per-page option text
    pub fn option_selected_text() -> Rgba { rgb(0x1976d2) }
}
