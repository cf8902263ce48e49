//! UI colors - monochrome chrome so the swatches are the only color

use crate::palette::Temperature;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,

    // Temperature banner tints
    pub neutral: Color,
    pub cool: Color,
    pub warm: Color,
}

impl Palette {
    /// Grayscale chrome; the banner tints and the swatches carry the color.
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),          // #000000 pure black
        fg_primary: Color::Rgb(255, 255, 255),    // #ffffff white
        fg_secondary: Color::Rgb(136, 136, 136),  // #888888 medium gray
        accent: Color::Rgb(255, 255, 255),        // #ffffff white
        accent_alt: Color::Rgb(200, 200, 200),    // #c8c8c8 light gray
        border: Color::Rgb(64, 64, 64),           // #404040 dark gray
        success: Color::Rgb(140, 200, 140),       // muted green
        error: Color::Rgb(220, 120, 120),         // muted red

        neutral: Color::Rgb(136, 136, 136),       // gray
        cool: Color::Rgb(95, 145, 200),           // steel blue
        warm: Color::Rgb(200, 110, 80),           // ember
    };

    /// Banner tint for a temperature tag.
    pub fn temperature(&self, temperature: Temperature) -> Color {
        match temperature {
            Temperature::Neutral => self.neutral,
            Temperature::Cool => self.cool,
            Temperature::Warm => self.warm,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}
