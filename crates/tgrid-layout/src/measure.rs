//! Text measurement seam.
//!
//! The allocator needs the rendered pixel width of header and cell text, but
//! never touches a drawing surface itself. The host supplies a measurer
//! backed by its real text stack; [`HeuristicMeasurer`] is a deterministic
//! fallback built on display-cell counts, good enough for headless use and
//! tests.

use unicode_width::UnicodeWidthStr;

/// Font parameters for one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// CSS-style weight (400 regular, 600 semibold).
    pub weight: u16,
    /// Font size in pixels.
    pub size_px: f64,
}

/// Measures rendered text width in pixels.
pub trait TextMeasurer {
    /// Pixel width of `text` rendered with `font`.
    fn measure(&self, text: &str, font: FontSpec) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, FontSpec) -> f64,
{
    fn measure(&self, text: &str, font: FontSpec) -> f64 {
        self(text, font)
    }
}

/// Cell-count based estimate: display cells x em-ratio x font size, with a
/// small widening factor for semibold and up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub em_ratio: f64,
    /// Widening factor applied at weight >= 600.
    pub bold_factor: f64,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self {
            em_ratio: 0.60,
            bold_factor: 1.06,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> f64 {
        let cells = UnicodeWidthStr::width(text) as f64;
        let weight_factor = if font.weight >= 600 {
            self.bold_factor
        } else {
            1.0
        };
        cells * font.size_px * self.em_ratio * weight_factor
    }
}
