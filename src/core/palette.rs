//! # Color Palette
//!
//! The threshold table that drives the whole visual effect: a fixed, ordered
//! set of remaining-count bands, each mapped to a triple of colors for the
//! note card, the surrounding screen, and the counter label.
//!
//! This module is domain logic only — colors are plain RGB values with no
//! ratatui types, so the table stays testable without a terminal. The `tui`
//! layer converts `Rgb` to `ratatui::style::Color` at the paint site.

/// Maximum number of characters the note may hold.
pub const CHARACTER_LIMIT: i32 = 200;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal, matching how the colors are written
    /// in the design table below.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

/// The color triple applied per band: note card background, screen
/// background, and counter label foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub field: Rgb,
    pub screen: Rgb,
    pub counter: Rgb,
}

impl Palette {
    const fn new(field: u32, screen: u32, counter: u32) -> Self {
        Self {
            field: Rgb::from_u32(field),
            screen: Rgb::from_u32(screen),
            counter: Rgb::from_u32(counter),
        }
    }
}

/// One entry of the threshold table: a closed range of remaining counts and
/// the palette shown while the count is inside it.
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub min: i32,
    pub max: i32,
    pub palette: Palette,
}

impl Band {
    const fn new(min: i32, max: i32, field: u32, screen: u32, counter: u32) -> Self {
        Self {
            min,
            max,
            palette: Palette::new(field, screen, counter),
        }
    }

    pub fn contains(&self, remaining: i32) -> bool {
        self.min <= remaining && remaining <= self.max
    }
}

/// Ordered from full budget down to empty. Ranges are contiguous and
/// non-overlapping over `[0, 200]`, so exactly one band matches any
/// in-range value (asserted in tests). The card reddens and the screen
/// lightens as the budget shrinks; the counter text flips from black to
/// white at the 139 boundary where the backgrounds get too dark for it.
pub const BANDS: [Band; 11] = [
    Band::new(200, 200, 0xFFEBEE, 0x1F1F21, 0x1F1F21),
    Band::new(180, 199, 0xFFCDD2, 0x0D47A1, 0x1F1F21),
    Band::new(160, 179, 0xEF9A9A, 0x1565C0, 0x1F1F21),
    Band::new(140, 159, 0xE57373, 0x1976D2, 0x1F1F21),
    Band::new(120, 139, 0xEF5350, 0x1E88E5, 0xFFFFFF),
    Band::new(100, 119, 0xF44336, 0x2196F3, 0xFFFFFF),
    Band::new(80, 99, 0xE53935, 0x42A5F5, 0xFFFFFF),
    Band::new(60, 79, 0xD32F2F, 0x64B5F6, 0xFFFFFF),
    Band::new(40, 59, 0xC62828, 0x90CAF9, 0xFFFFFF),
    Band::new(20, 39, 0xB71C1C, 0xBBDEFB, 0xFFFFFF),
    Band::new(0, 19, 0x1F1F21, 0xE3F2FD, 0xFFFFFF),
];

/// Palette for a negative remaining count (an over-limit edit was attempted).
/// Only the screen color differs from the `[0, 19]` band: that is the one
/// surface the original design changed on this path, and its constant is
/// clamped to white to fix a malformed 7-digit literal in the source.
pub const OUT_OF_RANGE: Palette = Palette::new(0x1F1F21, 0xFFFFFF, 0xFFFFFF);

/// Look up the palette for a remaining-character count. First matching band
/// wins; anything below zero takes the out-of-range fallback. Counts above
/// the limit cannot occur (remaining is `CHARACTER_LIMIT - length` and
/// length is never negative), but the fallback keeps the function total.
pub fn palette_for(remaining: i32) -> Palette {
    BANDS
        .iter()
        .find(|band| band.contains(remaining))
        .map(|band| band.palette)
        .unwrap_or(OUT_OF_RANGE)
}
