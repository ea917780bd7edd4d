use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Hex colour → Color32
// ---------------------------------------------------------------------------

/// Colour used when a series colour cannot be parsed.
pub const FALLBACK: Color32 = Color32::GRAY;

/// Parse a `#rrggbb` (or `rrggbb`, `#rgb`) string.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex.trim()).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Like [`parse_hex`] but never fails; bad input logs a warning and yields
/// [`FALLBACK`].
pub fn series_color(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or_else(|| {
        log::warn!("unparseable series colour '{hex}', using grey");
        FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_colours() {
        assert_eq!(parse_hex("#2c3e65"), Some(Color32::from_rgb(0x2c, 0x3e, 0x65)));
        assert_eq!(parse_hex("dd3430"), Some(Color32::from_rgb(0xdd, 0x34, 0x30)));
    }

    #[test]
    fn bad_colour_falls_back_to_grey() {
        assert_eq!(parse_hex("blue-ish"), None);
        assert_eq!(series_color("#zzzzzz"), FALLBACK);
    }
}
