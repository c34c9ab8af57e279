//! `#RRGGBB` text to RGB color conversion.

use smart_leds::RGB8;

/// Parse a `#RRGGBB` string into an [`RGB8`] color.
///
/// The first byte is skipped unconditionally (it is expected to be `#`) and
/// the rest is read as one big-endian hex number: red, then green, then blue.
///
/// Input that fails to parse yields black rather than an error; a marquee has
/// no one to report to, so a bad color simply leaves the display dark. Extra
/// leading digits beyond six are truncated away by the byte masking.
///
/// ```text
/// hex_to_rgb8("#FF00FF") == RGB8 { r: 255, g: 0, b: 255 }
/// hex_to_rgb8("#000000") == RGB8 { r: 0, g: 0, b: 0 }
/// ```
#[must_use]
pub fn hex_to_rgb8(hex: &str) -> RGB8 {
    let digits = hex.get(1..).unwrap_or("");
    let packed = u32::from_str_radix(digits, 16).unwrap_or(0);
    RGB8::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}
