//! Logical canvas spanning two chained panels, plus glyph/text rendering.
//!
//! The canvas presents one `W`×`2H` coordinate space with `(0, 0)` at the
//! top-left, `x` increasing right and `y` increasing down. Rows `0..H` land
//! on panel 1 and rows `H..2H` on panel 2, which hangs rotated 180° in the
//! chain, so writes to the lower half are mirrored on both axes before the
//! serpentine mapping is applied.
//!
//! Anything drawn off-canvas is clipped pixel by pixel — never an error.
//! That mirrors what the wall display does: text scrolled past the edge
//! simply stops lighting LEDs.

pub mod wiring;

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
};
use smart_leds::RGB8;

use crate::font::{self, Glyph};
use crate::strip::{Frame1d, ToRgb8};

use self::wiring::PanelWiring;

/// Logical drawing surface over the two physical panel buffers.
///
/// `N` is the LED count of *one* panel and must equal `W * H` (checked at
/// construction; stable Rust cannot express the product as a const argument).
/// The two frames are owned here for the lifetime of the display and reused
/// every frame.
#[derive(Clone, Copy, Debug)]
pub struct Canvas<const N: usize, const W: usize, const H: usize> {
    upper: Frame1d<N>,
    lower: Frame1d<N>,
}

impl<const N: usize, const W: usize, const H: usize> Canvas<N, W, H> {
    /// Canvas width in pixels.
    pub const WIDTH: usize = W;
    /// Canvas height in pixels (both panels stacked).
    pub const HEIGHT: usize = 2 * H;

    /// Create a blank canvas.
    #[must_use]
    pub const fn new() -> Self {
        assert!(W * H == N, "W * H must equal N (LEDs per panel)");
        Self {
            upper: Frame1d::new(),
            lower: Frame1d::new(),
        }
    }

    /// Zero both panel buffers to black. Idempotent.
    pub fn clear(&mut self) {
        self.upper = Frame1d::new();
        self.lower = Frame1d::new();
    }

    /// Write one logical pixel, routing it to the right panel buffer.
    ///
    /// Off-canvas coordinates (negative, or past either edge) are silently
    /// dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: RGB8) {
        let Some((frame, index)) = self.route(x, y) else {
            return;
        };
        match frame {
            Half::Upper => self.upper[index] = color,
            Half::Lower => self.lower[index] = color,
        }
    }

    /// Read one logical pixel back through the same routing.
    ///
    /// `None` for off-canvas coordinates.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<RGB8> {
        let (frame, index) = self.route(x, y)?;
        match frame {
            Half::Upper => Some(self.upper[index]),
            Half::Lower => Some(self.lower[index]),
        }
    }

    /// Resolve a logical coordinate to a panel buffer and strip index.
    ///
    /// Panel 2 is physically rotated 180° relative to panel 1, so its
    /// logical top-left corresponds to the mirrored coordinate in its own
    /// wiring frame.
    fn route(&self, x: i32, y: i32) -> Option<(Half, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if y < H {
            let index = PanelWiring::<W, H>::led_index(x, y)?;
            Some((Half::Upper, index))
        } else if y < 2 * H {
            let mirrored_x = match W.checked_sub(x + 1) {
                Some(value) => value,
                None => return None, // x >= W
            };
            let mirrored_y = H - 1 - (y - H);
            let index = PanelWiring::<W, H>::led_index(mirrored_x, mirrored_y)?;
            Some((Half::Lower, index))
        } else {
            None
        }
    }

    /// Both physical buffers in strip order: `(panel 1, panel 2)`.
    #[must_use]
    pub const fn frames(&self) -> (&Frame1d<N>, &Frame1d<N>) {
        (&self.upper, &self.lower)
    }

    /// Draw one glyph with its bottom-left reference at `(x, y + 6)`.
    ///
    /// Glyph bit 0 is the bottom scanline, so rows are flipped while
    /// drawing: bit `row` of a column lands at `y + (6 - row)`.
    pub fn draw_glyph(&mut self, x: i32, y: i32, glyph: &Glyph, color: RGB8) {
        for (column, bits) in glyph.columns().iter().enumerate() {
            for row in 0..font::GLYPH_HEIGHT {
                if bits & (1 << row) != 0 {
                    let flipped_row = (font::GLYPH_HEIGHT - 1 - row) as i32;
                    self.set_pixel(x + column as i32, y + flipped_row, color);
                }
            }
        }
    }

    /// Draw a string left to right starting at `(x, y)`, advancing the
    /// cursor 6 columns per character.
    ///
    /// There is no wrapping; text past the canvas edge clips pixel by pixel.
    /// Characters outside the glyph table render via the fallback (see
    /// [`font::glyph_for`]).
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: RGB8) {
        let mut cursor_x = x;
        for ch in text.chars() {
            self.draw_glyph(cursor_x, y, font::glyph_for(ch), color);
            cursor_x += font::GLYPH_ADVANCE as i32;
        }
    }
}

/// Which panel buffer a logical coordinate routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Half {
    Upper,
    Lower,
}

impl<const N: usize, const W: usize, const H: usize> Default for Canvas<N, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const W: usize, const H: usize> OriginDimensions for Canvas<N, W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, (2 * H) as u32)
    }
}

impl<const N: usize, const W: usize, const H: usize> DrawTarget for Canvas<N, W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color.to_rgb8());
        }
        Ok(())
    }
}
