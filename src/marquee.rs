//! Scroll-offset state machine and the frame loop.
//!
//! Each tick clears the canvas, draws the configured text at the current
//! offset, hands both panel frames to the display link, waits out the
//! interframe delay, and steps the offset left by one. When the text has
//! fully exited the left edge the offset wraps back to the right edge.
//!
//! Everything except [`Marquee::run`] is synchronous and hardware-free, so
//! the whole animation can be stepped and inspected in host tests.

#[cfg(not(feature = "host"))]
use core::convert::Infallible;

use embassy_time::Duration;
#[cfg(not(feature = "host"))]
use embassy_time::Timer;
use heapless::String;
use smart_leds::RGB8;

use crate::canvas::Canvas;
use crate::color::hex_to_rgb8;
use crate::font;
use crate::strip::Frame1d;
#[cfg(not(feature = "host"))]
use crate::strip::DisplayLink;
#[cfg(not(feature = "host"))]
use crate::Result;

/// Longest text the marquee will carry. Longer input is clipped at
/// construction; at 6 columns per character anything beyond this has long
/// scrolled off a 32-column canvas anyway.
pub const MAX_TEXT: usize = 32;

/// Build-time display settings.
///
/// Geometry lives in the [`Marquee`] const parameters; everything runtime-
/// tunable is here. Pin, chipset, and color-order choices belong to the
/// strip writers bound into the [`DisplayLink`](crate::strip::DisplayLink).
#[derive(Clone, Debug)]
pub struct MarqueeConfig {
    /// Text to scroll.
    pub text: String<MAX_TEXT>,
    /// Color every lit pixel is drawn with.
    pub color: RGB8,
    /// Logical row of the glyph tops. Default 4 centers 7-row glyphs on a
    /// 16-row canvas.
    pub row: i32,
    /// Delay between frames. Default 100 ms.
    pub frame_delay: Duration,
    /// Global brightness handed to the display link with every frame.
    /// Default 64.
    pub brightness: u8,
}

impl MarqueeConfig {
    /// Default brightness level (out of 255).
    pub const DEFAULT_BRIGHTNESS: u8 = 64;

    /// Config with the given text and color and default row, delay, and
    /// brightness. Text beyond [`MAX_TEXT`] characters is clipped.
    #[must_use]
    pub fn new(text: &str, color: RGB8) -> Self {
        let mut owned = String::new();
        for ch in text.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }
        Self {
            text: owned,
            color,
            row: 4,
            frame_delay: Duration::from_millis(100),
            brightness: Self::DEFAULT_BRIGHTNESS,
        }
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self::new("Hallo", hex_to_rgb8("#FF00FF"))
    }
}

/// The scrolling-text animator.
///
/// Owns the canvas (and through it both physical buffers) plus the single
/// piece of cross-frame state: the scroll offset. Created once at startup
/// and driven either by [`run`](Self::run) on hardware or by
/// [`render_frame`](Self::render_frame) / [`advance`](Self::advance) in
/// tests.
pub struct Marquee<const N: usize, const W: usize, const H: usize> {
    canvas: Canvas<N, W, H>,
    config: MarqueeConfig,
    offset: i32,
}

impl<const N: usize, const W: usize, const H: usize> Marquee<N, W, H> {
    /// Create a marquee with its text parked just past the right edge.
    #[must_use]
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            canvas: Canvas::new(),
            config,
            offset: W as i32,
        }
    }

    /// Current scroll offset: the logical x of the first glyph's left edge.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// The display settings this marquee was built with.
    #[must_use]
    pub const fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// The canvas, for inspection.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas<N, W, H> {
        &self.canvas
    }

    /// Offset below which the text has fully left the canvas.
    ///
    /// Computed from the rendered text width rather than hard-coded, so the
    /// wrap point tracks the configured string. For a 5-character text this
    /// is -30: the offset wraps once it drops below that.
    #[must_use]
    pub fn wrap_bound(&self) -> i32 {
        -((self.config.text.chars().count() * font::GLYPH_ADVANCE) as i32)
    }

    /// Render one frame at the current offset: clear, draw, hand out both
    /// physical buffers as `(panel 1, panel 2)`.
    pub fn render_frame(&mut self) -> (&Frame1d<N>, &Frame1d<N>) {
        self.canvas.clear();
        self.canvas.draw_text(
            self.offset,
            self.config.row,
            self.config.text.as_str(),
            self.config.color,
        );
        self.canvas.frames()
    }

    /// Step the scroll one column left, wrapping back to the right edge once
    /// the text has fully exited.
    pub fn advance(&mut self) {
        self.offset -= 1;
        if self.offset < self.wrap_bound() {
            self.offset = W as i32;
        }
    }

    /// Drive the display forever: render, transmit both frames, wait the
    /// interframe delay, advance.
    ///
    /// Both frames go out before the delay so the two panels stay visually
    /// in sync. Never returns except on a transmit error; there is no
    /// shutdown path, matching the fire-and-forget nature of the display.
    #[cfg(not(feature = "host"))]
    pub async fn run<D>(mut self, link: &mut D) -> Result<Infallible>
    where
        D: DisplayLink<N>,
    {
        defmt::info!(
            "marquee: scrolling {} chars at {} ms/frame",
            self.config.text.chars().count(),
            self.config.frame_delay.as_millis(),
        );
        loop {
            let before = self.offset;
            let brightness = self.config.brightness;
            let (upper, lower) = self.render_frame();
            link.show(upper, lower, brightness).await?;
            Timer::after(self.config.frame_delay).await;
            self.advance();
            if self.offset > before {
                defmt::debug!("marquee: wrapped to right edge");
            }
        }
    }
}

/// Marquee over the stock pair of chained 32×8 panels.
pub type Marquee32x16 =
    Marquee<{ crate::PANEL_LEDS }, { crate::PANEL_WIDTH }, { crate::PANEL_HEIGHT }>;
