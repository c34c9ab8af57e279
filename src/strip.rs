//! Physical strip frames and the transmit capability for chained panels.
//!
//! The marquee core only ever produces two [`Frame1d`] buffers, one per
//! panel, already in strip order. Getting their bytes onto real hardware is
//! the job of a [`DisplayLink`] implementation; [`SmartLedsLink`] binds the
//! capability to any pair of [`smart_leds::SmartLedsWrite`] writers, and
//! tests substitute an in-memory fake.

use core::ops::{Deref, DerefMut};

use smart_leds::{SmartLedsWrite, brightness};

use crate::{Error, Result};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// 8-bit-per-channel RGB color from `embedded_graphics`.
#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

/// RGB color type used by strip frames.
pub use smart_leds::RGB8;

use embedded_graphics::pixelcolor::RgbColor;

/// Convert colors to [`RGB8`] for strip transmission.
pub trait ToRgb8 {
    /// Convert this color to [`RGB8`].
    #[must_use]
    fn to_rgb8(self) -> RGB8;
}

impl ToRgb8 for RGB8 {
    #[inline(always)]
    fn to_rgb8(self) -> RGB8 {
        self
    }
}

impl ToRgb8 for Rgb888 {
    #[inline(always)]
    fn to_rgb8(self) -> RGB8 {
        RGB8::new(self.r(), self.g(), self.b())
    }
}

/// Convert colors to [`Rgb888`] for embedded-graphics drawing.
pub trait ToRgb888 {
    /// Convert this color to [`Rgb888`].
    #[must_use]
    fn to_rgb888(self) -> Rgb888;
}

impl ToRgb888 for RGB8 {
    #[inline(always)]
    fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl ToRgb888 for Rgb888 {
    #[inline(always)]
    fn to_rgb888(self) -> Rgb888 {
        self
    }
}

/// Fixed-size 1D frame holding one panel's LEDs in strip order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[RGB8; N]> for Frame1d<N> {
    fn from(array: [RGB8; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [RGB8; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability for transmitting both panel frames to the display hardware.
///
/// A single call carries both frames so implementations latch the two panels
/// back to back; any skew between them shows on the wall as tearing between
/// the top and bottom half of the canvas. Brightness travels with each call
/// because the animator's configuration owns it, not the link.
pub trait DisplayLink<const N: usize> {
    /// Transmit both frames at the given brightness (0–255) and latch.
    async fn show(
        &mut self,
        upper: &Frame1d<N>,
        lower: &Frame1d<N>,
        brightness: u8,
    ) -> Result<()>;
}

/// [`DisplayLink`] over two [`SmartLedsWrite`] writers, one per panel data
/// pin, with the caller's brightness applied at transmit time.
///
/// Any `smart-leds` compatible driver works here: PIO, SPI, or bit-banged.
/// Chipset, color order, and pin selection all live in the writer you pass in.
pub struct SmartLedsLink<U, L> {
    upper: U,
    lower: L,
}

impl<U, L> SmartLedsLink<U, L> {
    /// Bind two strip writers, one per panel data pin.
    pub const fn new(upper: U, lower: L) -> Self {
        Self { upper, lower }
    }
}

impl<const N: usize, U, L> DisplayLink<N> for SmartLedsLink<U, L>
where
    U: SmartLedsWrite<Color = RGB8>,
    L: SmartLedsWrite<Color = RGB8>,
{
    async fn show(
        &mut self,
        upper: &Frame1d<N>,
        lower: &Frame1d<N>,
        level: u8,
    ) -> Result<()> {
        self.upper
            .write(brightness(upper.iter().copied(), level))
            .map_err(|_| Error::StripWrite)?;
        self.lower
            .write(brightness(lower.iter().copied(), level))
            .map_err(|_| Error::StripWrite)?;
        Ok(())
    }
}
