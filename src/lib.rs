//! Scrolling-text core for two chained, serpentine-wired WS2812 LED panels.
//!
//! Two 32×8 panels hang on a wall as one 32×16 logical canvas. The strip
//! driving them snakes through each panel's columns (entering on the right),
//! and the second panel is mounted rotated 180°. This crate owns everything
//! between "a string and a color" and "two buffers of LEDs in strip order":
//!
//! - [`canvas::wiring`] — logical `(x, y)` → strip index for one serpentine
//!   panel with reversed column addressing.
//! - [`canvas`] — the combined canvas: routes writes to the right panel
//!   buffer, mirroring the rotated second panel, with silent off-canvas
//!   clipping. Also an [`embedded-graphics`](embedded_graphics) draw target.
//! - [`font`] — the fixed 5×7 glyph set with its documented fallback.
//! - [`marquee`] — the scroll-offset state machine and frame loop.
//! - [`strip`] — physical frames and the [`strip::DisplayLink`] transmit
//!   capability; bind real hardware via any
//!   [`smart-leds`](smart_leds) writer, or a fake for tests.
//! - [`color`] — `#RRGGBB` parsing.
//!
//! There is no error taxonomy in the rendering path: off-canvas writes,
//! unknown characters, and malformed colors all clamp or fall back silently,
//! the way the physical display behaves. The only [`Error`] lives at the
//! transmit boundary.
//!
//! Build with the `host` feature for hardware-free tests and PNG previews
//! ([`to_png`]); without it the crate is `no_std`.

#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

pub mod canvas;
pub mod color;
mod error;
pub mod font;
pub mod marquee;
pub mod strip;
#[cfg(feature = "host")]
pub mod to_png;

pub use crate::error::{Error, Result};

/// Width of one stock panel in pixels.
pub const PANEL_WIDTH: usize = 32;

/// Height of one stock panel in pixels. The combined canvas is twice this.
pub const PANEL_HEIGHT: usize = 8;

/// LED count of one stock panel.
pub const PANEL_LEDS: usize = PANEL_WIDTH * PANEL_HEIGHT;
