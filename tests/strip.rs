#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the transmit capability, using in-memory strip
//! writers in place of real hardware.

use core::convert::Infallible;
use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use led_marquee::marquee::{Marquee32x16, MarqueeConfig};
use led_marquee::strip::{DisplayLink, Frame1d, RGB8, SmartLedsLink, colors};
use smart_leds::SmartLedsWrite;

/// Drive a transmit future to completion. The in-memory writers never yield,
/// so a no-op waker is enough.
fn run_to_completion<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}

/// Strip writer that records what would have gone down the wire.
#[derive(Default)]
struct CapturedStrip {
    pixels: Vec<RGB8>,
}

impl SmartLedsWrite for &mut CapturedStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.pixels = iterator.into_iter().map(Into::into).collect();
        Ok(())
    }
}

#[test]
fn show_transmits_both_frames_to_their_panels() {
    let mut upper_strip = CapturedStrip::default();
    let mut lower_strip = CapturedStrip::default();
    let mut link = SmartLedsLink::new(&mut upper_strip, &mut lower_strip);

    let upper = Frame1d::<4>::filled(colors::RED);
    let lower = Frame1d::<4>::filled(colors::BLUE);
    // Full brightness transmits the frames unchanged.
    run_to_completion(link.show(&upper, &lower, 255)).expect("in-memory write cannot fail");

    assert_eq!(upper_strip.pixels, vec![colors::RED; 4]);
    assert_eq!(lower_strip.pixels, vec![colors::BLUE; 4]);
}

#[test]
fn show_scales_output_by_the_given_brightness() {
    let mut upper_strip = CapturedStrip::default();
    let mut lower_strip = CapturedStrip::default();
    let mut link = SmartLedsLink::new(&mut upper_strip, &mut lower_strip);

    let frame = Frame1d::<1>::filled(RGB8::new(255, 0, 255));
    run_to_completion(link.show(&frame, &frame, 64)).expect("in-memory write cannot fail");

    // 255 scaled by 64/255 lands on 64 in smart-leds' arithmetic.
    assert_eq!(upper_strip.pixels, vec![RGB8::new(64, 0, 64)]);
    assert_eq!(lower_strip.pixels, vec![RGB8::new(64, 0, 64)]);
}

#[test]
fn config_brightness_reaches_the_strip() {
    let mut marquee = Marquee32x16::new(MarqueeConfig::new("H", colors::MAGENTA));
    while marquee.offset() != 0 {
        marquee.advance();
    }

    let mut upper_strip = CapturedStrip::default();
    let mut lower_strip = CapturedStrip::default();
    let mut link = SmartLedsLink::new(&mut upper_strip, &mut lower_strip);

    let brightness = marquee.config().brightness;
    let (upper, lower) = marquee.render_frame();
    run_to_completion(link.show(upper, lower, brightness)).expect("in-memory write cannot fail");

    // Logical (0, 4): left stem of 'H', strip index 31*8 + (7-4) on panel 1.
    // Magenta at the default brightness of 64 arrives scaled to (64, 0, 64).
    assert_eq!(upper_strip.pixels[251], RGB8::new(64, 0, 64));
    // Logical (0, 8): the stem crosses the seam; panel 2 mirrors it to index 7.
    assert_eq!(lower_strip.pixels[7], RGB8::new(64, 0, 64));
    assert_eq!(upper_strip.pixels.len(), 256);
    assert_eq!(lower_strip.pixels.len(), 256);
}
