#![cfg(feature = "host")]
#![allow(missing_docs)]
//! PNG/APNG preview smoke tests (host-only).

use std::error::Error;
use std::fs;

use led_marquee::canvas::Canvas;
use led_marquee::marquee::{Marquee32x16, MarqueeConfig};
use led_marquee::to_png::{write_canvas_apng, write_canvas_png};

#[test]
fn still_preview_is_written() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("marquee.png");

    let mut marquee = Marquee32x16::new(MarqueeConfig::default());
    while marquee.offset() != 0 {
        marquee.advance();
    }
    marquee.render_frame();
    write_canvas_png(marquee.canvas(), &path)?;

    assert!(fs::metadata(&path)?.len() > 0, "PNG must not be empty");
    Ok(())
}

#[test]
fn one_scroll_cycle_becomes_an_apng() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("marquee-cycle.png");

    let mut marquee = Marquee32x16::new(MarqueeConfig::default());
    let mut cycle: Vec<Canvas<256, 32, 8>> = Vec::new();
    loop {
        marquee.render_frame();
        cycle.push(*marquee.canvas());
        marquee.advance();
        if marquee.offset() == 32 {
            break;
        }
    }
    assert_eq!(cycle.len(), 63, "one full cycle of the default text");

    write_canvas_apng(&cycle, &path, 100)?;
    assert!(fs::metadata(&path)?.len() > 0, "APNG must not be empty");
    Ok(())
}
