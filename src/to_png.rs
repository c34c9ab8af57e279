#![cfg(feature = "host")]
//! PNG previews of the logical canvas, for docs and hardware-free inspection.
//!
//! Each LED becomes a filled disc on a dark background, stacked as the
//! logical `W`×`2H` canvas (both panels), so the preview shows what the wall
//! shows, not the strip order.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};
use smart_leds::RGB8;

use crate::canvas::Canvas;

/// Preview pixels per LED cell.
const CELL_SIZE: u32 = 16;
/// Gap between the disc and its cell edge.
const LED_MARGIN: u32 = 2;
/// Unlit background channel value, so the panel grid stays visible.
const BACKGROUND: u8 = 12;

/// Write a still preview of the canvas to `output_path`.
pub fn write_canvas_png<const N: usize, const W: usize, const H: usize>(
    canvas: &Canvas<N, W, H>,
    output_path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let (width, height, pixels) = canvas_pixels(canvas);
    let file = File::create(output_path.as_ref())?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    Ok(())
}

/// Write a looping APNG of a canvas sequence (for example one scroll cycle).
pub fn write_canvas_apng<const N: usize, const W: usize, const H: usize>(
    frames: &[Canvas<N, W, H>],
    output_path: impl AsRef<Path>,
    frame_delay_ms: u16,
) -> Result<(), Box<dyn Error>> {
    assert!(!frames.is_empty(), "frames must not be empty");
    assert!(frame_delay_ms > 0, "frame_delay_ms must be positive");

    let (width, height, first) = canvas_pixels(&frames[0]);
    let frame_count = u32::try_from(frames.len())?;

    let file = File::create(output_path.as_ref())?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_animated(frame_count, 0)?;
    let mut writer = encoder.write_header()?;

    writer.set_frame_delay(frame_delay_ms, 1000)?;
    writer.write_image_data(&first)?;
    for canvas in frames.iter().skip(1) {
        let (_, _, pixels) = canvas_pixels(canvas);
        writer.set_frame_delay(frame_delay_ms, 1000)?;
        writer.write_image_data(&pixels)?;
    }
    writer.finish()?;
    Ok(())
}

fn canvas_pixels<const N: usize, const W: usize, const H: usize>(
    canvas: &Canvas<N, W, H>,
) -> (u32, u32, Vec<u8>) {
    let width = W as u32 * CELL_SIZE;
    let height = (2 * H) as u32 * CELL_SIZE;
    let mut bytes = vec![BACKGROUND; (width * height * 3) as usize];

    let center = (CELL_SIZE - 1) as i32 / 2;
    let radius = (CELL_SIZE / 2 - LED_MARGIN) as i32;
    let radius_sq = radius * radius;

    for logical_y in 0..2 * H {
        for logical_x in 0..W {
            let color = canvas
                .pixel(logical_x as i32, logical_y as i32)
                .unwrap_or(RGB8::new(0, 0, 0));
            let cell_origin_x = logical_x as u32 * CELL_SIZE;
            let cell_origin_y = logical_y as u32 * CELL_SIZE;
            for local_y in 0..CELL_SIZE {
                let delta_y = local_y as i32 - center;
                for local_x in 0..CELL_SIZE {
                    let delta_x = local_x as i32 - center;
                    if delta_x * delta_x + delta_y * delta_y > radius_sq {
                        continue;
                    }
                    let x = cell_origin_x + local_x;
                    let y = cell_origin_y + local_y;
                    let offset = ((y * width + x) * 3) as usize;
                    bytes[offset] = color.r;
                    bytes[offset + 1] = color.g;
                    bytes[offset + 2] = color.b;
                }
            }
        }
    }

    (width, height, bytes)
}
