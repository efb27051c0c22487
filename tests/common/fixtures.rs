//! Test fixtures: synthetic images encoded in memory.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Encode an RGBA image in the given format
pub fn encode(img: RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    let img = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8()),
        _ => DynamicImage::ImageRgba8(img),
    };
    img.write_to(&mut out, format).expect("Failed to encode fixture");
    out.into_inner()
}

/// A single-color PNG
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode(RgbaImage::from_pixel(width, height, Rgba(rgba)), ImageFormat::Png)
}

/// A PNG split into a left and a right half
pub fn split_png(width: u32, height: u32, left: [u8; 4], right: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba(left)
        } else {
            Rgba(right)
        }
    });
    encode(img, ImageFormat::Png)
}
