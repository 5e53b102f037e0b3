#![allow(dead_code)]

pub mod metrics;

use etc1_compression::PixelFormat;
use image::{Rgb, RgbImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const GRADIENT_SIZE: (u32, u32) = (64, 64);
pub const ODD_SIZE: (u32, u32) = (37, 22);

/// Smooth diagonal color ramp, the kind of content ETC1 handles well.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 2).min(255) as u8,
            (y * 2).min(255) as u8,
            255 - ((x + y).min(255) as u8),
        ])
    })
}

/// Uniformly random pixels, the worst case for any block codec.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(width, height, |_, _| Rgb([rng.gen(), rng.gen(), rng.gen()]))
}

/// Converts an image into the raw bytes of `format`, with `padding` extra bytes after every row.
///
/// Padding bytes are filled with `0xCD` so tests can check they are never read or written.
pub fn surface_bytes(image: &RgbImage, format: PixelFormat, padding: usize) -> (Vec<u8>, u32) {
    let row_size = image.width() as usize * format.bytes_per_pixel() as usize;
    let stride = row_size + padding;
    let mut data = vec![0xCD; stride * image.height() as usize];

    for (x, y, pixel) in image.enumerate_pixels() {
        let offset = y as usize * stride + x as usize * format.bytes_per_pixel() as usize;

        match format {
            PixelFormat::Rgb8 => data[offset..offset + 3].copy_from_slice(&pixel.0),
            PixelFormat::Rgb565 => {
                let [r, g, b] = pixel.0.map(u16::from);
                let packed = ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3);
                data[offset..offset + 2].copy_from_slice(&packed.to_le_bytes());
            }
        }
    }

    (data, stride as u32)
}

/// Reads a surface produced by [`surface_bytes`] or the decoder back into tightly packed RGB8.
pub fn surface_to_rgb8(
    data: &[u8],
    format: PixelFormat,
    width: u32,
    height: u32,
    stride: u32,
) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);

    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = y * stride as usize + x * format.bytes_per_pixel() as usize;

            match format {
                PixelFormat::Rgb8 => rgb.extend_from_slice(&data[offset..offset + 3]),
                PixelFormat::Rgb565 => {
                    let packed = u16::from_le_bytes([data[offset], data[offset + 1]]);
                    let r = (packed >> 11) & 0x1F;
                    let g = (packed >> 5) & 0x3F;
                    let b = packed & 0x1F;
                    rgb.extend_from_slice(&[
                        ((r << 3) | (r >> 2)) as u8,
                        ((g << 2) | (g >> 4)) as u8,
                        ((b << 3) | (b >> 2)) as u8,
                    ]);
                }
            }
        }
    }

    rgb
}
