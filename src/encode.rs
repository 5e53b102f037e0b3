//! CPU based encoding.

mod etc1;

use log::debug;

use crate::{
    block::{Etc1Block, PixelBlock},
    blocks_byte_size,
    encode::etc1::BlockCompressorEtc1,
    format::{PixelLayout, Rgb565Layout, Rgb8Layout},
    Etc1Error, PixelFormat,
};

/// Compresses a single 4x4 block.
///
/// Only the pixels selected by the block's mask influence the result. Masked out pixels are
/// still written with pixel index 0 and decode to the first table entry of their half.
///
/// # Example
/// ```
/// use etc1_compression::{decode::decode_block, encode::encode_block, PixelBlock};
///
/// let block = PixelBlock::new([[255, 255, 255]; 16]);
/// let compressed = encode_block(&block);
///
/// assert_eq!(decode_block(&compressed), [[255, 255, 255]; 16]);
/// ```
pub fn encode_block(block: &PixelBlock) -> Etc1Block {
    BlockCompressorEtc1::new(block).compress_block_etc1_core()
}

/// Compresses raw RGB8 or RGB565 data into ETC1 blocks.
///
/// # Data Layout Requirements
/// The input data is expected to be in row-major order, with optional stride for padding
/// between rows. Surfaces whose dimensions are not a multiple of 4 are supported: the blocks at
/// the right and bottom edge are encoded with the pixels outside of the surface masked out.
///
/// # Buffer Requirements
/// The destination buffer must have sufficient capacity to store the compressed blocks.
/// The required size can be calculated using [`blocks_byte_size()`](crate::blocks_byte_size).
/// Blocks are written in row-major order.
///
/// # Arguments
/// * `format` - The pixel layout of `pixel_data`
/// * `pixel_data` - Source pixel data
/// * `blocks_buffer` - Destination buffer for the compressed blocks
/// * `width` - Width of the image in pixels
/// * `height` - Height of the image in pixels
/// * `stride` - Number of bytes per row in the source data (for padding).
///              Must be `width * format.bytes_per_pixel()` for tightly packed data.
///
/// # Errors
/// * If `stride` is smaller than a tightly packed row
/// * If `pixel_data` ends before the last row
/// * If `blocks_buffer` is too small to hold the compressed data
///
/// # Example
/// ```
/// use etc1_compression::{blocks_byte_size, encode::compress_pixels, PixelFormat};
///
/// let rgb_data = vec![0u8; 256 * 256 * 3]; // Your RGB data
/// let width = 256;
/// let height = 256;
/// let stride = width * 3; // Tightly packed rows
///
/// let mut blocks_buffer = vec![0u8; blocks_byte_size(width, height)];
///
/// compress_pixels(
///     PixelFormat::Rgb8,
///     &rgb_data,
///     &mut blocks_buffer,
///     width,
///     height,
///     stride,
/// )
/// .unwrap();
/// ```
pub fn compress_pixels(
    format: PixelFormat,
    pixel_data: &[u8],
    blocks_buffer: &mut [u8],
    width: u32,
    height: u32,
    stride: u32,
) -> Result<(), Etc1Error> {
    let needed = format.surface_byte_size(width, height, stride)?;
    if pixel_data.len() < needed {
        return Err(Etc1Error::PixelBufferTooSmall {
            needed,
            actual: pixel_data.len(),
        });
    }

    let required_size = blocks_byte_size(width, height);
    if blocks_buffer.len() < required_size {
        return Err(Etc1Error::BlocksBufferTooSmall {
            needed: required_size,
            actual: blocks_buffer.len(),
        });
    }

    debug!(
        "compressing {width}x{height} {format:?} surface into {} etc1 blocks",
        required_size / Etc1Block::BYTE_SIZE
    );

    let blocks: &mut [Etc1Block] = bytemuck::cast_slice_mut(&mut blocks_buffer[..required_size]);
    let surface = Surface {
        width: width as usize,
        height: height as usize,
        stride: stride as usize,
    };

    match format {
        PixelFormat::Rgb8 => compress::<Rgb8Layout>(pixel_data, blocks, surface),
        PixelFormat::Rgb565 => compress::<Rgb565Layout>(pixel_data, blocks, surface),
    }

    Ok(())
}

#[derive(Copy, Clone)]
struct Surface {
    width: usize,
    height: usize,
    stride: usize,
}

fn compress<L: PixelLayout>(pixel_data: &[u8], blocks: &mut [Etc1Block], surface: Surface) {
    let block_width = surface.width.div_ceil(4);
    let block_height = surface.height.div_ceil(4);

    for yy in 0..block_height {
        for xx in 0..block_width {
            let block = load_block::<L>(pixel_data, xx, yy, surface);
            blocks[yy * block_width + xx] = encode_block(&block);
        }
    }
}

/// Copies the pixels of the 4x4 cell at block position `(xx, yy)` that lie inside the surface.
fn load_block<L: PixelLayout>(pixel_data: &[u8], xx: usize, yy: usize, surface: Surface) -> PixelBlock {
    let mut pixels = [[0; 3]; 16];
    let mut mask = 0;

    for y in 0..4 {
        let pixel_y = yy * 4 + y;
        if pixel_y >= surface.height {
            break;
        }

        for x in 0..4 {
            let pixel_x = xx * 4 + x;
            if pixel_x >= surface.width {
                break;
            }

            let offset = pixel_y * surface.stride + pixel_x * L::BYTES_PER_PIXEL;
            pixels[y * 4 + x] = L::read(&pixel_data[offset..]);
            mask |= 1 << (y * 4 + x);
        }
    }

    PixelBlock::from_parts(pixels, mask)
}
