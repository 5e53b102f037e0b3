//! CPU based decoding.

mod block;

use log::debug;

pub use self::block::decode_block;
use crate::{
    block::Etc1Block,
    blocks_byte_size,
    format::{PixelLayout, Rgb565Layout, Rgb8Layout},
    Etc1Error, PixelFormat,
};

/// Decompresses ETC1 blocks into raw RGB8 or RGB565 data.
///
/// Only pixels inside the surface are written, so the padding between rows and the part of
/// the edge blocks outside of the surface are left untouched.
///
/// # Arguments
/// * `format` - The pixel layout to write
/// * `width` - Width of the image in pixels
/// * `height` - Height of the image in pixels
/// * `input_bitstream` - The compressed blocks in row-major order
/// * `output_bitstream` - Destination buffer for the decoded pixels
/// * `stride` - Number of bytes per row in the destination (for padding).
///              Must be `width * format.bytes_per_pixel()` for tightly packed data.
///
/// # Errors
/// * If `input_bitstream` doesn't hold exactly [`blocks_byte_size()`](crate::blocks_byte_size)
///   bytes
/// * If `stride` is smaller than a tightly packed row
/// * If `output_bitstream` ends before the last row
pub fn decompress_blocks(
    format: PixelFormat,
    width: u32,
    height: u32,
    input_bitstream: &[u8],
    output_bitstream: &mut [u8],
    stride: u32,
) -> Result<(), Etc1Error> {
    let expected_input_size = blocks_byte_size(width, height);
    if input_bitstream.len() != expected_input_size {
        return Err(Etc1Error::UnexpectedBitstreamSize {
            expected: expected_input_size,
            actual: input_bitstream.len(),
        });
    }

    let expected_output_size = format.surface_byte_size(width, height, stride)?;
    if output_bitstream.len() < expected_output_size {
        return Err(Etc1Error::OutputBufferTooSmall {
            needed: expected_output_size,
            actual: output_bitstream.len(),
        });
    }

    debug!(
        "decompressing {} etc1 blocks into {width}x{height} {format:?} surface",
        expected_input_size / Etc1Block::BYTE_SIZE
    );

    let blocks: &[Etc1Block] = bytemuck::cast_slice(input_bitstream);
    let (width, height, stride) = (width as usize, height as usize, stride as usize);

    match format {
        PixelFormat::Rgb8 => {
            decompress::<Rgb8Layout>(blocks, output_bitstream, width, height, stride)
        }
        PixelFormat::Rgb565 => {
            decompress::<Rgb565Layout>(blocks, output_bitstream, width, height, stride)
        }
    }

    Ok(())
}

fn decompress<L: PixelLayout>(
    blocks: &[Etc1Block],
    output_bitstream: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) {
    let blocks_x = width.div_ceil(4);
    let blocks_y = height.div_ceil(4);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let decoded = decode_block(&blocks[by * blocks_x + bx]);

            let rows = (height - by * 4).min(4);
            let columns = (width - bx * 4).min(4);

            for y in 0..rows {
                let row_offset = (by * 4 + y) * stride + bx * 4 * L::BYTES_PER_PIXEL;

                for x in 0..columns {
                    let offset = row_offset + x * L::BYTES_PER_PIXEL;
                    L::write(&mut output_bitstream[offset..], decoded[y * 4 + x]);
                }
            }
        }
    }
}
