//! # etc1_compression
//!
//! ETC1 texture block compression on the CPU.
//!
//! Every 4x4 block of RGB pixels is compressed into 8 bytes, laid out exactly like the
//! `ETC1_RGB8_OES` format GPUs sample from. The encoder searches both block orientations and all
//! eight modifier tables for the encoding with the lowest perceptually weighted error.
//!
//! Blocks are encoded and decoded independently of each other, so callers can split large
//! surfaces across threads without any coordination:
//!
//!  * [`encode::encode_block()`] and [`decode::decode_block()`] work on single blocks
//!  * [`encode::compress_pixels()`] and [`decode::decompress_blocks()`] work on whole surfaces
//!    in one of the supported [`PixelFormat`]s
mod base_color;
mod block;
mod common;
pub mod decode;
pub mod encode;
mod error;
mod format;

pub use block::{Etc1Block, PixelBlock, Rgb};
pub use error::Etc1Error;
pub use format::PixelFormat;

/// Returns the bytes per row of blocks for the given width.
///
/// The width is used to calculate how many blocks are needed per row,
/// which is then multiplied by the block size.
/// Width is rounded up to the nearest multiple of 4.
pub const fn bytes_per_row(width: u32) -> u32 {
    let blocks_per_row = width.div_ceil(4);
    blocks_per_row * Etc1Block::BYTE_SIZE as u32
}

/// Returns the byte size required for storing compressed blocks for the given dimensions.
///
/// Width and height are rounded up to the nearest multiple of 4.
pub const fn blocks_byte_size(width: u32, height: u32) -> usize {
    let block_width = (width as usize).div_ceil(4);
    let block_height = (height as usize).div_ceil(4);
    block_width * block_height * Etc1Block::BYTE_SIZE
}
