use thiserror::Error;

/// Errors returned when a surface does not match the buffers handed in.
///
/// Single blocks can't fail, these only come from the surface level helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Etc1Error {
    /// The row stride is smaller than a tightly packed row of pixels.
    #[error("Stride too small: a row needs {needed} bytes, got {actual}")]
    StrideTooSmall { needed: usize, actual: usize },

    /// The pixel data ends before the last row of the surface.
    #[error("Pixel buffer too small: needed {needed}, got {actual}")]
    PixelBufferTooSmall { needed: usize, actual: usize },

    /// The destination can't hold all compressed blocks of the surface.
    #[error("Blocks buffer too small: needed {needed}, got {actual}")]
    BlocksBufferTooSmall { needed: usize, actual: usize },

    /// The compressed data doesn't contain exactly one block per 4x4 cell.
    #[error("Invalid bitstream length: expected {expected}, got {actual}")]
    UnexpectedBitstreamSize { expected: usize, actual: usize },

    /// The destination can't hold all decoded rows of the surface.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall { needed: usize, actual: usize },
}
