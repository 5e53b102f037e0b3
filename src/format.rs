use crate::{
    block::Rgb,
    common::{expand_5bit, expand_6bit},
    Etc1Error,
};

/// Pixel layouts of uncompressed surfaces.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum PixelFormat {
    /// Three bytes per pixel in R, G, B order.
    Rgb8,
    /// Two bytes per pixel, a little-endian `u16` with 5 bits red, 6 bits green and 5 bits
    /// blue from the most to the least significant bit.
    Rgb565,
}

impl PixelFormat {
    /// Returns the size of a pixel in bytes.
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgb565 => 2,
        }
    }

    /// Returns the number of bytes a surface with the given dimensions and stride spans.
    ///
    /// The last row only needs to hold `width` pixels, so it may be shorter than `stride`.
    pub fn surface_byte_size(self, width: u32, height: u32, stride: u32) -> Result<usize, Etc1Error> {
        let row_size = width as usize * self.bytes_per_pixel() as usize;
        let stride = stride as usize;

        if stride < row_size {
            return Err(Etc1Error::StrideTooSmall {
                needed: row_size,
                actual: stride,
            });
        }

        if height == 0 {
            return Ok(0);
        }

        Ok((height as usize - 1) * stride + row_size)
    }
}

/// Reads and writes single pixels of one [`PixelFormat`].
pub(crate) trait PixelLayout {
    const BYTES_PER_PIXEL: usize;

    fn read(src: &[u8]) -> Rgb;

    fn write(dst: &mut [u8], rgb: Rgb);
}

pub(crate) struct Rgb8Layout;

pub(crate) struct Rgb565Layout;

impl PixelLayout for Rgb8Layout {
    const BYTES_PER_PIXEL: usize = PixelFormat::Rgb8.bytes_per_pixel() as usize;

    #[inline(always)]
    fn read(src: &[u8]) -> Rgb {
        [src[0], src[1], src[2]]
    }

    #[inline(always)]
    fn write(dst: &mut [u8], rgb: Rgb) {
        dst[..3].copy_from_slice(&rgb);
    }
}

impl PixelLayout for Rgb565Layout {
    const BYTES_PER_PIXEL: usize = PixelFormat::Rgb565.bytes_per_pixel() as usize;

    #[inline(always)]
    fn read(src: &[u8]) -> Rgb {
        let pixel = u16::from_le_bytes([src[0], src[1]]) as u32;

        [
            expand_5bit(pixel >> 11),
            expand_6bit(pixel >> 5),
            expand_5bit(pixel),
        ]
    }

    #[inline(always)]
    fn write(dst: &mut [u8], rgb: Rgb) {
        let [r, g, b] = rgb.map(u16::from);
        let pixel = ((r >> 3) << 11) | ((g >> 2) << 5) | (b >> 3);

        dst[..2].copy_from_slice(&pixel.to_le_bytes());
    }
}
