use bytemuck::{Pod, Zeroable};

/// An 8 bit per channel RGB pixel.
pub type Rgb = [u8; 3];

/// A 4x4 block of RGB pixels in row-major order, together with a validity mask.
///
/// Bit `x + 4 * y` of the mask marks pixel `(x, y)` as valid. Only valid pixels are considered
/// while searching for the best encoding, which lets callers encode the partially covered
/// blocks at the right and bottom edge of an image.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PixelBlock {
    pixels: [Rgb; 16],
    mask: u16,
}

impl PixelBlock {
    /// Mask with every pixel of the block marked as valid.
    pub const FULL_MASK: u16 = 0xFFFF;

    /// Creates a block where every pixel is valid.
    pub const fn new(pixels: [Rgb; 16]) -> Self {
        Self {
            pixels,
            mask: Self::FULL_MASK,
        }
    }

    /// Creates a block where only the pixels selected by `mask` are valid.
    ///
    /// Returns `None` if the mask selects no pixel at all.
    pub const fn with_mask(pixels: [Rgb; 16], mask: u16) -> Option<Self> {
        if mask == 0 {
            return None;
        }

        Some(Self { pixels, mask })
    }

    pub(crate) const fn from_parts(pixels: [Rgb; 16], mask: u16) -> Self {
        Self { pixels, mask }
    }

    /// The pixels of the block in row-major order.
    pub const fn pixels(&self) -> &[Rgb; 16] {
        &self.pixels
    }

    /// The validity mask of the block.
    pub const fn mask(&self) -> u16 {
        self.mask
    }

    #[inline(always)]
    pub(crate) const fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[x + y * 4]
    }

    #[inline(always)]
    pub(crate) const fn is_valid(&self, x: usize, y: usize) -> bool {
        self.mask & (1 << (x + y * 4)) != 0
    }
}

/// A compressed ETC1 block.
///
/// The first four bytes hold the big-endian header word with the base colors, the modifier
/// table indices, the differential bit and the flip bit. The last four bytes hold the
/// big-endian pixel index word.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Etc1Block([u8; 8]);

impl Etc1Block {
    /// Size of a compressed block in bytes.
    pub const BYTE_SIZE: usize = 8;

    /// Creates a block from its raw bytes.
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Creates a block from its header and pixel index words.
    pub const fn from_words(high: u32, low: u32) -> Self {
        let high = high.to_be_bytes();
        let low = low.to_be_bytes();

        Self([
            high[0], high[1], high[2], high[3], low[0], low[1], low[2], low[3],
        ])
    }

    /// Returns the raw bytes of the block.
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    /// The header word.
    pub const fn high(self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The pixel index word.
    pub const fn low(self) -> u32 {
        u32::from_be_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }

    /// Whether the block is split into a top and bottom half instead of left and right.
    pub const fn is_flipped(self) -> bool {
        self.high() & 1 != 0
    }

    /// Whether the base colors use the differential encoding.
    pub const fn is_differential(self) -> bool {
        self.high() & 2 != 0
    }

    /// The modifier table indices of the first and the second half.
    pub const fn table_indices(self) -> [usize; 2] {
        let high = self.high();
        [((high >> 5) & 7) as usize, ((high >> 2) & 7) as usize]
    }
}

impl From<[u8; 8]> for Etc1Block {
    fn from(bytes: [u8; 8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Etc1Block> for [u8; 8] {
    fn from(block: Etc1Block) -> Self {
        block.to_bytes()
    }
}
