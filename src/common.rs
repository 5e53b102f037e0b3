/// Luma modifier tables. Entry `i` is the offset selected by pixel index `i`, stored as
/// `[a, b, -a, -b]` so that the most significant index bit negates the offset.
pub(crate) const MODIFIER_TABLES: [[i32; 4]; 8] = [
    [2, 8, -2, -8],
    [5, 17, -5, -17],
    [9, 29, -9, -29],
    [13, 42, -13, -42],
    [18, 60, -18, -60],
    [24, 80, -24, -80],
    [33, 106, -33, -106],
    [47, 183, -47, -183],
];

/// Three bit two's complement deltas of the differential mode.
pub(crate) const DELTA_LOOKUP: [i32; 8] = [0, 1, 2, 3, -4, -3, -2, -1];

/// Weights of the squared channel errors in R, G, B order.
pub(crate) const ERROR_WEIGHTS: [u32; 3] = [3, 6, 1];

#[inline(always)]
pub(crate) const fn sq(x: i32) -> u32 {
    (x * x) as u32
}

#[inline(always)]
pub(crate) const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Rounded division by 255 without a divide, exact for `d <= 255 * 31`.
#[inline(always)]
const fn divide_by_255(d: u32) -> u32 {
    (d + 128 + (d >> 8)) >> 8
}

#[inline(always)]
pub(crate) const fn quantize_4bit(c: u8) -> u32 {
    divide_by_255(c as u32 * 15)
}

#[inline(always)]
pub(crate) const fn quantize_5bit(c: u8) -> u32 {
    divide_by_255(c as u32 * 31)
}

#[inline(always)]
pub(crate) const fn expand_4bit(c: u32) -> u8 {
    let c = c & 0xF;
    ((c << 4) | c) as u8
}

#[inline(always)]
pub(crate) const fn expand_5bit(c: u32) -> u8 {
    let c = c & 0x1F;
    ((c << 3) | (c >> 2)) as u8
}

#[inline(always)]
pub(crate) const fn expand_6bit(c: u32) -> u8 {
    let c = c & 0x3F;
    ((c << 2) | (c >> 4)) as u8
}

/// Applies a 3 bit delta to a 5 bit base code and expands the result to 8 bits.
///
/// Out of range sums wrap inside the 5 bit code, the same way hardware decoders treat them.
#[inline(always)]
pub(crate) const fn apply_delta(base: u32, delta_bits: u32) -> u8 {
    let code = (base & 0x1F).wrapping_add_signed(DELTA_LOOKUP[(delta_bits & 7) as usize]);
    expand_5bit(code)
}

/// Block coordinates `(x, y)` of the 8 pixels that form one half of a block.
///
/// Unflipped blocks are split into a left and a right 2x4 column, flipped blocks into a top and
/// a bottom 4x2 row.
pub(crate) const fn sub_block_pixels(flip: bool, second: bool) -> [(usize, usize); 8] {
    let start = if second { 2 } else { 0 };
    let mut coords = [(0, 0); 8];
    let mut i = 0;

    while i < 8 {
        coords[i] = if flip {
            (i >> 1, start + (i & 1))
        } else {
            (start + (i >> 2), i & 3)
        };
        i += 1;
    }

    coords
}

/// Position of a pixel inside the least significant index plane. The most significant plane
/// uses the same position plus 16.
#[inline(always)]
pub(crate) const fn index_bit_offset(x: usize, y: usize) -> u32 {
    (y + x * 4) as u32
}
