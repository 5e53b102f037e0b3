use log::trace;

use crate::{
    base_color::BaseColorPair,
    block::{Etc1Block, PixelBlock, Rgb},
    common::{
        clamp_channel, index_bit_offset, sq, sub_block_pixels, ERROR_WEIGHTS, MODIFIER_TABLES,
    },
};

/// A scored encoding, or part of one, found during the search.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Candidate {
    score: u32,
    high: u32,
    low: u32,
}

impl Candidate {
    const WORST: Self = Self {
        score: u32::MAX,
        high: 0,
        low: 0,
    };

    /// Keeps `other` only if it is strictly better, so earlier candidates win ties.
    #[inline(always)]
    fn take_best(&mut self, other: Candidate) {
        if other.score < self.score {
            *self = other;
        }
    }
}

pub(crate) struct BlockCompressorEtc1<'a> {
    block: &'a PixelBlock,
}

impl<'a> BlockCompressorEtc1<'a> {
    pub(crate) fn new(block: &'a PixelBlock) -> Self {
        Self { block }
    }

    /// Searches both orientations and all modifier tables for the encoding with the
    /// lowest weighted error.
    pub(crate) fn compress_block_etc1_core(&self) -> Etc1Block {
        let mut best = self.compress_orientation(false);
        let flipped = self.compress_orientation(true);

        trace!(
            "etc1 block scores: unflipped {}, flipped {}",
            best.score,
            flipped.score
        );

        best.take_best(flipped);

        Etc1Block::from_words(best.high, best.low)
    }

    fn compress_orientation(&self, flip: bool) -> Candidate {
        let averages = [
            self.average_sub_block(flip, false),
            self.average_sub_block(flip, true),
        ];
        let base_colors = BaseColorPair::encode(averages);

        let mut result = Candidate {
            score: 0,
            high: base_colors.header_bits() | flip as u32,
            low: 0,
        };

        for (second, table_shift) in [(false, 5), (true, 2)] {
            let base = base_colors.colors[second as usize];
            let mut best = Candidate::WORST;

            for (table_index, table) in MODIFIER_TABLES.iter().enumerate() {
                let (score, low) = self.choose_modifiers(base, table, flip, second);

                best.take_best(Candidate {
                    score,
                    high: (table_index as u32) << table_shift,
                    low,
                });
            }

            result.score += best.score;
            result.high |= best.high;
            result.low |= best.low;
        }

        result
    }

    /// Rounded mean color of the valid pixels of one half. A half without any valid pixel
    /// averages to black.
    fn average_sub_block(&self, flip: bool, second: bool) -> Rgb {
        let mut sum = [0u32; 3];
        let mut count = 0;

        for (x, y) in sub_block_pixels(flip, second) {
            if !self.block.is_valid(x, y) {
                continue;
            }

            let pixel = self.block.pixel(x, y);
            for (acc, value) in sum.iter_mut().zip(pixel) {
                *acc += value as u32;
            }
            count += 1;
        }

        if count == 0 {
            return [0; 3];
        }

        sum.map(|acc| ((acc + count / 2) / count) as u8)
    }

    /// Picks the best table entry for every valid pixel of one half.
    ///
    /// Returns the accumulated error and the index bits of the half. Invalid pixels keep
    /// index 0 and add no error.
    fn choose_modifiers(
        &self,
        base: Rgb,
        table: &[i32; 4],
        flip: bool,
        second: bool,
    ) -> (u32, u32) {
        let mut score = 0;
        let mut low = 0;

        for (x, y) in sub_block_pixels(flip, second) {
            if !self.block.is_valid(x, y) {
                continue;
            }

            let (index, pixel_score) = best_modifier(base, self.block.pixel(x, y), table);
            let offset = index_bit_offset(x, y);

            score += pixel_score;
            low |= ((index & 1) << offset) | ((index >> 1) << (offset + 16));
        }

        (score, low)
    }
}

/// Returns the index of the table entry closest to `pixel` and its weighted error.
#[inline(always)]
fn best_modifier(base: Rgb, pixel: Rgb, table: &[i32; 4]) -> (u32, u32) {
    let mut best_score = u32::MAX;
    let mut best_index = 0;

    'entries: for (index, &modifier) in table.iter().enumerate() {
        let mut score = 0;

        // Green carries the largest weight, so bad entries are rejected early.
        for channel in [1, 0, 2] {
            let decoded = clamp_channel(base[channel] as i32 + modifier) as i32;
            score += ERROR_WEIGHTS[channel] * sq(decoded - pixel[channel] as i32);

            if score >= best_score {
                continue 'entries;
            }
        }

        best_score = score;
        best_index = index as u32;
    }

    (best_index, best_score)
}
