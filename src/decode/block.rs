use crate::{
    base_color::BaseColorPair,
    block::{Etc1Block, Rgb},
    common::{clamp_channel, index_bit_offset, sub_block_pixels, MODIFIER_TABLES},
};

/// Decodes an ETC1 block into 16 RGB pixels in row-major order.
pub fn decode_block(block: &Etc1Block) -> [Rgb; 16] {
    let low = block.low();
    let flip = block.is_flipped();
    let base_colors = BaseColorPair::from_header(block.high());
    let table_indices = block.table_indices();

    let mut decompressed_block = [[0; 3]; 16];

    for second in [false, true] {
        let half = second as usize;
        let base = base_colors.colors[half];
        let table = &MODIFIER_TABLES[table_indices[half]];

        for (x, y) in sub_block_pixels(flip, second) {
            let offset = index_bit_offset(x, y);
            let index = ((low >> offset) & 1) | ((low >> (offset + 15)) & 2);
            let modifier = table[index as usize];

            decompressed_block[x + 4 * y] = base.map(|c| clamp_channel(c as i32 + modifier));
        }
    }

    decompressed_block
}
