use crate::{
    block::Rgb,
    common::{
        apply_delta, expand_4bit, expand_5bit, quantize_4bit, quantize_5bit, DELTA_LOOKUP,
    },
};

/// How the two base colors of a block are stored in the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum BaseColorMode {
    /// 5 bit codes for the first half and signed 3 bit per channel deltas for the second.
    Differential { codes: [u32; 3], deltas: [i32; 3] },
    /// Independent 4 bit codes for each half.
    Individual { codes: [[u32; 3]; 2] },
}

/// The base colors of both halves of a block, as the decoder reconstructs them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct BaseColorPair {
    pub(crate) colors: [Rgb; 2],
    pub(crate) mode: BaseColorMode,
}

impl BaseColorPair {
    /// Picks the base colors for the two sub-block averages.
    ///
    /// The differential mode is used whenever the 5 bit codes of both averages are close enough
    /// for the deltas to fit into 3 bits, the individual mode otherwise.
    pub(crate) fn encode(averages: [Rgb; 2]) -> Self {
        let codes = averages[0].map(quantize_5bit);
        let second = averages[1].map(quantize_5bit);
        let deltas = [0, 1, 2].map(|c| second[c] as i32 - codes[c] as i32);

        if deltas.iter().all(|delta| (-4..=3).contains(delta)) {
            return Self {
                colors: [codes.map(expand_5bit), second.map(expand_5bit)],
                mode: BaseColorMode::Differential { codes, deltas },
            };
        }

        let codes = averages.map(|average| average.map(quantize_4bit));

        Self {
            colors: codes.map(|code| code.map(expand_4bit)),
            mode: BaseColorMode::Individual { codes },
        }
    }

    /// Reconstructs the base colors from a block header.
    pub(crate) fn from_header(high: u32) -> Self {
        if high & 2 != 0 {
            let codes = [high >> 27, high >> 19, high >> 11].map(|code| code & 0x1F);
            let delta_bits = [high >> 24, high >> 16, high >> 8].map(|bits| bits & 7);

            Self {
                colors: [
                    codes.map(expand_5bit),
                    [0, 1, 2].map(|c| apply_delta(codes[c], delta_bits[c])),
                ],
                mode: BaseColorMode::Differential {
                    codes,
                    deltas: delta_bits.map(|bits| DELTA_LOOKUP[bits as usize]),
                },
            }
        } else {
            let codes = [
                [high >> 28, high >> 20, high >> 12].map(|code| code & 0xF),
                [high >> 24, high >> 16, high >> 8].map(|code| code & 0xF),
            ];

            Self {
                colors: codes.map(|code| code.map(expand_4bit)),
                mode: BaseColorMode::Individual { codes },
            }
        }
    }

    /// The header bits holding the base colors and the differential flag.
    pub(crate) fn header_bits(&self) -> u32 {
        match self.mode {
            BaseColorMode::Differential { codes, deltas } => {
                let delta_bits = deltas.map(|delta| delta as u32 & 7);

                (codes[0] << 27)
                    | (delta_bits[0] << 24)
                    | (codes[1] << 19)
                    | (delta_bits[1] << 16)
                    | (codes[2] << 11)
                    | (delta_bits[2] << 8)
                    | 2
            }
            BaseColorMode::Individual { codes } => {
                (codes[0][0] << 28)
                    | (codes[1][0] << 24)
                    | (codes[0][1] << 20)
                    | (codes[1][1] << 16)
                    | (codes[0][2] << 12)
                    | (codes[1][2] << 8)
            }
        }
    }

    pub(crate) const fn is_differential(&self) -> bool {
        matches!(self.mode, BaseColorMode::Differential { .. })
    }
}
