use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::permute;

pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half: u32, round_key: u64) -> u32 {
        // 1. Expand the half to 48 bits.
        let expanded = permute(half as u64, 32, &E);

        // 2. Mix in the subkey.
        let mixed = expanded ^ round_key;

        // 3. Substitute eight 6-bit groups through the S-boxes. The row
        //    index comes from the outer pair of bits, the column from the
        //    inner four.
        let mut substituted = 0u32;
        for box_index in 0..8 {
            let group = ((mixed >> (42 - 6 * box_index)) & 0x3F) as usize;
            let row = ((group >> 4) & 0b10) | (group & 1);
            let col = (group >> 1) & 0xF;
            substituted = (substituted << 4) | S_BOXES[box_index][row * 16 + col] as u32;
        }

        // 4. Final fixed permutation of the 32-bit result.
        permute(substituted as u64, 32, &P) as u32
    }
}
