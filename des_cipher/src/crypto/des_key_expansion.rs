use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute, rotate_left_28};

// Left-rotation amount per round. The amounts sum to 28, so both halves
// return to their original alignment after the last round.
const SHIFT_BITS: [u32; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    /// Derives the sixteen 48-bit subkeys, in encryption order.
    fn generate_round_keys(&self, key: u64) -> Vec<u64> {
        // PC-1 drops the parity bits and reorders the remaining 56.
        let permuted = permute(key, 64, &PC1);
        let mut c = ((permuted >> 28) & 0x0FFF_FFFF) as u32;
        let mut d = (permuted & 0x0FFF_FFFF) as u32;

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            // Rotations accumulate: each round shifts the already-rotated
            // state of the previous round, not the original split.
            c = rotate_left_28(c, shift);
            d = rotate_left_28(d, shift);

            let cd = ((c as u64) << 28) | d as u64;
            round_keys.push(permute(cd, 56, &PC2));
        }

        round_keys
    }
}
