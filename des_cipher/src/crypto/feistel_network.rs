use crate::crypto::encryption_transformation::EncryptionTransformation;
use std::sync::Arc;

pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
        }
    }

    /// Runs the rounds over a block that has already been through the
    /// initial permutation. The returned pre-output word has the final
    /// half swap applied and still needs the final permutation.
    pub fn encrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        debug_assert_eq!(round_keys.len(), self.num_rounds);

        let mut left = (block >> 32) as u32;
        let mut right = block as u32;

        for &round_key in round_keys {
            let feistel_out = self.transformation.transform(right, round_key);
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
        }

        ((right as u64) << 32) | left as u64
    }

    /// Identical structure to encryption with the subkey order reversed;
    /// that reversal alone is what inverts the network.
    pub fn decrypt_with_round_keys(&self, block: u64, round_keys: &[u64]) -> u64 {
        debug_assert_eq!(round_keys.len(), self.num_rounds);

        let mut left = (block >> 32) as u32;
        let mut right = block as u32;

        for &round_key in round_keys.iter().rev() {
            let feistel_out = self.transformation.transform(right, round_key);
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
        }

        ((right as u64) << 32) | left as u64
    }
}
