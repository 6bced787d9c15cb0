use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{key_from_bytes, permute};
use std::sync::Arc;

pub const ROUNDS: usize = 16;
pub const BLOCK_SIZE: usize = 8;

pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<u64>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        let feistel_network = FeistelNetwork::new(ROUNDS, transformation);

        DES {
            feistel_network,
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    /// Installs a key given as a packed 64-bit word and derives the round
    /// keys. The word form cannot have a wrong length, so this never fails.
    pub fn set_key_word(&mut self, key: u64) {
        self.round_keys = self.key_expansion.generate_round_keys(key);
    }

    /// The derived subkeys, in encryption order.
    pub fn round_keys(&self) -> &[u64] {
        &self.round_keys
    }

    pub fn encrypt_block_word(&self, block: u64) -> u64 {
        let permuted = permute(block, 64, &IP);
        let preoutput = self
            .feistel_network
            .encrypt_with_round_keys(permuted, &self.round_keys);
        permute(preoutput, 64, &FP)
    }

    pub fn decrypt_block_word(&self, block: u64) -> u64 {
        let permuted = permute(block, 64, &IP);
        let preoutput = self
            .feistel_network
            .decrypt_with_round_keys(permuted, &self.round_keys);
        permute(preoutput, 64, &FP)
    }
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        debug_assert_eq!(data.len() % BLOCK_SIZE, 0);
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                let block = u64::from_be_bytes(chunk.try_into().unwrap());
                self.encrypt_block_word(block).to_be_bytes()
            })
            .collect()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        debug_assert_eq!(data.len() % BLOCK_SIZE, 0);
        data.chunks_exact(BLOCK_SIZE)
            .flat_map(|chunk| {
                let block = u64::from_be_bytes(chunk.try_into().unwrap());
                self.decrypt_block_word(block).to_be_bytes()
            })
            .collect()
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let key = key_from_bytes(key)?;
        self.set_key_word(key);
        Ok(())
    }
}

impl SymmetricCipherWithRounds for DES {
    fn set_key_with_rounds(&mut self, round_keys: &[u8]) -> Result<(), CipherError> {
        if round_keys.len() != ROUNDS * 8 {
            return Err(CipherError::LengthMismatch {
                expected: ROUNDS * 8,
                actual: round_keys.len(),
            });
        }
        self.round_keys = round_keys
            .chunks_exact(8)
            .map(|chunk| u64::from_be_bytes(chunk.try_into().unwrap()))
            .collect();
        Ok(())
    }

    fn encrypt_block(&self, data: &[u8], _round_keys: &[u8]) -> Vec<u8> {
        CipherAlgorithm::encrypt(self, data)
    }

    fn decrypt_block(&self, data: &[u8], _round_keys: &[u8]) -> Vec<u8> {
        CipherAlgorithm::decrypt(self, data)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Subkeys as big-endian words, one 8-byte word per round.
    fn export_round_keys(&self) -> Option<Vec<u8>> {
        Some(
            self.round_keys
                .iter()
                .flat_map(|&round_key| round_key.to_be_bytes())
                .collect(),
        )
    }
}
