//! DES block cipher with a 16-round Feistel core, a pluggable key schedule
//! and round transformation, and a message codec over raw bytes, text and hex.

pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
pub use crypto::cipher_types::{CipherInput, CipherOutput, Encoding};
pub use crypto::des::DES;
pub use crypto::des_key_expansion::DesKeyExpansion;
pub use crypto::des_transformation::DesTransformation;
pub use crypto::error::CipherError;
pub use crypto::utils::generate_key;
