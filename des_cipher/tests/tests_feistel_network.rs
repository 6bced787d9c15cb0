use des_cipher::crypto::encryption_transformation::EncryptionTransformation;
use des_cipher::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

struct MockTransformation;

impl EncryptionTransformation for MockTransformation {
    fn transform(&self, half: u32, round_key: u64) -> u32 {
        half ^ round_key as u32
    }
}

#[test]
fn test_feistel_encrypt_decrypt_roundtrip() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));
    let round_keys = vec![0x0F, 0xF0, 0xAA];
    let block = 0x123456789ABCDEF0;

    let encrypted = network.encrypt_with_round_keys(block, &round_keys);
    let decrypted = network.decrypt_with_round_keys(encrypted, &round_keys);

    assert_eq!(decrypted, block);
}

#[test]
fn test_single_round_swaps_halves() {
    let network = FeistelNetwork::new(1, Arc::new(MockTransformation));
    let block = 0xAAAAAAAA_55555555;

    // One round with a zero key XORs the halves into the new right, then
    // the pre-output swap puts that word on top.
    let encrypted = network.encrypt_with_round_keys(block, &[0]);
    assert_eq!(encrypted, 0xFFFFFFFF_55555555);
}
