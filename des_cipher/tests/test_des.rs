use des_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
use des_cipher::crypto::des::DES;
use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
use des_cipher::crypto::des_tables::{FP, IP};
use des_cipher::crypto::des_transformation::DesTransformation;
use des_cipher::crypto::error::CipherError;
use des_cipher::crypto::feistel_network::FeistelNetwork;
use des_cipher::crypto::utils::permute;
use rand::{rng, Rng};
use std::sync::Arc;

fn des_with_key(key: u64) -> DES {
    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    des.set_key_word(key);
    des
}

#[test]
fn test_published_reference_vector() {
    let des = des_with_key(0x133457799BBCDFF1);

    let ciphertext = des.encrypt_block_word(0x0123456789ABCDEF);
    assert_eq!(ciphertext, 0x85E813540F0AB405);

    let decrypted = des.decrypt_block_word(ciphertext);
    assert_eq!(decrypted, 0x0123456789ABCDEF);
}

#[test]
fn test_reference_vector_byte_api() {
    let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex_literal::hex!("01 23 45 67 89 AB CD EF");
    let expected_ciphertext = hex_literal::hex!("85 E8 13 54 0F 0A B4 05");

    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    des.set_key(&key).unwrap();

    let ciphertext = CipherAlgorithm::encrypt(&des, &plaintext);
    assert_eq!(ciphertext, expected_ciphertext);

    let decrypted = CipherAlgorithm::decrypt(&des, &ciphertext);
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_round_trip_random_blocks() {
    let mut rng = rng();
    for _ in 0..100 {
        let des = des_with_key(rng.random());
        let block: u64 = rng.random();
        assert_eq!(des.decrypt_block_word(des.encrypt_block_word(block)), block);
    }
}

#[test]
fn test_same_key_gives_same_ciphertext() {
    let first = des_with_key(0x0E329232EA6D0D73);
    let second = des_with_key(0x0E329232EA6D0D73);
    assert_eq!(
        first.encrypt_block_word(0x8787878787878787),
        second.encrypt_block_word(0x8787878787878787)
    );
}

#[test]
fn test_forward_subkey_order_does_not_decrypt() {
    // Driving the rounds in encryption order over a ciphertext must not
    // restore the plaintext; only the reversed order inverts the network.
    let des = des_with_key(0x133457799BBCDFF1);
    let ciphertext = des.encrypt_block_word(0x0123456789ABCDEF);

    let network = FeistelNetwork::new(16, Arc::new(DesTransformation));
    let permuted = permute(ciphertext, 64, &IP);
    let preoutput = network.encrypt_with_round_keys(permuted, des.round_keys());
    let forward_result = permute(preoutput, 64, &FP);

    assert_ne!(forward_result, 0x0123456789ABCDEF);
}

#[test]
fn test_set_key_rejects_wrong_length() {
    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    assert!(matches!(
        des.set_key(&[0u8; 7]),
        Err(CipherError::InvalidKeyLength(56))
    ));
}

#[test]
fn test_export_import_round_keys() {
    let des = des_with_key(0x133457799BBCDFF1);
    let material = des.export_round_keys().unwrap();
    assert_eq!(material.len(), 16 * 8);

    let mut other = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    other.set_key_with_rounds(&material).unwrap();
    assert_eq!(
        other.encrypt_block_word(0x0123456789ABCDEF),
        0x85E813540F0AB405
    );
}

#[test]
fn test_import_rejects_truncated_material() {
    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    assert!(matches!(
        des.set_key_with_rounds(&[0u8; 90]),
        Err(CipherError::LengthMismatch {
            expected: 128,
            actual: 90
        })
    ));
}
