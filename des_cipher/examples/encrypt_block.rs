use des_cipher::crypto::des::DES;
use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
use des_cipher::crypto::des_transformation::DesTransformation;
use des_cipher::crypto::error::CipherError;
use des_cipher::crypto::utils::key_from_hex;
use std::sync::Arc;

fn main() -> Result<(), CipherError> {
    env_logger::init();

    let key = key_from_hex("133457799BBCDFF1")?;
    let mut des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    des.set_key_word(key);

    let plaintext = 0x0123456789ABCDEF;
    let ciphertext = des.encrypt_block_word(plaintext);

    println!("key:        {:016x}", key);
    println!("plaintext:  {:016x}", plaintext);
    println!("ciphertext: {:016x}", ciphertext);
    println!("decrypted:  {:016x}", des.decrypt_block_word(ciphertext));

    Ok(())
}
