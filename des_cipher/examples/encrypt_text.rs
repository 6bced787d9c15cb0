use des_cipher::crypto::cipher_context::CipherContext;
use des_cipher::crypto::cipher_types::{CipherInput, CipherOutput, Encoding};
use des_cipher::crypto::des::DES;
use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
use des_cipher::crypto::des_transformation::DesTransformation;
use des_cipher::crypto::error::CipherError;
use des_cipher::crypto::utils::generate_key;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), CipherError> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog.";
    let key = generate_key(&mut rand::rng());

    let des = DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation));
    let mut ctx = CipherContext::new(Box::new(des));
    ctx.set_key(&key.to_be_bytes())?;

    let mut encrypted = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.encrypt(
        CipherInput::Text(text.to_string()),
        Encoding::Hex,
        &mut encrypted,
    )
    .await?;
    let ciphertext = match encrypted {
        CipherOutput::Buffer(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
        CipherOutput::File(_) => unreachable!(),
    };

    println!("key:        {:016x}", key);
    println!("ciphertext: {}", ciphertext);

    let mut decrypted = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.decrypt(CipherInput::Hex(ciphertext), Encoding::Bytes, &mut decrypted)
        .await?;
    let plaintext = match decrypted {
        CipherOutput::Buffer(buffer) => *buffer,
        CipherOutput::File(_) => unreachable!(),
    };

    assert_eq!(plaintext, text.as_bytes());
    println!("plaintext:  {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
