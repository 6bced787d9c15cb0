use crate::crypto::error::CipherError;
use bitvec::prelude::*;
use rand::RngCore;

pub const KEY_BITS: usize = 64;

/// Applies a 1-indexed permutation table to the low `width` bits of `input`.
/// Entry `i` of the table selects bit `i` counted from the most significant
/// bit of the `width`-bit value. The output is `table.len()` bits wide.
pub fn permute(input: u64, width: u32, table: &[u8]) -> u64 {
    debug_assert!(
        table.iter().all(|&pos| pos >= 1 && (pos as u32) <= width),
        "permutation entry out of range"
    );
    let mut output = 0u64;
    for &pos in table {
        output = (output << 1) | ((input >> (width - pos as u32)) & 1);
    }
    output
}

/// Circular left rotation within the low 28 bits.
pub fn rotate_left_28(half: u32, shift: u32) -> u32 {
    debug_assert!(shift < 28);
    ((half << shift) | (half >> (28 - shift))) & 0x0FFF_FFFF
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Treats every character as its 8-bit code unit, most significant bit first.
/// Characters above U+00FF have no 8-bit image and are rejected.
pub fn text_to_bits(text: &str) -> Result<BitVec, CipherError> {
    let mut bits = BitVec::with_capacity(text.len() * 8);
    for ch in text.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(CipherError::EncodingOverflow(ch));
        }
        for i in (0..8).rev() {
            bits.push((code >> i) & 1 != 0);
        }
    }
    Ok(bits)
}

/// Four bits per hex digit; odd digit counts are allowed, the framer pads
/// the stream to whole blocks afterwards.
pub fn hex_to_bits(hex: &str) -> Result<BitVec, CipherError> {
    let mut bits = BitVec::with_capacity(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch.to_digit(16).ok_or(CipherError::InvalidHexDigit(ch))?;
        for i in (0..4).rev() {
            bits.push((nibble >> i) & 1 != 0);
        }
    }
    Ok(bits)
}

/// Renders a bit sequence as lowercase hex, zero-padding on the left to a
/// whole number of digits.
pub fn bits_to_hex(bits: &BitSlice) -> String {
    let mut padded: BitVec = BitVec::new();
    if bits.len() % 4 != 0 {
        padded.resize(4 - bits.len() % 4, false);
    }
    padded.extend_from_bitslice(bits);

    padded
        .chunks(4)
        .map(|chunk| {
            let mut nibble = 0u32;
            for bit in chunk {
                nibble = (nibble << 1) | (*bit as u32);
            }
            char::from_digit(nibble, 16).unwrap()
        })
        .collect()
}

/// Packs an 8-byte key into a word, most significant byte first.
pub fn key_from_bytes(key: &[u8]) -> Result<u64, CipherError> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| CipherError::InvalidKeyLength(key.len() * 8))?;
    Ok(u64::from_be_bytes(bytes))
}

/// Parses a 16-digit hex key.
pub fn key_from_hex(key: &str) -> Result<u64, CipherError> {
    if key.len() != KEY_BITS / 4 {
        return Err(CipherError::InvalidKeyLength(key.len() * 4));
    }
    let bytes = hex::decode(key).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, .. } => CipherError::InvalidHexDigit(c),
        _ => CipherError::InvalidKeyLength(key.len() * 4),
    })?;
    key_from_bytes(&bytes)
}

/// Parses a key given as 64 `'0'`/`'1'` characters.
pub fn key_from_bit_string(key: &str) -> Result<u64, CipherError> {
    let length = key.chars().count();
    if length != KEY_BITS {
        return Err(CipherError::InvalidKeyLength(length));
    }
    let mut word = 0u64;
    for ch in key.chars() {
        word = (word << 1)
            | match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(CipherError::InvalidBitDigit(ch)),
            };
    }
    Ok(word)
}

/// Draws a fresh 64-bit key from the caller's generator. The quality of the
/// randomness is entirely the caller's concern.
pub fn generate_key<R: RngCore + ?Sized>(rng: &mut R) -> u64 {
    rng.next_u64()
}
