/// Errors surfaced at the public cipher boundary. Validation happens once,
/// at the outermost call; internal steps assume structurally correct data.
#[derive(thiserror::Error, Debug)]
pub enum CipherError {
    // rejected caller input
    #[error("key must be exactly 64 bits, got {0}")]
    InvalidKeyLength(usize),

    #[error("ciphertext must be a whole number of 64-bit blocks, got {0} bits")]
    InvalidBlockLength(usize),

    #[error("character {0:?} does not fit in an 8-bit code unit")]
    EncodingOverflow(char),

    #[error("{0:?} is not a hexadecimal digit")]
    InvalidHexDigit(char),

    #[error("{0:?} is not a binary digit")]
    InvalidBitDigit(char),

    // contract violations
    #[error("round key material is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cipher context is shared and can no longer be rekeyed")]
    SharedContext,

    // file-backed input/output
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = CipherError::InvalidKeyLength(56);
        assert_eq!(format!("{}", err), "key must be exactly 64 bits, got 56");
    }

    #[test]
    fn test_display_encoding_overflow() {
        let err = CipherError::EncodingOverflow('☃');
        assert_eq!(
            format!("{}", err),
            "character '☃' does not fit in an 8-bit code unit"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = CipherError::LengthMismatch {
            expected: 128,
            actual: 96,
        };
        assert_eq!(
            format!("{}", err),
            "round key material is 96 bytes, expected 128"
        );
    }
}
