use des_cipher::crypto::des_key_expansion::DesKeyExpansion;
use des_cipher::crypto::key_expansion::KeyExpansion;

const CLASSIC_KEY: u64 = 0x133457799BBCDFF1;

#[test]
fn test_produces_sixteen_48_bit_subkeys() {
    let round_keys = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    assert_eq!(round_keys.len(), 16);
    assert!(round_keys.iter().all(|&k| k < 1 << 48));
}

#[test]
fn test_first_round_subkey() {
    let round_keys = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    assert_eq!(round_keys[0], 0x1B02EFFC7072);
}

#[test]
fn test_last_round_subkey() {
    let round_keys = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    assert_eq!(round_keys[15], 0xCB3D8B0E17F5);
}

#[test]
fn test_key_schedule_is_deterministic() {
    let first = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    let second = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    assert_eq!(first, second);
}

#[test]
fn test_different_keys_give_different_schedules() {
    let first = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    let second = DesKeyExpansion.generate_round_keys(CLASSIC_KEY ^ 0x0200);
    assert_ne!(first, second);
}

#[test]
fn test_parity_bits_do_not_reach_the_schedule() {
    // Flipping only the parity positions (every 8th bit) must leave every
    // subkey untouched.
    let parity_mask: u64 = 0x0101_0101_0101_0101;
    let first = DesKeyExpansion.generate_round_keys(CLASSIC_KEY);
    let second = DesKeyExpansion.generate_round_keys(CLASSIC_KEY ^ parity_mask);
    assert_eq!(first, second);
}
