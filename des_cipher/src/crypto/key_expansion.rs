pub trait KeyExpansion {
    fn generate_round_keys(&self, key: u64) -> Vec<u64>;
}
