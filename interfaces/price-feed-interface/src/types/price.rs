use soroban_sdk::contracttype;

/// Price observation with 8 implied decimal places.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Price {
    pub price: u64,
    /// Symmetric +/- interval, same scale as `price`.
    pub confidence: u64,
}
