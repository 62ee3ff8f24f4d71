use soroban_sdk::{contracttype, String};

use super::price::Price;

/// Latest accepted observation for a pair. Replaced as a whole on every update.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeed {
    pub attestation_timestamp: u64,
    pub pair: String,
    pub price: Price,
}
