#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, String, Vec};
use types::error::Error;
use types::price::Price;

pub mod types;

pub struct Spec;

/// Push-model price feed registry interface
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedTrait {
    /// Store the administrative credential. Callable once.
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;

    /// Publish the latest price and confidence for a pair. Admin only.
    fn update_price_feed(
        env: Env,
        caller: Address,
        pair: String,
        price: u64,
        confidence: u64,
    ) -> Result<(), Error>;

    /// Get the latest price if it is no older than the default maximum age (3 hours)
    fn get_price(env: Env, pair: String) -> Result<Price, Error>;

    /// Get the latest price if it is no older than `maximum_age_seconds`
    fn get_price_no_older_than(
        env: Env,
        pair: String,
        maximum_age_seconds: u64,
    ) -> Result<Price, Error>;

    /// Get the latest price and its attestation timestamp without checking its age
    fn get_price_unsafe(env: Env, pair: String) -> Result<(Price, u64), Error>;

    fn admin(env: Env) -> Option<Address>;

    /// Return all pairs ever published, in order of the first update
    fn pairs(env: Env) -> Vec<String>;

    /// Return the number of successful price updates
    fn update_count(env: Env) -> u64;

    /// Return the number of decimals of prices and confidences
    fn decimals(env: Env) -> u32;

    fn version() -> u32;
}
