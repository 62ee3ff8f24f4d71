#![deny(warnings)]
#![no_std]

use common::PRICE_DECIMALS;
use methods::{
    get_price::get_price, get_price_no_older_than::get_price_no_older_than,
    get_price_unsafe::get_price_unsafe, initialize::initialize,
    update_price_feed::update_price_feed,
};
use price_feed_interface::types::{error::Error, price::Price};
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct PriceFeedRegistry;

#[contractimpl]
impl PriceFeedTrait for PriceFeedRegistry {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        reported(initialize(&env, &admin))
    }

    fn update_price_feed(
        env: Env,
        caller: Address,
        pair: String,
        price: u64,
        confidence: u64,
    ) -> Result<(), Error> {
        reported(update_price_feed(&env, &caller, &pair, price, confidence))
    }

    fn get_price(env: Env, pair: String) -> Result<Price, Error> {
        reported(get_price(&env, &pair))
    }

    fn get_price_no_older_than(
        env: Env,
        pair: String,
        maximum_age_seconds: u64,
    ) -> Result<Price, Error> {
        reported(get_price_no_older_than(&env, &pair, maximum_age_seconds))
    }

    fn get_price_unsafe(env: Env, pair: String) -> Result<(Price, u64), Error> {
        reported(get_price_unsafe(&env, &pair))
    }

    fn admin(env: Env) -> Option<Address> {
        read_admin(&env).ok()
    }

    fn pairs(env: Env) -> Vec<String> {
        read_pairs(&env)
    }

    fn update_count(env: Env) -> u64 {
        read_update_count(&env)
    }

    fn decimals(_env: Env) -> u32 {
        PRICE_DECIMALS
    }

    fn version() -> u32 {
        1
    }
}

/// With `opaque-errors` every failure leaves the contract as the same code.
fn reported<T>(result: Result<T, Error>) -> Result<T, Error> {
    if cfg!(feature = "opaque-errors") {
        result.map_err(|_| Error::OperationFailed)
    } else {
        result
    }
}
