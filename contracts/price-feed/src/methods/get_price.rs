use common::DEFAULT_MAX_AGE;
use price_feed_interface::types::error::Error;
use price_feed_interface::types::price::Price;
use soroban_sdk::{Env, String};

use super::get_price_no_older_than::get_price_no_older_than;

pub fn get_price(env: &Env, pair: &String) -> Result<Price, Error> {
    get_price_no_older_than(env, pair, DEFAULT_MAX_AGE)
}
