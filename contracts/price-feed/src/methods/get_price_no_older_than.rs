use price_feed_interface::types::error::Error;
use price_feed_interface::types::price::Price;
use soroban_sdk::{Env, String};

use crate::storage::read_price_feed;

use super::utils::staleness::require_fresh;

pub fn get_price_no_older_than(
    env: &Env,
    pair: &String,
    maximum_age_seconds: u64,
) -> Result<Price, Error> {
    let feed = read_price_feed(env, pair)?;

    require_fresh(env, &feed, maximum_age_seconds)?;

    Ok(feed.price)
}
