use price_feed_interface::types::error::Error;
use price_feed_interface::types::price::Price;
use price_feed_interface::types::price_feed::PriceFeed;
use soroban_sdk::{Address, Env, String};

use crate::event;
use crate::storage::{
    append_pair, has_price_feed, read_update_count, write_price_feed, write_update_count,
};

use super::utils::validation::require_admin;

pub fn update_price_feed(
    env: &Env,
    caller: &Address,
    pair: &String,
    price: u64,
    confidence: u64,
) -> Result<(), Error> {
    require_admin(env, caller)?;

    if !has_price_feed(env, pair) {
        append_pair(env, pair);
    }

    let feed = PriceFeed {
        attestation_timestamp: env.ledger().timestamp(),
        pair: pair.clone(),
        price: Price { price, confidence },
    };

    write_price_feed(env, &feed);
    write_update_count(env, read_update_count(env).saturating_add(1));

    event::price_feed_updated(env, &feed);

    Ok(())
}
