use price_feed_interface::types::error::Error;
use price_feed_interface::types::price::Price;
use soroban_sdk::{Env, String};

use crate::storage::read_price_feed;

/// No freshness claim is made, so the attestation timestamp is returned with the price.
pub fn get_price_unsafe(env: &Env, pair: &String) -> Result<(Price, u64), Error> {
    let feed = read_price_feed(env, pair)?;

    Ok((feed.price, feed.attestation_timestamp))
}
