use price_feed_interface::types::error::Error;
use price_feed_interface::types::price_feed::PriceFeed;
use soroban_sdk::Env;

/// A feed attested in the future relative to `now` is never fresh.
pub fn is_fresh(now: u64, timestamp: u64, max_age: u64) -> bool {
    match now.checked_sub(timestamp) {
        Some(age) => age <= max_age,
        None => false,
    }
}

pub fn require_fresh(env: &Env, feed: &PriceFeed, max_age: u64) -> Result<(), Error> {
    let now = env.ledger().timestamp();

    if !is_fresh(now, feed.attestation_timestamp, max_age) {
        return Err(Error::StalePrice);
    }

    Ok(())
}
