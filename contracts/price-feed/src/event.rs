use price_feed_interface::types::price_feed::PriceFeed;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(topics, ());
}

pub(crate) fn price_feed_updated(e: &Env, feed: &PriceFeed) {
    let topics = (Symbol::new(e, "price_feed_updated"), feed.pair.clone());
    e.events().publish(
        topics,
        (
            feed.price.price,
            feed.price.confidence,
            feed.attestation_timestamp,
        ),
    );
}
