use price_feed_interface::types::error::Error;
use price_feed_interface::types::price_feed::PriceFeed;
use soroban_sdk::{contracttype, vec, Address, Env, String, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_FEED_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_FEED_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PairCount,
    PairAt(u32),
    UpdateCount,
    PriceFeed(String),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn read_price_feed(env: &Env, pair: &String) -> Result<PriceFeed, Error> {
    let key = DataKey::PriceFeed(pair.clone());
    let feed = env.storage().persistent().get(&key);

    if feed.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, LOW_FEED_BUMP_LEDGERS, HIGH_FEED_BUMP_LEDGERS);
    }

    feed.ok_or(Error::UnknownPair)
}

pub fn has_price_feed(env: &Env, pair: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PriceFeed(pair.clone()))
}

pub fn write_price_feed(env: &Env, feed: &PriceFeed) {
    let key = DataKey::PriceFeed(feed.pair.clone());
    env.storage().persistent().set(&key, feed);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOW_FEED_BUMP_LEDGERS, HIGH_FEED_BUMP_LEDGERS);
}

pub fn read_pair_count(env: &Env) -> u32 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::PairCount)
        .unwrap_or(0)
}

/// Pairs are indexed one persistent entry per pair so feed reads never load the index.
pub fn read_pairs(env: &Env) -> Vec<String> {
    let mut pairs = vec![env];

    for index in 0..read_pair_count(env) {
        let key = DataKey::PairAt(index);
        let pair: Option<String> = env.storage().persistent().get(&key);

        if let Some(pair) = pair {
            env.storage()
                .persistent()
                .extend_ttl(&key, LOW_FEED_BUMP_LEDGERS, HIGH_FEED_BUMP_LEDGERS);
            pairs.push_back(pair);
        }
    }

    pairs
}

pub fn append_pair(env: &Env, pair: &String) {
    let index = read_pair_count(env);
    let key = DataKey::PairAt(index);

    env.storage().persistent().set(&key, pair);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOW_FEED_BUMP_LEDGERS, HIGH_FEED_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::PairCount, &(index + 1));
}

pub fn read_update_count(env: &Env) -> u64 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::UpdateCount)
        .unwrap_or(0)
}

pub fn write_update_count(env: &Env, count: u64) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::UpdateCount, &count);
}
