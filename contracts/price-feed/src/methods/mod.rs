pub mod get_price;
pub mod get_price_no_older_than;
pub mod get_price_unsafe;
pub mod initialize;
pub mod update_price_feed;
pub mod utils;
