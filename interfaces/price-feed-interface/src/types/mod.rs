pub mod error;
pub mod price;
pub mod price_feed;
