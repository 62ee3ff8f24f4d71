#![deny(warnings)]
#![no_std]


/// Number of implied decimal places in published prices and confidences
pub const PRICE_DECIMALS: u32 = 8;

/// One unit in the fixed-point scale of prices, 10^PRICE_DECIMALS
pub const PRICE_DENOMINATOR: u64 = 100_000_000;

/// One hour in seconds
pub const HOUR: u64 = 60 * 60;

/// Maximum age of a price accepted by `get_price`. Equal 3 hours
pub const DEFAULT_MAX_AGE: u64 = 3 * HOUR;
