use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Unauthorized = 2,
    UnknownPair = 3,
    StalePrice = 4,

    // Single code reported for every failure when the registry is built with `opaque-errors`
    OperationFailed = 5,
}
