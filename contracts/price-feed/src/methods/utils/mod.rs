pub mod staleness;
pub mod validation;
