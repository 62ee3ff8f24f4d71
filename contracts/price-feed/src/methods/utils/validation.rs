use price_feed_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::{has_admin, read_admin};

pub fn require_admin_not_exist(env: &Env) -> Result<(), Error> {
    if has_admin(env) {
        return Err(Error::AlreadyInitialized);
    }

    Ok(())
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let admin = read_admin(env)?;

    if admin != *caller {
        return Err(Error::Unauthorized);
    }

    Ok(())
}
