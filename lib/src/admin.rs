use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::RentalError, ADMIN_KEY};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, ADMIN_KEY))
}

pub fn get_admin(env: &Env) -> Result<Address, RentalError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, ADMIN_KEY))
        .ok_or(RentalError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, ADMIN_KEY), admin);
}

/// Loads the admin and requires its signature on the current invocation.
pub fn require_admin(env: &Env) -> Result<Address, RentalError> {
    let admin = get_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

pub fn transfer_admin(env: &Env, new_admin: &Address) -> Result<Address, RentalError> {
    let current = require_admin(env)?;
    set_admin(env, new_admin);
    Ok(current)
}
