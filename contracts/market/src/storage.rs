use soroban_sdk::{contracttype, Address, Env, Symbol};

use rental_lib::{
    RentalError, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, LEND_COUNTER_KEY,
    NATIVE_ASSET_KEY, RENT_COUNTER_KEY,
};

/// Persistent keys, one pair per listed `(nft_contract, nft_id)`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Order(Address, u32),
    Lend(Address, u32),
}

/* ---------------- NATIVE ASSET ---------------- */

pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, NATIVE_ASSET_KEY), asset);
}

pub fn get_native_asset(env: &Env) -> Result<Address, RentalError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, NATIVE_ASSET_KEY))
        .ok_or(RentalError::NotInitialized)
}

/* ---------------- COUNTERS ---------------- */

pub fn next_lend_id(env: &Env) -> u64 {
    increment_counter(env, LEND_COUNTER_KEY)
}

pub fn next_rent_id(env: &Env) -> u64 {
    increment_counter(env, RENT_COUNTER_KEY)
}

fn increment_counter(env: &Env, key: &str) -> u64 {
    let key = Symbol::new(env, key);
    let id = env
        .storage()
        .instance()
        .get::<Symbol, u64>(&key)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&key, &id);
    id
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
