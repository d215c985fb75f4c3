use soroban_sdk::{contracttype, Env};

use rental_lib::{LendState, RentalError, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    State,
}

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn load_state(env: &Env) -> Result<LendState, RentalError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(RentalError::NotInitialized)
}

pub fn save_state(env: &Env, state: &LendState) {
    env.storage().instance().set(&DataKey::State, state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
