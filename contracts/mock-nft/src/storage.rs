use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{ORDER_BUMP_AMOUNT, ORDER_LIFETIME_THRESHOLD};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NextTokenId,
    Owner(u32),
    Approved(u32),
    ApprovalForAll(Address, Address),
    Balance(Address),
}

/* ---------------- TOKEN IDS ---------------- */

pub fn next_token_id(env: &Env) -> u32 {
    let id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::NextTokenId, &(id + 1));
    id
}

/* ---------------- OWNERSHIP ---------------- */

pub fn read_owner(env: &Env, token_id: u32) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = env.storage().persistent().get::<DataKey, Address>(&key);
    if owner.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
    }
    owner
}

pub fn write_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
}

pub fn read_balance(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, owner: &Address, balance: u32) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
}

/* ---------------- APPROVALS ---------------- */

pub fn read_approved(env: &Env, token_id: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get::<DataKey, Address>(&DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: u32, approved: Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(addr) => env.storage().persistent().set(&key, &addr),
        None => env.storage().persistent().remove(&key),
    }
}

pub fn read_approval_for_all(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::ApprovalForAll(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn write_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::ApprovalForAll(owner.clone(), operator.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}
