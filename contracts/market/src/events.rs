use soroban_sdk::{contracttype, Address, Env, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CreateLendOrderEvent {
    pub lend_id: u64,
    pub lender: Address,
    pub nft_address: Address,
    pub nft_id: u32,
    pub min_duration: u64,
    pub max_duration: u64,
    pub price_per_day: u32,
    pub payment_token: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CancelLendOrderEvent {
    pub lend_id: u64,
    pub lender: Address,
    pub nft_address: Address,
    pub nft_id: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FulfillOrderEvent {
    pub lend_id: u64,
    pub rent_id: u64,
    pub lender: Address,
    pub payer: Address,
    pub renter: Address,
    pub nft_address: Address,
    pub nft_id: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub price_per_day: u32,
    pub payment_token: Address,
}

pub fn create_lend_order(env: &Env, event: CreateLendOrderEvent) {
    env.events()
        .publish((Symbol::new(env, "create_lend_order"),), event);
}

pub fn cancel_lend_order(env: &Env, event: CancelLendOrderEvent) {
    env.events()
        .publish((Symbol::new(env, "cancel_lend_order"),), event);
}

pub fn fulfill_order(env: &Env, event: FulfillOrderEvent) {
    env.events()
        .publish((Symbol::new(env, "fulfill_order"),), event);
}

pub fn admin_changed(env: &Env, previous: Address, new_admin: Address) {
    env.events()
        .publish((Symbol::new(env, "admin_changed"),), (previous, new_admin));
}
