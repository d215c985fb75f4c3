use soroban_sdk::{contracttype, Address, Env, Symbol};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakeEvent {
    pub staker: Address,
    pub nft_contract: Address,
    pub token_id: u32,
}

/// Same payload as [`StakeEvent`], published under the `redeem` topic.
pub type RedeemEvent = StakeEvent;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserInfoUpdateEvent {
    pub token_id: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub user: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn stake(env: &Env, event: StakeEvent) {
    env.events().publish((Symbol::new(env, "stake"),), event);
}

pub fn redeem(env: &Env, event: RedeemEvent) {
    env.events().publish((Symbol::new(env, "redeem"),), event);
}

pub fn user_info_update(env: &Env, event: UserInfoUpdateEvent) {
    env.events()
        .publish((Symbol::new(env, "user_info_update"),), event);
}

pub fn share_ratio_update(env: &Env, share_ratio: u32) {
    env.events()
        .publish((Symbol::new(env, "share_ratio_update"),), share_ratio);
}

pub fn max_rent_duration_update(env: &Env, max_rent_duration: u64) {
    env.events().publish(
        (Symbol::new(env, "max_rent_duration_update"),),
        max_rent_duration,
    );
}

pub fn ownership_transferred(env: &Env, event: OwnershipTransferredEvent) {
    env.events()
        .publish((Symbol::new(env, "ownership_transferred"),), event);
}
