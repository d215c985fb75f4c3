use soroban_sdk::{Address, Env};

use rental_lib::{LendOrder, LendState, ORDER_BUMP_AMOUNT, ORDER_LIFETIME_THRESHOLD};

use super::storage::DataKey;

/// Persistent-storage access for orders and the escrow slots behind them.
///
/// `OrderManager` goes through this type and never calls `env.storage()`
/// for per-NFT records itself.
pub struct OrderRepository {
    env: Env,
}

impl OrderRepository {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub fn save_order(&self, order: &LendOrder) {
        let key = DataKey::Order(order.nft_address.clone(), order.nft_id);
        self.env.storage().persistent().set(&key, order);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
    }

    pub fn load_order(&self, nft_address: &Address, nft_id: u32) -> Option<LendOrder> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Order(nft_address.clone(), nft_id))
    }

    pub fn order_exists(&self, nft_address: &Address, nft_id: u32) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Order(nft_address.clone(), nft_id))
    }

    pub fn remove_order(&self, nft_address: &Address, nft_id: u32) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Order(nft_address.clone(), nft_id));
    }

    // ------------------------------------------------------------------
    // Escrow slots
    // ------------------------------------------------------------------

    pub fn save_lend(&self, nft_address: &Address, nft_id: u32, state: &LendState) {
        let key = DataKey::Lend(nft_address.clone(), nft_id);
        self.env.storage().persistent().set(&key, state);
        self.env
            .storage()
            .persistent()
            .extend_ttl(&key, ORDER_LIFETIME_THRESHOLD, ORDER_BUMP_AMOUNT);
    }

    pub fn load_lend(&self, nft_address: &Address, nft_id: u32) -> Option<LendState> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Lend(nft_address.clone(), nft_id))
    }

    pub fn remove_lend(&self, nft_address: &Address, nft_id: u32) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Lend(nft_address.clone(), nft_id));
    }
}
