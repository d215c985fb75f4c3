use soroban_sdk::{contracttype, Address};

/// The asset held in escrow.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct NftInfo {
    pub contract: Address,
    pub token_id: u32,
}

/// Rental window granted to `user`. The window is `[start_time, end_time)`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserInfo {
    pub start_time: u64,
    pub end_time: u64,
    pub user: Address,
}

/// Terms an escrow is created with.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LendConfig {
    /// Revenue share the lender takes; doubles as the per-day price on
    /// market orders.
    pub share_ratio: u32,
    pub share_token: Address,
    /// Absolute ledger timestamp after which no new rental may start.
    pub lend_valid_until: u64,
    /// Longest rental, in seconds.
    pub max_rent_duration: u64,
}

/// A market listing for one `(nft_address, nft_id)` pair.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LendOrder {
    pub lend_id: u64,
    pub lender: Address,
    pub nft_address: Address,
    pub nft_id: u32,
    pub create_time: u64,
    pub min_duration: u64,
    pub max_duration: u64,
    pub price_per_day: u32,
    pub payment_token: Address,
    /// Contract that holds the escrowed NFT.
    pub lend_contract: Address,
}
