pub const ADMIN_KEY: &str = "admin";
pub const NATIVE_ASSET_KEY: &str = "native_asset";
pub const LEND_COUNTER_KEY: &str = "lend_counter";
pub const RENT_COUNTER_KEY: &str = "rent_counter";

/// Soroban ledgers close roughly every 5 seconds.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
/// Orders may stay listed for months; keep them alive well past a lend
/// validity window of typical length.
pub const ORDER_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const ORDER_LIFETIME_THRESHOLD: u32 = ORDER_BUMP_AMOUNT - 30 * DAY_IN_LEDGERS;
