#![no_std]

#[cfg(test)]
extern crate std;

pub mod admin;
pub mod errors;
pub mod lend;
pub mod nft;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::RentalError;
pub use lend::{LendState, Rental, Stake};
pub use storage_keys::*;
pub use types::*;

pub const SECONDS_PER_DAY: u64 = 86_400;
/// Smallest-unit multiplier applied to per-day prices (18 decimals).
pub const PRICE_UNIT: i128 = 1_000_000_000_000_000_000;
