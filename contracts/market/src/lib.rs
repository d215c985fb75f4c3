#![no_std]

mod events;
mod manager;
mod repository;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};

use rental_lib::{admin, validation, LendOrder, LendState, RentalError, UserInfo};

use manager::OrderManager;
use storage::{bump_instance, set_native_asset};

#[contract]
pub struct Market;

#[contractimpl]
impl Market {
    /// Initialize contract with admin and the asset rentals are paid in
    pub fn initialize(env: Env, admin: Address, native_asset: Address) -> Result<(), RentalError> {
        if admin::has_admin(&env) {
            return Err(RentalError::AlreadyInitialized);
        }

        admin.require_auth();
        admin::set_admin(&env, &admin);
        set_native_asset(&env, &native_asset);
        bump_instance(&env);
        Ok(())
    }

    /// Set a new admin
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), RentalError> {
        let previous = admin::transfer_admin(&env, &new_admin)?;
        log!(&env, "admin changed from {} to {}", previous, new_admin);
        events::admin_changed(&env, previous, new_admin);
        Ok(())
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), RentalError> {
        admin::require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    /// List an NFT for rent. The market takes custody of the token.
    #[allow(clippy::too_many_arguments)]
    pub fn create_lend_order(
        env: Env,
        lender: Address,
        nft_contract: Address,
        nft_id: u32,
        lend_valid_until: u64,
        min_duration: u64,
        max_duration: u64,
        price_per_day: u32,
        payment_token: Address,
    ) -> Result<LendOrder, RentalError> {
        lender.require_auth();
        admin::get_admin(&env)?;
        bump_instance(&env);

        OrderManager::new(env).create_lend_order(
            &lender,
            &nft_contract,
            nft_id,
            lend_valid_until,
            min_duration,
            max_duration,
            price_per_day,
            &payment_token,
        )
    }

    /// Delist an NFT that is not currently rented and hand it back.
    pub fn cancel_lend_order(
        env: Env,
        lender: Address,
        nft_contract: Address,
        nft_id: u32,
    ) -> Result<(), RentalError> {
        lender.require_auth();
        admin::get_admin(&env)?;
        bump_instance(&env);

        OrderManager::new(env).cancel_lend_order(&lender, &nft_contract, nft_id)
    }

    /// Rent a listed NFT. `value` must equal the prepaid price for whole days.
    pub fn fulfill_order(
        env: Env,
        payer: Address,
        nft_contract: Address,
        nft_id: u32,
        duration: u64,
        renter: Address,
        value: i128,
    ) -> Result<UserInfo, RentalError> {
        payer.require_auth();
        admin::get_admin(&env)?;
        bump_instance(&env);

        OrderManager::new(env).fulfill_order(&payer, &nft_contract, nft_id, duration, &renter, value)
    }

    pub fn get_lend_order(env: Env, nft_contract: Address, nft_id: u32) -> Option<LendOrder> {
        OrderManager::new(env).get_lend_order(&nft_contract, nft_id)
    }

    /// Escrow slot behind an order, including its current rental.
    pub fn get_lend(env: Env, nft_contract: Address, nft_id: u32) -> Option<LendState> {
        OrderManager::new(env).get_lend(&nft_contract, nft_id)
    }

    /// Value `fulfill_order` expects; `None` when it does not fit in an i128.
    pub fn rental_price(_env: Env, price_per_day: u32, duration: u64) -> Option<i128> {
        validation::rental_price(price_per_day, duration)
    }
}
