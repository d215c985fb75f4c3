#![no_std]

//! Escrow for a single NFT that its owner can rent out for bounded windows.
//!
//! All transitions live in [`rental_lib::LendState`]; this contract loads the
//! slot from instance storage, moves the token through the registry and
//! publishes the matching event.

mod events;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

use rental_lib::{
    nft::{ensure_holder_or_approved, pull_into_escrow, release_from_escrow},
    LendConfig, LendState, NftInfo, RentalError, UserInfo,
};

use events::{OwnershipTransferredEvent, StakeEvent, UserInfoUpdateEvent};
use storage::{has_state, load_state, save_state};

#[contract]
pub struct Lend;

#[contractimpl]
impl Lend {
    /// One-time setup of the owner and rental terms.
    pub fn initialize(
        env: Env,
        owner: Address,
        share_ratio: u32,
        share_token: Address,
        lend_valid_until: u64,
        max_rent_duration: u64,
    ) -> Result<(), RentalError> {
        if has_state(&env) {
            return Err(RentalError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = LendConfig {
            share_ratio,
            share_token,
            lend_valid_until,
            max_rent_duration,
        };
        save_state(&env, &LendState::new(owner.clone(), config));
        log!(&env, "lend initialized for owner {}", owner);
        Ok(())
    }

    /// Pulls `token_id` into this contract. `caller` must hold the token or
    /// be approved for it, and the holder must have approved this contract.
    pub fn stake(
        env: Env,
        caller: Address,
        nft_contract: Address,
        token_id: u32,
    ) -> Result<(), RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        state.ensure_owner(&caller)?;
        if state.is_staked() {
            return Err(RentalError::AlreadyStaking);
        }

        let nft = NftInfo {
            contract: nft_contract.clone(),
            token_id,
        };
        ensure_holder_or_approved(&env, &nft, &caller)?;
        let escrow = env.current_contract_address();
        let staker = pull_into_escrow(&env, &nft, &escrow)?;
        state.stake(&caller, nft, staker.clone())?;
        save_state(&env, &state);

        log!(&env, "staked token {} from {}", token_id, staker);
        events::stake(
            &env,
            StakeEvent {
                staker,
                nft_contract,
                token_id,
            },
        );
        Ok(())
    }

    /// Returns the staked token to the address it came from.
    pub fn redeem(env: Env, caller: Address) -> Result<(), RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        let now = env.ledger().timestamp();

        let (nft, staker) = state.redeem(&caller, now)?;
        release_from_escrow(&env, &nft, &env.current_contract_address(), &staker)?;
        save_state(&env, &state);

        log!(&env, "redeemed token {} to {}", nft.token_id, staker);
        events::redeem(
            &env,
            StakeEvent {
                staker,
                nft_contract: nft.contract,
                token_id: nft.token_id,
            },
        );
        Ok(())
    }

    /// Opens a rental window of `duration` seconds for `user`, starting now.
    pub fn rent(
        env: Env,
        caller: Address,
        duration: u64,
        user: Address,
    ) -> Result<UserInfo, RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        let now = env.ledger().timestamp();

        let info = state.rent(&caller, now, duration, user)?;
        save_state(&env, &state);

        let token_id = state
            .nft()
            .map(|nft| nft.token_id)
            .ok_or(RentalError::NotYetStaking)?;
        log!(&env, "rented token {} until {}", token_id, info.end_time);
        events::user_info_update(
            &env,
            UserInfoUpdateEvent {
                token_id,
                start_time: info.start_time,
                end_time: info.end_time,
                user: info.user.clone(),
            },
        );
        Ok(info)
    }

    pub fn could_rent(env: Env) -> Result<bool, RentalError> {
        load_state(&env)?.could_rent(env.ledger().timestamp())
    }

    pub fn could_redeem(env: Env) -> Result<bool, RentalError> {
        load_state(&env)?.could_redeem(env.ledger().timestamp())
    }

    pub fn set_share_ratio(env: Env, caller: Address, share_ratio: u32) -> Result<(), RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        state.set_share_ratio(&caller, env.ledger().timestamp(), share_ratio)?;
        save_state(&env, &state);

        events::share_ratio_update(&env, share_ratio);
        Ok(())
    }

    pub fn set_max_rent_duration(
        env: Env,
        caller: Address,
        max_rent_duration: u64,
    ) -> Result<(), RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        state.set_max_rent_duration(&caller, env.ledger().timestamp(), max_rent_duration)?;
        save_state(&env, &state);

        events::max_rent_duration_update(&env, max_rent_duration);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RentalError> {
        caller.require_auth();
        let mut state = load_state(&env)?;
        let previous_owner = state.transfer_ownership(&caller, new_owner.clone())?;
        save_state(&env, &state);

        log!(&env, "ownership moved from {} to {}", previous_owner, new_owner);
        events::ownership_transferred(
            &env,
            OwnershipTransferredEvent {
                previous_owner,
                new_owner,
            },
        );
        Ok(())
    }

    /* ---------------- VIEWS ---------------- */

    pub fn get_nft_info(env: Env) -> Result<Option<NftInfo>, RentalError> {
        Ok(load_state(&env)?.nft().cloned())
    }

    /// Most recent rental, including one whose window has already closed.
    pub fn get_user_info(env: Env) -> Result<Option<UserInfo>, RentalError> {
        Ok(load_state(&env)?.user_info().cloned())
    }

    /// Renter of the open window; `None` once it has closed.
    pub fn get_user(env: Env) -> Result<Option<Address>, RentalError> {
        Ok(load_state(&env)?.current_user(env.ledger().timestamp()))
    }

    pub fn get_config(env: Env) -> Result<LendConfig, RentalError> {
        Ok(load_state(&env)?.config)
    }

    pub fn owner(env: Env) -> Result<Address, RentalError> {
        Ok(load_state(&env)?.owner)
    }
}
