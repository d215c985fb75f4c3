use soroban_sdk::{log, token, Address, Env};

use rental_lib::{
    nft::{ensure_holder_or_approved, pull_into_escrow, release_from_escrow},
    validation::{validate_duration_range, validate_payment, validate_valid_until},
    LendConfig, LendOrder, LendState, NftInfo, RentalError, UserInfo,
};

use super::{
    events::{self, CancelLendOrderEvent, CreateLendOrderEvent, FulfillOrderEvent},
    repository::OrderRepository,
    storage::{get_native_asset, next_lend_id, next_rent_id},
};

/// Order book rules.
///
/// Each listed NFT gets its own [`LendState`] slot owned by the market
/// contract, so the market is the only caller that ever passes the owner
/// gate. Every method checks all of its preconditions before the first
/// external call or write.
pub struct OrderManager {
    repo: OrderRepository,
    env: Env,
}

impl OrderManager {
    pub fn new(env: Env) -> Self {
        Self {
            repo: OrderRepository::new(env.clone()),
            env,
        }
    }

    fn market(&self) -> Address {
        self.env.current_contract_address()
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------

    /// Escrows the token with the market and lists it.
    ///
    /// `lender` must hold the token or be approved for it; the market itself
    /// must be approved to pull it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_lend_order(
        &self,
        lender: &Address,
        nft_address: &Address,
        nft_id: u32,
        lend_valid_until: u64,
        min_duration: u64,
        max_duration: u64,
        price_per_day: u32,
        payment_token: &Address,
    ) -> Result<LendOrder, RentalError> {
        if self.repo.order_exists(nft_address, nft_id) {
            return Err(RentalError::AlreadyLend);
        }

        let nft = NftInfo {
            contract: nft_address.clone(),
            token_id: nft_id,
        };
        ensure_holder_or_approved(&self.env, &nft, lender)?;

        let now = self.now();
        validate_duration_range(min_duration, max_duration)?;
        validate_valid_until(now, max_duration, lend_valid_until)?;

        let market = self.market();
        let staker = pull_into_escrow(&self.env, &nft, &market)?;

        let config = LendConfig {
            share_ratio: price_per_day,
            share_token: payment_token.clone(),
            lend_valid_until,
            max_rent_duration: max_duration,
        };
        let mut state = LendState::new(market.clone(), config);
        state.stake(&market, nft, staker)?;

        let order = LendOrder {
            lend_id: next_lend_id(&self.env),
            lender: lender.clone(),
            nft_address: nft_address.clone(),
            nft_id,
            create_time: now,
            min_duration,
            max_duration,
            price_per_day,
            payment_token: payment_token.clone(),
            lend_contract: market,
        };
        self.repo.save_lend(nft_address, nft_id, &state);
        self.repo.save_order(&order);

        log!(&self.env, "lend order {} created by {}", order.lend_id, lender);
        events::create_lend_order(
            &self.env,
            CreateLendOrderEvent {
                lend_id: order.lend_id,
                lender: lender.clone(),
                nft_address: nft_address.clone(),
                nft_id,
                min_duration,
                max_duration,
                price_per_day,
                payment_token: payment_token.clone(),
            },
        );
        Ok(order)
    }

    /// Withdraws a listing and returns the token to whoever it was pulled
    /// from.
    pub fn cancel_lend_order(
        &self,
        lender: &Address,
        nft_address: &Address,
        nft_id: u32,
    ) -> Result<(), RentalError> {
        let order = match self.repo.load_order(nft_address, nft_id) {
            Some(order) if &order.lender == lender => order,
            _ => return Err(RentalError::NotLender),
        };
        let mut state = self
            .repo
            .load_lend(nft_address, nft_id)
            .ok_or(RentalError::NotYetLend)?;

        let market = self.market();
        let (nft, staker) = state.redeem(&market, self.now())?;
        release_from_escrow(&self.env, &nft, &market, &staker)?;

        self.repo.remove_order(nft_address, nft_id);
        self.repo.remove_lend(nft_address, nft_id);

        log!(&self.env, "lend order {} cancelled", order.lend_id);
        events::cancel_lend_order(
            &self.env,
            CancelLendOrderEvent {
                lend_id: order.lend_id,
                lender: lender.clone(),
                nft_address: nft_address.clone(),
                nft_id,
            },
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Renting
    // ------------------------------------------------------------------

    /// Rents a listed token to `renter` for `duration` seconds. `payer`
    /// prepays `value` of the native asset straight to the lender.
    pub fn fulfill_order(
        &self,
        payer: &Address,
        nft_address: &Address,
        nft_id: u32,
        duration: u64,
        renter: &Address,
        value: i128,
    ) -> Result<UserInfo, RentalError> {
        let order = self
            .repo
            .load_order(nft_address, nft_id)
            .ok_or(RentalError::NotYetLend)?;
        let mut state = self
            .repo
            .load_lend(nft_address, nft_id)
            .ok_or(RentalError::NotYetLend)?;

        let now = self.now();
        if !state.could_rent(now)? {
            return Err(RentalError::CannotRent);
        }
        if duration > order.max_duration {
            return Err(RentalError::OverMaxRentDuration);
        }
        if duration < order.min_duration {
            return Err(RentalError::UnderMinRentDuration);
        }
        validate_payment(order.price_per_day, duration, value)?;
        let native_asset = get_native_asset(&self.env)?;

        let info = state.rent(&self.market(), now, duration, renter.clone())?;
        if value > 0 {
            token::Client::new(&self.env, &native_asset).transfer(payer, &order.lender, &value);
        }
        self.repo.save_lend(nft_address, nft_id, &state);
        let rent_id = next_rent_id(&self.env);

        log!(
            &self.env,
            "lend order {} rented to {} until {}",
            order.lend_id,
            renter,
            info.end_time
        );
        events::fulfill_order(
            &self.env,
            FulfillOrderEvent {
                lend_id: order.lend_id,
                rent_id,
                lender: order.lender.clone(),
                payer: payer.clone(),
                renter: renter.clone(),
                nft_address: nft_address.clone(),
                nft_id,
                start_time: info.start_time,
                end_time: info.end_time,
                price_per_day: order.price_per_day,
                payment_token: order.payment_token.clone(),
            },
        );
        Ok(info)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_lend_order(&self, nft_address: &Address, nft_id: u32) -> Option<LendOrder> {
        self.repo.load_order(nft_address, nft_id)
    }

    pub fn get_lend(&self, nft_address: &Address, nft_id: u32) -> Option<LendState> {
        self.repo.load_lend(nft_address, nft_id)
    }
}
