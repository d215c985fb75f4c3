/*!
# Lend state machine

One escrow slot for one NFT plus at most one rental window over it.

```text
Empty --stake--> Staked/Idle --rent--> Staked/Renting
  ^                  |   ^                   |
  +-----redeem-------+   +---- now >= end ---+
```

Expiry is never written back: `Staked/Renting` turns into `Staked/Idle` the
moment the ledger clock reaches `end_time`, as observed by
[`LendState::is_renting`]. Every mutator takes the caller and checks it
against the recorded owner before anything else.

The same type backs the standalone Lend contract (one slot in instance
storage) and the Market arena (one slot per `(nft_contract, token_id)`).
*/

use soroban_sdk::{contracttype, Address};

use crate::{
    errors::RentalError,
    types::{LendConfig, NftInfo, UserInfo},
};

/// What the escrow currently holds.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Stake {
    Empty,
    /// The NFT and the holder it was pulled from; it goes back there on
    /// redeem.
    Held(NftInfo, Address),
}

/// Latest rental since the NFT was staked. A `Window` stays recorded after
/// it closes.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Rental {
    Never,
    Window(UserInfo),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LendState {
    pub owner: Address,
    pub config: LendConfig,
    pub stake: Stake,
    pub rental: Rental,
}

impl LendState {
    pub fn new(owner: Address, config: LendConfig) -> Self {
        Self {
            owner,
            config,
            stake: Stake::Empty,
            rental: Rental::Never,
        }
    }

    pub fn nft(&self) -> Option<&NftInfo> {
        match &self.stake {
            Stake::Held(nft, _) => Some(nft),
            Stake::Empty => None,
        }
    }

    pub fn staker(&self) -> Option<&Address> {
        match &self.stake {
            Stake::Held(_, staker) => Some(staker),
            Stake::Empty => None,
        }
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        match &self.rental {
            Rental::Window(info) => Some(info),
            Rental::Never => None,
        }
    }

    pub fn ensure_owner(&self, caller: &Address) -> Result<(), RentalError> {
        if &self.owner != caller {
            return Err(RentalError::NotOwner);
        }
        Ok(())
    }

    pub fn is_staked(&self) -> bool {
        matches!(self.stake, Stake::Held(..))
    }

    /// `true` while a rental window is open at `now`.
    pub fn is_renting(&self, now: u64) -> bool {
        matches!(&self.rental, Rental::Window(info) if now < info.end_time)
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.config.lend_valid_until
    }

    pub fn could_rent(&self, now: u64) -> Result<bool, RentalError> {
        if !self.is_staked() {
            return Err(RentalError::NotYetStaking);
        }
        if self.is_expired(now) {
            return Err(RentalError::ExpiredLend);
        }
        Ok(!self.is_renting(now))
    }

    pub fn could_redeem(&self, now: u64) -> Result<bool, RentalError> {
        if !self.is_staked() {
            return Err(RentalError::NotYetStaking);
        }
        Ok(!self.is_renting(now))
    }

    /// Renter of the open window, if any.
    pub fn current_user(&self, now: u64) -> Option<Address> {
        match &self.rental {
            Rental::Window(info) if now < info.end_time => Some(info.user.clone()),
            _ => None,
        }
    }

    /// Records `nft` as held in escrow for `staker`.
    ///
    /// The caller moves the token itself; a failed transfer must abort the
    /// whole invocation so this record never outlives it.
    pub fn stake(
        &mut self,
        caller: &Address,
        nft: NftInfo,
        staker: Address,
    ) -> Result<(), RentalError> {
        self.ensure_owner(caller)?;
        if self.is_staked() {
            return Err(RentalError::AlreadyStaking);
        }

        self.stake = Stake::Held(nft, staker);
        Ok(())
    }

    /// Releases the escrow and returns what has to be handed back, and to
    /// whom.
    pub fn redeem(
        &mut self,
        caller: &Address,
        now: u64,
    ) -> Result<(NftInfo, Address), RentalError> {
        self.ensure_owner(caller)?;
        if !self.could_redeem(now)? {
            return Err(RentalError::CannotRedeem);
        }

        self.rental = Rental::Never;
        match core::mem::replace(&mut self.stake, Stake::Empty) {
            Stake::Held(nft, staker) => Ok((nft, staker)),
            Stake::Empty => Err(RentalError::NotYetStaking),
        }
    }

    pub fn rent(
        &mut self,
        caller: &Address,
        now: u64,
        duration: u64,
        user: Address,
    ) -> Result<UserInfo, RentalError> {
        self.ensure_owner(caller)?;
        if !self.could_rent(now)? {
            return Err(RentalError::CannotRent);
        }
        if duration > self.config.max_rent_duration {
            return Err(RentalError::OverMaxRentDuration);
        }

        let info = UserInfo {
            start_time: now,
            end_time: now.saturating_add(duration),
            user,
        };
        self.rental = Rental::Window(info.clone());
        Ok(info)
    }

    pub fn set_share_ratio(
        &mut self,
        caller: &Address,
        now: u64,
        share_ratio: u32,
    ) -> Result<(), RentalError> {
        self.ensure_owner(caller)?;
        if self.is_renting(now) {
            return Err(RentalError::CannotSetWhileRenting);
        }
        self.config.share_ratio = share_ratio;
        Ok(())
    }

    pub fn set_max_rent_duration(
        &mut self,
        caller: &Address,
        now: u64,
        max_rent_duration: u64,
    ) -> Result<(), RentalError> {
        self.ensure_owner(caller)?;
        if self.is_renting(now) {
            return Err(RentalError::CannotSetWhileRenting);
        }
        self.config.max_rent_duration = max_rent_duration;
        Ok(())
    }

    /// Hands the owner gate to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<Address, RentalError> {
        self.ensure_owner(caller)?;
        Ok(core::mem::replace(&mut self.owner, new_owner))
    }
}
