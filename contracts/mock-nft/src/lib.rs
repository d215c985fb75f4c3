#![no_std]

//! Minimal ERC-721 style registry. Enough ownership and approval surface for
//! the Lend and Market escrows to pull and return tokens.

mod storage;


use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, Symbol};

use storage::{
    next_token_id, read_approval_for_all, read_approved, read_balance, read_owner,
    write_approval_for_all, write_approved, write_balance, write_owner,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    NonexistentToken = 1,
    NotApprovedOrOwner = 2,
    IncorrectOwner = 3,
}

#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    /// Mints the next sequential token id (starting at 0) to `to`.
    pub fn safe_mint(env: Env, to: Address) -> u32 {
        let token_id = next_token_id(&env);
        write_owner(&env, token_id, &to);
        write_balance(&env, &to, read_balance(&env, &to) + 1);

        log!(&env, "minted token {} to {}", token_id, to);
        env.events()
            .publish((Symbol::new(&env, "mint"),), (to, token_id));
        token_id
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, NftError> {
        read_owner(&env, token_id).ok_or(NftError::NonexistentToken)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        read_balance(&env, &owner)
    }

    /// Sets (or clears with `None`) the single approved spender of a token.
    /// `owner` must hold the token or be an operator for its holder.
    pub fn approve(
        env: Env,
        owner: Address,
        approved: Option<Address>,
        token_id: u32,
    ) -> Result<(), NftError> {
        owner.require_auth();
        let holder = read_owner(&env, token_id).ok_or(NftError::NonexistentToken)?;
        if holder != owner && !read_approval_for_all(&env, &holder, &owner) {
            return Err(NftError::NotApprovedOrOwner);
        }

        write_approved(&env, token_id, approved.clone());
        env.events()
            .publish((Symbol::new(&env, "approve"),), (holder, approved, token_id));
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        read_approved(&env, token_id)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        write_approval_for_all(&env, &owner, &operator, approved);
        env.events().publish(
            (Symbol::new(&env, "approve_all"),),
            (owner, operator, approved),
        );
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        read_approval_for_all(&env, &owner, &operator)
    }

    /// `false` for unknown tokens rather than an error.
    pub fn is_approved_or_owner(env: Env, spender: Address, token_id: u32) -> bool {
        match read_owner(&env, token_id) {
            Some(holder) => Self::may_move(&env, &holder, &spender, token_id),
            None => false,
        }
    }

    /// Holder-initiated transfer.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        from.require_auth();
        let holder = read_owner(&env, token_id).ok_or(NftError::NonexistentToken)?;
        if holder != from {
            return Err(NftError::IncorrectOwner);
        }
        Self::move_token(&env, &from, &to, token_id);
        Ok(())
    }

    /// Transfer performed by `spender` on behalf of `from`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), NftError> {
        spender.require_auth();
        let holder = read_owner(&env, token_id).ok_or(NftError::NonexistentToken)?;
        if holder != from {
            return Err(NftError::IncorrectOwner);
        }
        if !Self::may_move(&env, &holder, &spender, token_id) {
            return Err(NftError::NotApprovedOrOwner);
        }
        Self::move_token(&env, &from, &to, token_id);
        Ok(())
    }

    fn may_move(env: &Env, holder: &Address, spender: &Address, token_id: u32) -> bool {
        holder == spender
            || read_approved(env, token_id).as_ref() == Some(spender)
            || read_approval_for_all(env, holder, spender)
    }

    fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
        write_approved(env, token_id, None);
        write_balance(env, from, read_balance(env, from).saturating_sub(1));
        write_balance(env, to, read_balance(env, to) + 1);
        write_owner(env, token_id, to);

        env.events().publish(
            (Symbol::new(env, "transfer"),),
            (from.clone(), to.clone(), token_id),
        );
    }
}
