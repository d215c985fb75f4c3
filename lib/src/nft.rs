use soroban_sdk::{contractclient, Address, Env};

use crate::{errors::RentalError, types::NftInfo};

/// The slice of an ERC-721-style registry the escrows rely on.
#[contractclient(name = "NftClient")]
pub trait NftInterface {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn get_approved(env: Env, token_id: u32) -> Option<Address>;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn is_approved_or_owner(env: Env, spender: Address, token_id: u32) -> bool;
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Current holder of `nft`, or `NotApprovedOrOwner` when the registry does
/// not know the token.
pub fn holder_of(env: &Env, nft: &NftInfo) -> Result<Address, RentalError> {
    match NftClient::new(env, &nft.contract).try_owner_of(&nft.token_id) {
        Ok(Ok(holder)) => Ok(holder),
        _ => Err(RentalError::NotApprovedOrOwner),
    }
}

/// Whether `spender` may move `nft` on its holder's behalf.
pub fn can_operate(env: &Env, nft: &NftInfo, spender: &Address) -> bool {
    matches!(
        NftClient::new(env, &nft.contract).try_is_approved_or_owner(spender, &nft.token_id),
        Ok(Ok(true))
    )
}

/// Current holder of `nft`, provided `caller` holds it or is approved to
/// move it.
pub fn ensure_holder_or_approved(
    env: &Env,
    nft: &NftInfo,
    caller: &Address,
) -> Result<Address, RentalError> {
    let holder = holder_of(env, nft)?;
    if &holder != caller && !can_operate(env, nft, caller) {
        return Err(RentalError::NotApprovedOrOwner);
    }
    Ok(holder)
}

/// Pulls `nft` from its holder into `escrow`, with `escrow` acting as the
/// approved spender. Returns the address the token came from.
pub fn pull_into_escrow(
    env: &Env,
    nft: &NftInfo,
    escrow: &Address,
) -> Result<Address, RentalError> {
    let holder = holder_of(env, nft)?;
    match NftClient::new(env, &nft.contract).try_transfer_from(
        escrow,
        &holder,
        escrow,
        &nft.token_id,
    ) {
        Ok(Ok(())) => Ok(holder),
        _ => Err(RentalError::NotApprovedOrOwner),
    }
}

/// Hands `nft` held by `escrow` back to `to`.
pub fn release_from_escrow(
    env: &Env,
    nft: &NftInfo,
    escrow: &Address,
    to: &Address,
) -> Result<(), RentalError> {
    match NftClient::new(env, &nft.contract).try_transfer(escrow, to, &nft.token_id) {
        Ok(Ok(())) => Ok(()),
        _ => Err(RentalError::NotApprovedOrOwner),
    }
}
