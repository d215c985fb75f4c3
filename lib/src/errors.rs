use soroban_sdk::contracterror;

/// Failure codes shared by the Lend and Market contracts.
///
/// Every variant is an atomic rejection: the invocation that returns it
/// leaves storage untouched and emits no event.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RentalError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// The escrow already holds an NFT.
    AlreadyStaking = 3,
    /// The token registry refused the transfer, or the caller has no rights
    /// over the token.
    NotApprovedOrOwner = 4,
    /// A rental is still running.
    CannotRedeem = 5,
    CannotRent = 6,
    OverMaxRentDuration = 7,
    /// Nothing is staked.
    NotYetStaking = 8,
    /// The lend validity window has closed.
    ExpiredLend = 9,
    /// Caller is not the recorded owner of the escrow.
    NotOwner = 10,
    AlreadyLend = 11,
    /// `min_duration` is greater than `max_duration`.
    DurationRangeInvalid = 12,
    /// `now + max_duration` runs past `lend_valid_until`.
    ValidUntilTooSoon = 13,
    NotLender = 14,
    NotYetLend = 15,
    PaymentMismatch = 16,
    CannotSetWhileRenting = 17,
    UnderMinRentDuration = 18,
}
