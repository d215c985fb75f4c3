use crate::{errors::RentalError, PRICE_UNIT, SECONDS_PER_DAY};

pub fn validate_duration_range(min_duration: u64, max_duration: u64) -> Result<(), RentalError> {
    if min_duration > max_duration {
        return Err(RentalError::DurationRangeInvalid);
    }
    Ok(())
}

/// The longest rental must finish before the lend stops being valid.
pub fn validate_valid_until(
    now: u64,
    max_duration: u64,
    lend_valid_until: u64,
) -> Result<(), RentalError> {
    match now.checked_add(max_duration) {
        Some(last_end) if last_end <= lend_valid_until => Ok(()),
        _ => Err(RentalError::ValidUntilTooSoon),
    }
}

/// Prepaid price of a rental: whole days only, scaled by `PRICE_UNIT`.
/// `None` on overflow.
pub fn rental_price(price_per_day: u32, duration: u64) -> Option<i128> {
    let days = i128::from(duration / SECONDS_PER_DAY);
    i128::from(price_per_day)
        .checked_mul(days)?
        .checked_mul(PRICE_UNIT)
}

pub fn validate_payment(price_per_day: u32, duration: u64, value: i128) -> Result<(), RentalError> {
    match rental_price(price_per_day, duration) {
        Some(expected) if expected == value => Ok(()),
        _ => Err(RentalError::PaymentMismatch),
    }
}
