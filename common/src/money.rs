//! Amounts are stored as integer cents and shown as two-place decimals.

use rust_decimal::Decimal;

pub const CURRENCY_SCALE: u32 = 2;

pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, CURRENCY_SCALE)
}

/// Rounds to whole cents. `None` if the amount does not fit in an `i64`.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    let mut amount = amount;
    amount.rescale(CURRENCY_SCALE);
    i64::try_from(amount.mantissa()).ok()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn cents_keep_two_places() {
        assert_eq!(from_cents(2500).to_string(), "25.00");
        assert_eq!(from_cents(129999).to_string(), "1299.99");
        assert_eq!(from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn decimal_to_cents() {
        assert_eq!(to_cents(Decimal::from_str("1299.99").unwrap()), Some(129999));
        assert_eq!(to_cents(Decimal::from_str("10").unwrap()), Some(1000));
        assert_eq!(to_cents(Decimal::from_str("0.999").unwrap()), Some(100));
    }
}
