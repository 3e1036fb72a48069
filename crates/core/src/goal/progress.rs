//! Goal progress calculation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Percentage of the target covered by the balance, clamped to `[0, 100]`.
///
/// The division runs at full `Decimal` precision before rounding half-up to
/// two decimal places. A non-positive target yields zero; savings past the
/// target never report more than 100.
#[must_use]
pub fn progress(total_balance: Decimal, target_amount: Decimal) -> Decimal {
    if target_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let Some(ratio) = total_balance.checked_div(target_amount) else {
        // Division overflow: the balance dwarfs the target.
        return bounded_fallback(total_balance);
    };
    let Some(percent) = ratio.checked_mul(Decimal::ONE_HUNDRED) else {
        return bounded_fallback(total_balance);
    };

    percent
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

fn bounded_fallback(total_balance: Decimal) -> Decimal {
    if total_balance.is_sign_negative() {
        Decimal::ZERO
    } else {
        Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_progress_zero_balance() {
        assert_eq!(progress(dec!(0), dec!(3000)), dec!(0));
    }

    #[test]
    fn test_progress_half_way() {
        assert_eq!(progress(dec!(1500), dec!(3000)), dec!(50.00));
    }

    #[test]
    fn test_progress_at_target() {
        assert_eq!(progress(dec!(3000), dec!(3000)), dec!(100.00));
    }

    #[test]
    fn test_progress_clamped_above_target() {
        assert_eq!(progress(dec!(6000), dec!(3000)), dec!(100.00));
    }

    #[test]
    fn test_progress_negative_balance_clamps_to_zero() {
        assert_eq!(progress(dec!(-500), dec!(3000)), dec!(0));
    }

    #[test]
    fn test_progress_zero_target_is_zero() {
        assert_eq!(progress(dec!(1500), dec!(0)), dec!(0));
        assert_eq!(progress(dec!(1500), dec!(-10)), dec!(0));
    }

    #[test]
    fn test_progress_rounds_half_up() {
        // 1/3 of 100 = 33.333... -> 33.33
        assert_eq!(progress(dec!(1), dec!(3)), dec!(33.33));
        // 0.005 exactly at the midpoint rounds away from zero.
        assert_eq!(progress(dec!(1.0005), dec!(100)), dec!(1.00));
        assert_eq!(progress(dec!(0.125), dec!(100)), dec!(0.13));
    }
}
