//! Pricing
//!
//! Order totals are always derived from the cart lines on demand and never stored, so they
//! cannot drift from the lines they describe.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use thiserror::Error;

use crate::cart::CartLine;

/// Currency every menu price is quoted in (Moldovan leu).
pub fn currency() -> &'static iso::Currency {
    iso::MDL
}

/// Service charge as a percentage of the subtotal.
pub const SERVICE_CHARGE_PERCENT: i64 = 10;

/// Errors that can occur while calculating order totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An amount does not fit the integer range used for totals.
    #[error("order amount overflowed")]
    Overflow,
}

/// Subtotal, service charge and grand total of a set of cart lines, in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    subtotal: u64,
    service_charge: u64,
    total: u64,
}

impl Totals {
    /// Sum of `unit_price × quantity` over all lines.
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    /// Service charge on the subtotal, rounded half-up.
    pub fn service_charge(&self) -> u64 {
        self.service_charge
    }

    /// Subtotal plus service charge.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Subtotal as money.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn subtotal_money(&self) -> Result<Money<'static, iso::Currency>, PricingError> {
        to_money(self.subtotal)
    }

    /// Service charge as money.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn service_charge_money(&self) -> Result<Money<'static, iso::Currency>, PricingError> {
        to_money(self.service_charge)
    }

    /// Total as money.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in minor units.
    pub fn total_money(&self) -> Result<Money<'static, iso::Currency>, PricingError> {
        to_money(self.total)
    }
}

/// Calculates the totals of a list of cart lines.
///
/// An empty list yields all-zero totals.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the subtotal or total overflows.
pub fn totals(lines: &[CartLine]) -> Result<Totals, PricingError> {
    let subtotal = subtotal(lines)?;
    let service_charge = service_charge(subtotal)?;
    let total = subtotal
        .checked_add(service_charge)
        .ok_or(PricingError::Overflow)?;

    Ok(Totals {
        subtotal,
        service_charge,
        total,
    })
}

/// Sum of `unit_price × quantity` over all lines.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum overflows.
pub fn subtotal(lines: &[CartLine]) -> Result<u64, PricingError> {
    lines.iter().try_fold(0_u64, |acc, line| {
        acc.checked_add(line.line_total())
            .ok_or(PricingError::Overflow)
    })
}

/// Service charge on a subtotal, rounded to the nearest whole unit with halves rounded up.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result cannot be represented.
pub fn service_charge(subtotal: u64) -> Result<u64, PricingError> {
    let rate = Decimal::new(SERVICE_CHARGE_PERCENT, 2);

    let applied = Decimal::from(subtotal)
        .checked_mul(rate)
        .ok_or(PricingError::Overflow)?;

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or(PricingError::Overflow)
}

fn to_money(amount: u64) -> Result<Money<'static, iso::Currency>, PricingError> {
    let currency = currency();
    let minor_per_unit = 10_i64.pow(currency.exponent);

    let minor = i64::try_from(amount)
        .ok()
        .and_then(|major| major.checked_mul(minor_per_unit))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn totals_of_mixed_lines() -> TestResult {
        let lines = [
            CartLine::new("a", "A", 200, 2),
            CartLine::new("b", "B", 150, 1),
        ];

        let totals = totals(&lines)?;

        assert_eq!(totals.subtotal(), 550);
        assert_eq!(totals.service_charge(), 55);
        assert_eq!(totals.total(), 605);

        Ok(())
    }

    #[test]
    fn totals_of_no_lines_are_zero() -> TestResult {
        assert_eq!(totals(&[])?, Totals::default());

        Ok(())
    }

    #[test]
    fn service_charge_rounds_half_up() -> TestResult {
        assert_eq!(service_charge(4)?, 0);
        assert_eq!(service_charge(5)?, 1);
        assert_eq!(service_charge(14)?, 1);
        assert_eq!(service_charge(15)?, 2);
        assert_eq!(service_charge(781)?, 78);

        Ok(())
    }

    #[test]
    fn totals_as_money() -> TestResult {
        let lines = [CartLine::new("a", "A", 120, 1)];

        let totals = totals(&lines)?;

        assert_eq!(totals.subtotal_money()?, Money::from_minor(12_000, iso::MDL));
        assert_eq!(totals.service_charge_money()?, Money::from_minor(1_200, iso::MDL));
        assert_eq!(totals.total_money()?, Money::from_minor(13_200, iso::MDL));

        Ok(())
    }

    #[test]
    fn money_conversion_overflow() {
        assert_eq!(to_money(u64::MAX), Err(PricingError::Overflow));
    }

    #[test]
    fn overflow_is_reported_instead_of_wrapping() -> TestResult {
        let huge = CartLine::new("a", "A", u32::MAX, u32::MAX);

        assert_eq!(subtotal(std::slice::from_ref(&huge))?, huge.line_total());
        assert_eq!(totals(&[huge.clone()]), Err(PricingError::Overflow));
        assert_eq!(totals(&[huge.clone(), huge]), Err(PricingError::Overflow));

        Ok(())
    }
}
