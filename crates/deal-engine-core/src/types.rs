use rust_decimal::{Decimal, RoundingStrategy};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (6.5 = 6.5% APR), matching how
/// dealership rate sheets and credit-tier tables quote them.
pub type Percent = Decimal;

/// Lease money factor: a small decimal (not a percent), e.g. 0.00125.
pub type MoneyFactor = Decimal;

/// Round a computed amount to cents for presentation.
///
/// Applied only at the output boundary; all intermediate math runs at full
/// Decimal precision. Rounding earlier would accumulate cent drift across
/// multi-month totals.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
