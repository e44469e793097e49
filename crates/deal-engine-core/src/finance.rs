//! Amortizing-loan math for finance deals.
//!
//! Produces the monthly payment and loan totals for one `DealOption`.
//! Pure and infallible: malformed input is clamped or guarded rather than
//! rejected, because this sits in a rendering path where a thrown error
//! would break a page or document.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::deal::DealOption;
use crate::types::{round_money, Money};

/// Loan totals for a finance deal. Immutable; newly constructed on every
/// call. All fields are rounded to cents at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceResult {
    /// Trade-in value net of payoff, clamped at zero
    pub net_trade: Money,
    /// Doc + title/registration + other fees
    pub total_fees: Money,
    /// Sales tax on the taxable subtotal
    pub tax: Money,
    /// Taxable subtotal plus tax
    pub total_price: Money,
    /// Principal after down payment and net trade, clamped at zero
    pub amount_financed: Money,
    pub monthly_payment: Money,
    pub total_of_payments: Money,
    pub total_interest: Money,
    /// Down payment plus total of payments
    pub total_cost: Money,
}

/// Compute the monthly payment and loan totals for a finance deal.
///
/// Intermediate math runs at full precision; rounding happens only on the
/// returned fields.
pub fn calculate_finance(opt: &DealOption) -> FinanceResult {
    // A trade-in upside-down on its payoff contributes nothing.
    let net_trade = (opt.trade_value - opt.trade_payoff).max(Decimal::ZERO);
    let total_fees = opt.doc_fee + opt.title_reg_fee + opt.other_fees;
    let subtotal = opt.selling_price + total_fees - opt.rebates;
    let tax = subtotal * opt.tax_rate / dec!(100);
    let total_price = subtotal + tax;

    // Down payment and trade can fully cover the deal; never negative.
    let amount_financed =
        (total_price - opt.down_payment - net_trade).max(Decimal::ZERO);

    let monthly_payment = monthly_loan_payment(amount_financed, opt.apr, opt.term_months);

    let total_of_payments = monthly_payment * Decimal::from(opt.term_months);
    let total_interest = total_of_payments - amount_financed;
    let total_cost = opt.down_payment + total_of_payments;

    FinanceResult {
        net_trade: round_money(net_trade),
        total_fees: round_money(total_fees),
        tax: round_money(tax),
        total_price: round_money(total_price),
        amount_financed: round_money(amount_financed),
        monthly_payment: round_money(monthly_payment),
        total_of_payments: round_money(total_of_payments),
        total_interest: round_money(total_interest),
        total_cost: round_money(total_cost),
    }
}

/// Standard amortizing-loan payment: P * r(1+r)^n / ((1+r)^n - 1) with
/// monthly rate r = apr/12/100.
fn monthly_loan_payment(principal: Money, apr: Decimal, term_months: u32) -> Money {
    if term_months == 0 || principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if apr.is_zero() {
        // Straight line; avoids the 0/0 singularity in the formula below.
        return principal / Decimal::from(term_months);
    }

    let r = apr / dec!(1200);
    let one_plus_r = Decimal::ONE + r;
    let mut factor = Decimal::ONE;
    for _ in 0..term_months {
        factor *= one_plus_r;
    }
    principal * r * factor / (factor - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::DealType;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn zero_rate_deal() -> DealOption {
        DealOption {
            id: "f-1".to_string(),
            label: "Finance".to_string(),
            deal_type: DealType::Finance,
            selling_price: dec!(20000),
            down_payment: dec!(2000),
            apr: dec!(0),
            term_months: 40,
            ..DealOption::default()
        }
    }

    #[test]
    fn test_zero_rate_straight_line() {
        let result = calculate_finance(&zero_rate_deal());
        assert_eq!(result.amount_financed, dec!(18000));
        assert_eq!(result.monthly_payment, dec!(450.00));
        assert_eq!(result.total_of_payments, dec!(18000.00));
        assert_eq!(result.total_interest, dec!(0.00));
        assert_eq!(result.total_cost, dec!(20000.00));
    }

    #[test]
    fn test_zero_term_yields_zero_payment() {
        let mut opt = zero_rate_deal();
        opt.term_months = 0;
        let result = calculate_finance(&opt);
        assert_eq!(result.monthly_payment, dec!(0));
        assert_eq!(result.total_of_payments, dec!(0));
        assert_eq!(result.total_cost, dec!(2000));
    }

    #[test]
    fn test_amortized_payment_six_percent() {
        // $18,000 at 6% APR over 60 months ≈ $347.99/mo
        let mut opt = zero_rate_deal();
        opt.apr = dec!(6);
        opt.term_months = 60;
        let result = calculate_finance(&opt);
        assert!((result.monthly_payment - dec!(347.99)).abs() <= dec!(0.01));
        // Interest must be positive and consistent with the totals
        assert!(result.total_interest > Decimal::ZERO);
        assert_eq!(
            result.total_of_payments,
            round_money(result.monthly_payment * dec!(60)),
        );
    }

    #[test]
    fn test_upside_down_trade_contributes_nothing() {
        let mut opt = zero_rate_deal();
        opt.trade_value = dec!(5000);
        opt.trade_payoff = dec!(8000);
        let result = calculate_finance(&opt);
        assert_eq!(result.net_trade, dec!(0));
        assert_eq!(result.amount_financed, dec!(18000));
    }

    #[test]
    fn test_amount_financed_clamped_at_zero() {
        let mut opt = zero_rate_deal();
        opt.down_payment = dec!(25000);
        let result = calculate_finance(&opt);
        assert_eq!(result.amount_financed, dec!(0));
        assert_eq!(result.monthly_payment, dec!(0));
        assert_eq!(result.total_interest, dec!(0));
    }

    #[test]
    fn test_fees_and_tax_composition() {
        let mut opt = zero_rate_deal();
        opt.doc_fee = dec!(499);
        opt.title_reg_fee = dec!(325);
        opt.other_fees = dec!(176);
        opt.rebates = dec!(1000);
        opt.tax_rate = dec!(6.25);
        let result = calculate_finance(&opt);
        assert_eq!(result.total_fees, dec!(1000));
        // subtotal = 20000 + 1000 - 1000 = 20000; tax = 1250
        assert_eq!(result.tax, dec!(1250.00));
        assert_eq!(result.total_price, dec!(21250.00));
        assert_eq!(result.amount_financed, dec!(19250.00));
    }
}
