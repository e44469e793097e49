//! Capitalized-cost / depreciation / rent-charge math for lease deals.
//!
//! Tax follows the lease convention: applied to the monthly payment
//! stream, not the full vehicle price. Rounding is deferred to the output
//! boundary — the unrounded monthly payment feeds due-at-signing and the
//! total lease cost, so multi-month totals carry no cent drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::deal::DealOption;
use crate::types::{round_money, Money};

/// Lease totals for one deal option. Immutable; newly constructed on
/// every call. All fields are rounded to cents at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseResult {
    /// Trade-in value net of payoff, clamped at zero
    pub net_trade: Money,
    /// Doc + title/registration + other fees
    pub total_fees: Money,
    /// Selling price plus acquisition fee plus fees
    pub gross_cap_cost: Money,
    /// Down payment + net trade + rebates
    pub cap_cost_reduction: Money,
    pub adjusted_cap_cost: Money,
    /// Residual base × residual percent; base is MSRP, falling back to
    /// selling price when MSRP is unknown
    pub residual_value: Money,
    pub depreciation: Money,
    pub monthly_depreciation: Money,
    pub monthly_rent_charge: Money,
    pub pre_tax_monthly: Money,
    pub monthly_tax: Money,
    pub monthly_payment: Money,
    /// Down payment + first month's payment + security deposit +
    /// acquisition fee
    pub due_at_signing: Money,
    pub total_lease_cost: Money,
}

/// Compute the monthly lease payment and lease totals for a deal option.
pub fn calculate_lease(opt: &DealOption) -> LeaseResult {
    let net_trade = (opt.trade_value - opt.trade_payoff).max(Decimal::ZERO);
    let total_fees = opt.doc_fee + opt.title_reg_fee + opt.other_fees;

    let gross_cap_cost = opt.selling_price + opt.acquisition_fee + total_fees;
    let cap_cost_reduction = opt.down_payment + net_trade + opt.rebates;
    let adjusted_cap_cost = gross_cap_cost - cap_cost_reduction;

    let residual_base = if opt.msrp > Decimal::ZERO {
        opt.msrp
    } else {
        opt.selling_price
    };
    let residual_value = residual_base * opt.residual_pct / dec!(100);

    let depreciation = adjusted_cap_cost - residual_value;

    // A non-positive term is treated as a 1-month lease, never a failure.
    let term = if opt.lease_term > 0 { opt.lease_term } else { 1 };
    let term_dec = Decimal::from(term);

    let monthly_depreciation = depreciation / term_dec;
    let monthly_rent_charge = (adjusted_cap_cost + residual_value) * opt.money_factor;
    let pre_tax_monthly = monthly_depreciation + monthly_rent_charge;
    let monthly_tax = pre_tax_monthly * opt.tax_rate / dec!(100);
    let monthly_payment = pre_tax_monthly + monthly_tax;

    // Exactly one month's payment is collected at signing; subtracting it
    // from the running total below cancels the double count.
    let due_at_signing =
        opt.down_payment + monthly_payment + opt.security_deposit + opt.acquisition_fee;
    let total_lease_cost = monthly_payment * term_dec + due_at_signing - monthly_payment;

    LeaseResult {
        net_trade: round_money(net_trade),
        total_fees: round_money(total_fees),
        gross_cap_cost: round_money(gross_cap_cost),
        cap_cost_reduction: round_money(cap_cost_reduction),
        adjusted_cap_cost: round_money(adjusted_cap_cost),
        residual_value: round_money(residual_value),
        depreciation: round_money(depreciation),
        monthly_depreciation: round_money(monthly_depreciation),
        monthly_rent_charge: round_money(monthly_rent_charge),
        pre_tax_monthly: round_money(pre_tax_monthly),
        monthly_tax: round_money(monthly_tax),
        monthly_payment: round_money(monthly_payment),
        due_at_signing: round_money(due_at_signing),
        total_lease_cost: round_money(total_lease_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::DealType;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn clean_lease() -> DealOption {
        DealOption {
            id: "l-1".to_string(),
            label: "Lease".to_string(),
            deal_type: DealType::Lease,
            selling_price: dec!(30000),
            msrp: dec!(30000),
            residual_pct: dec!(60),
            lease_term: 36,
            money_factor: dec!(0.001),
            ..DealOption::default()
        }
    }

    #[test]
    fn test_clean_lease_numbers() {
        let result = calculate_lease(&clean_lease());
        assert_eq!(result.residual_value, dec!(18000.00));
        assert_eq!(result.depreciation, dec!(12000.00));
        // 12000/36 + (30000+18000)*0.001 = 333.33 + 48.00
        assert_eq!(result.monthly_payment, dec!(381.33));
        assert_eq!(result.due_at_signing, dec!(381.33));
        assert_eq!(result.total_lease_cost, dec!(13728.00));
    }

    #[test]
    fn test_msrp_fallback_to_selling_price() {
        let mut opt = clean_lease();
        opt.msrp = dec!(0);
        let result = calculate_lease(&opt);
        assert_eq!(result.residual_value, dec!(18000.00));
    }

    #[test]
    fn test_zero_term_treated_as_one_month() {
        let mut opt = clean_lease();
        opt.lease_term = 0;
        let result = calculate_lease(&opt);
        // The whole depreciation lands in a single month
        assert_eq!(result.monthly_depreciation, dec!(12000.00));
        assert_eq!(result.monthly_payment, dec!(12048.00));
    }

    #[test]
    fn test_monthly_stream_taxation() {
        let mut opt = clean_lease();
        opt.tax_rate = dec!(6);
        let result = calculate_lease(&opt);
        // Tax applies to the monthly payment, not the vehicle price:
        // 381.3333... * 6% = 22.88
        assert_eq!(result.monthly_tax, dec!(22.88));
        assert_eq!(result.monthly_payment, dec!(404.21));
    }

    #[test]
    fn test_cap_cost_reduction_includes_clamped_trade() {
        let mut opt = clean_lease();
        opt.down_payment = dec!(2000);
        opt.rebates = dec!(500);
        opt.trade_value = dec!(4000);
        opt.trade_payoff = dec!(6000);
        let result = calculate_lease(&opt);
        assert_eq!(result.net_trade, dec!(0));
        assert_eq!(result.cap_cost_reduction, dec!(2500));
        assert_eq!(result.adjusted_cap_cost, dec!(27500));
    }

    #[test]
    fn test_due_at_signing_holds_one_payment() {
        let mut opt = clean_lease();
        opt.down_payment = dec!(1500);
        opt.security_deposit = dec!(400);
        opt.acquisition_fee = dec!(695);
        let result = calculate_lease(&opt);
        // Down payment also reduces cap cost: adjusted = 30000+695-1500
        assert_eq!(result.adjusted_cap_cost, dec!(29195));
        assert_eq!(result.monthly_payment, dec!(358.17));
        // 1500 down + 358.17 first payment + 400 deposit + 695 acquisition
        assert_eq!(result.due_at_signing, dec!(2953.17));
        assert_eq!(result.total_lease_cost, dec!(15489.02));
    }

    #[test]
    fn test_total_cost_never_double_counts_first_payment() {
        // Messy numbers, no signing extras: the total must equal
        // term × unrounded monthly payment to within a cent.
        let mut opt = clean_lease();
        opt.selling_price = dec!(28754.19);
        opt.msrp = dec!(31200);
        opt.residual_pct = dec!(57);
        opt.money_factor = dec!(0.00217);
        opt.tax_rate = dec!(7.1);
        let result = calculate_lease(&opt);

        let term = Decimal::from(36);
        let adjusted = dec!(28754.19);
        let residual = dec!(31200) * dec!(57) / dec!(100);
        let pre_tax = (adjusted - residual) / term + (adjusted + residual) * dec!(0.00217);
        let unrounded_monthly = pre_tax * (Decimal::ONE + dec!(7.1) / dec!(100));

        assert!((result.total_lease_cost - unrounded_monthly * term).abs() < dec!(0.01));
    }
}
