//! Deal option model: the immutable input description of one proposed
//! finance or lease structure, dealership-level defaults used to seed new
//! options, and the factory that builds a blank comparison column.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, MoneyFactor, Percent};

// ---------------------------------------------------------------------------
// Credit tiers and dealership defaults
// ---------------------------------------------------------------------------

/// A named financing risk bucket with its default annual percentage rate
/// and lease money factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditTier {
    pub name: String,
    /// Default APR as a percent (5.9 = 5.9%)
    pub apr: Percent,
    /// Default lease money factor (decimal, not percent)
    pub money_factor: MoneyFactor,
}

/// Dealership-level configuration used to seed new deal options.
///
/// Never mutated by the calculators; a `DealOption` copies what it needs
/// at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealDefaults {
    pub doc_fee: Money,
    pub title_reg_fee: Money,
    pub acquisition_fee: Money,
    pub disposition_fee: Money,
    /// Sales tax rate as a percent (6.25 = 6.25%)
    pub tax_rate: Percent,
    /// Default finance term in months
    pub term_months: u32,
    /// Default lease term in months
    pub lease_term: u32,
    /// Default annual mileage allowance for leases
    pub annual_mileage: u32,
    /// Per-mile charge above the mileage allowance
    pub excess_mileage_charge: Money,
    pub credit_tiers: Vec<CreditTier>,
}

impl Default for DealDefaults {
    fn default() -> Self {
        DealDefaults {
            doc_fee: dec!(499),
            title_reg_fee: dec!(325),
            acquisition_fee: dec!(695),
            disposition_fee: dec!(395),
            tax_rate: dec!(6.25),
            term_months: 60,
            lease_term: 36,
            annual_mileage: 12_000,
            excess_mileage_charge: dec!(0.25),
            credit_tiers: vec![
                CreditTier {
                    name: "Tier 1".to_string(),
                    apr: dec!(5.9),
                    money_factor: dec!(0.00246),
                },
                CreditTier {
                    name: "Tier 2".to_string(),
                    apr: dec!(7.9),
                    money_factor: dec!(0.00329),
                },
                CreditTier {
                    name: "Tier 3".to_string(),
                    apr: dec!(10.9),
                    money_factor: dec!(0.00454),
                },
            ],
        }
    }
}

impl DealDefaults {
    /// Look up a credit tier by name (case-insensitive).
    pub fn tier(&self, name: &str) -> Option<&CreditTier> {
        self.credit_tiers
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

// ---------------------------------------------------------------------------
// Vehicle snapshot
// ---------------------------------------------------------------------------

/// Denormalized copy of vehicle attributes captured when the option was
/// created. Owned and refreshed by the surrounding persistence layer;
/// read-only to the calculators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub year: u16,
    pub make: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    pub mileage: u32,
    pub msrp: Money,
    /// Date the snapshot was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Deal option
// ---------------------------------------------------------------------------

/// Whether an option is structured as an amortizing loan or a lease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    #[default]
    Finance,
    Lease,
}

/// One proposed purchase or lease structure — the computation input.
///
/// Exactly one `deal_type` is active; fields irrelevant to the inactive
/// type are ignored by the corresponding calculator. Numeric fields are
/// non-negative by convention, not enforced here (see `validate`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealOption {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,

    // Pricing
    pub selling_price: Money,
    pub msrp: Money,
    pub down_payment: Money,
    pub trade_value: Money,
    pub trade_payoff: Money,
    pub rebates: Money,
    pub doc_fee: Money,
    pub title_reg_fee: Money,
    pub other_fees: Money,
    /// Sales tax rate as a percent
    pub tax_rate: Percent,

    // Finance-only
    /// Annual percentage rate as a percent
    pub apr: Percent,
    pub term_months: u32,

    // Lease-only
    pub money_factor: MoneyFactor,
    /// Residual as a percent of MSRP
    pub residual_pct: Percent,
    pub lease_term: u32,
    pub annual_mileage: u32,
    pub excess_mileage_charge: Money,
    pub acquisition_fee: Money,
    pub disposition_fee: Money,
    pub security_deposit: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_snapshot: Option<VehicleSnapshot>,
}

/// Build a new blank option for a comparison column, seeded from
/// dealership defaults and an optional credit tier.
///
/// Fees, tax rate, terms, and mileage come from `defaults`; APR and money
/// factor from `tier` when given. All monetary, trade, and rebate fields
/// start at zero. Performs no computation.
pub fn blank_option(
    id: &str,
    label: &str,
    defaults: &DealDefaults,
    tier: Option<&CreditTier>,
) -> DealOption {
    DealOption {
        id: id.to_string(),
        label: label.to_string(),
        deal_type: DealType::Finance,
        selling_price: Decimal::ZERO,
        msrp: Decimal::ZERO,
        down_payment: Decimal::ZERO,
        trade_value: Decimal::ZERO,
        trade_payoff: Decimal::ZERO,
        rebates: Decimal::ZERO,
        doc_fee: defaults.doc_fee,
        title_reg_fee: defaults.title_reg_fee,
        other_fees: Decimal::ZERO,
        tax_rate: defaults.tax_rate,
        apr: tier.map(|t| t.apr).unwrap_or(Decimal::ZERO),
        term_months: defaults.term_months,
        money_factor: tier.map(|t| t.money_factor).unwrap_or(Decimal::ZERO),
        residual_pct: Decimal::ZERO,
        lease_term: defaults.lease_term,
        annual_mileage: defaults.annual_mileage,
        excess_mileage_charge: defaults.excess_mileage_charge,
        acquisition_fee: defaults.acquisition_fee,
        disposition_fee: defaults.disposition_fee,
        security_deposit: Decimal::ZERO,
        vehicle_snapshot: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_option_seeds_from_defaults_and_tier() {
        let defaults = DealDefaults::default();
        let tier = defaults.tier("tier 2").cloned().unwrap();
        let opt = blank_option("opt-1", "Column A", &defaults, Some(&tier));

        assert_eq!(opt.id, "opt-1");
        assert_eq!(opt.label, "Column A");
        assert_eq!(opt.deal_type, DealType::Finance);
        assert_eq!(opt.doc_fee, defaults.doc_fee);
        assert_eq!(opt.title_reg_fee, defaults.title_reg_fee);
        assert_eq!(opt.tax_rate, defaults.tax_rate);
        assert_eq!(opt.term_months, defaults.term_months);
        assert_eq!(opt.lease_term, defaults.lease_term);
        assert_eq!(opt.apr, tier.apr);
        assert_eq!(opt.money_factor, tier.money_factor);
        // Monetary / trade / rebate fields start zeroed
        assert_eq!(opt.selling_price, Decimal::ZERO);
        assert_eq!(opt.down_payment, Decimal::ZERO);
        assert_eq!(opt.trade_value, Decimal::ZERO);
        assert_eq!(opt.rebates, Decimal::ZERO);
    }

    #[test]
    fn test_blank_option_without_tier_zeroes_rates() {
        let defaults = DealDefaults::default();
        let opt = blank_option("opt-2", "Column B", &defaults, None);
        assert_eq!(opt.apr, Decimal::ZERO);
        assert_eq!(opt.money_factor, Decimal::ZERO);
    }

    #[test]
    fn test_deal_option_deserializes_partial_json() {
        let opt: DealOption = serde_json::from_str(
            r#"{"type": "lease", "selling_price": "30000", "lease_term": 36}"#,
        )
        .unwrap();
        assert_eq!(opt.deal_type, DealType::Lease);
        assert_eq!(opt.selling_price, Decimal::from(30000));
        assert_eq!(opt.lease_term, 36);
        assert_eq!(opt.down_payment, Decimal::ZERO);
        assert!(opt.vehicle_snapshot.is_none());
    }
}
