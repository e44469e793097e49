//! Opt-in input validation for deal options.
//!
//! The calculators themselves clamp and guard rather than reject, so they
//! always produce a number for a rendering path. Callers that can surface
//! an error to a human (CLI, bindings, web forms) should run this check
//! before computing, so absurd rates and terms are caught upstream instead
//! of yielding arithmetically correct but meaningless figures.

use rust_decimal::Decimal;

use crate::deal::{DealOption, DealType};
use crate::error::DealEngineError;
use crate::DealResult;

/// Reject negative monetary fields, negative rates, and a non-positive
/// term on the active deal type. Fields belonging to the inactive type
/// are not checked, mirroring how the calculators ignore them.
pub fn check_option(opt: &DealOption) -> DealResult<()> {
    let money_fields: [(&str, Decimal); 9] = [
        ("selling_price", opt.selling_price),
        ("msrp", opt.msrp),
        ("down_payment", opt.down_payment),
        ("trade_value", opt.trade_value),
        ("trade_payoff", opt.trade_payoff),
        ("rebates", opt.rebates),
        ("doc_fee", opt.doc_fee),
        ("title_reg_fee", opt.title_reg_fee),
        ("other_fees", opt.other_fees),
    ];
    for (field, value) in money_fields {
        if value < Decimal::ZERO {
            return Err(negative(field));
        }
    }
    if opt.tax_rate < Decimal::ZERO {
        return Err(negative("tax_rate"));
    }

    match opt.deal_type {
        DealType::Finance => {
            if opt.apr < Decimal::ZERO {
                return Err(negative("apr"));
            }
            if opt.term_months == 0 {
                return Err(DealEngineError::InvalidInput {
                    field: "term_months".into(),
                    reason: "Finance term must be greater than zero".into(),
                });
            }
        }
        DealType::Lease => {
            if opt.money_factor < Decimal::ZERO {
                return Err(negative("money_factor"));
            }
            if opt.residual_pct < Decimal::ZERO {
                return Err(negative("residual_pct"));
            }
            for (field, value) in [
                ("acquisition_fee", opt.acquisition_fee),
                ("disposition_fee", opt.disposition_fee),
                ("security_deposit", opt.security_deposit),
            ] {
                if value < Decimal::ZERO {
                    return Err(negative(field));
                }
            }
            if opt.lease_term == 0 {
                return Err(DealEngineError::InvalidInput {
                    field: "lease_term".into(),
                    reason: "Lease term must be greater than zero".into(),
                });
            }
        }
    }

    Ok(())
}

fn negative(field: &str) -> DealEngineError {
    DealEngineError::InvalidInput {
        field: field.into(),
        reason: "Must not be negative".into(),
    }
}
