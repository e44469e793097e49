//! Dispatch a deal option to the finance or lease calculator by its
//! declared type.

use serde::{Deserialize, Serialize};

use crate::deal::{DealOption, DealType};
use crate::finance::{calculate_finance, FinanceResult};
use crate::lease::{calculate_lease, LeaseResult};

/// The payment quote for one deal option, tagged by structure type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentQuote {
    Finance(FinanceResult),
    Lease(LeaseResult),
}

impl PaymentQuote {
    /// The headline monthly payment, whichever structure produced it.
    pub fn monthly_payment(&self) -> rust_decimal::Decimal {
        match self {
            PaymentQuote::Finance(r) => r.monthly_payment,
            PaymentQuote::Lease(r) => r.monthly_payment,
        }
    }
}

/// Route a deal option to the matching calculator.
pub fn calculate_option(opt: &DealOption) -> PaymentQuote {
    match opt.deal_type {
        DealType::Finance => PaymentQuote::Finance(calculate_finance(opt)),
        DealType::Lease => PaymentQuote::Lease(calculate_lease(opt)),
    }
}
