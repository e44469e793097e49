use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use deal_engine_core::deal::{DealOption, DealType};
use deal_engine_core::finance::calculate_finance;
use deal_engine_core::lease::calculate_lease;
use deal_engine_core::quote::{calculate_option, PaymentQuote};
use deal_engine_core::validate;

use crate::input;

/// Pricing flags shared by the finance and lease commands.
#[derive(Args)]
pub struct PricingArgs {
    /// Negotiated selling price
    #[arg(long)]
    pub selling_price: Option<Decimal>,

    /// Manufacturer's suggested retail price
    #[arg(long)]
    pub msrp: Option<Decimal>,

    /// Cash down payment
    #[arg(long)]
    pub down_payment: Option<Decimal>,

    /// Trade-in value
    #[arg(long)]
    pub trade_value: Option<Decimal>,

    /// Remaining payoff on the trade-in
    #[arg(long)]
    pub trade_payoff: Option<Decimal>,

    /// Manufacturer rebates
    #[arg(long)]
    pub rebates: Option<Decimal>,

    /// Documentation fee
    #[arg(long)]
    pub doc_fee: Option<Decimal>,

    /// Title and registration fee
    #[arg(long)]
    pub title_reg_fee: Option<Decimal>,

    /// Other fees
    #[arg(long)]
    pub other_fees: Option<Decimal>,

    /// Sales tax rate as a percent (e.g. 6.25)
    #[arg(long)]
    pub tax_rate: Option<Decimal>,
}

impl PricingArgs {
    fn apply(&self, opt: &mut DealOption) {
        let fields = [
            (&self.selling_price, &mut opt.selling_price),
            (&self.msrp, &mut opt.msrp),
            (&self.down_payment, &mut opt.down_payment),
            (&self.trade_value, &mut opt.trade_value),
            (&self.trade_payoff, &mut opt.trade_payoff),
            (&self.rebates, &mut opt.rebates),
            (&self.doc_fee, &mut opt.doc_fee),
            (&self.title_reg_fee, &mut opt.title_reg_fee),
            (&self.other_fees, &mut opt.other_fees),
            (&self.tax_rate, &mut opt.tax_rate),
        ];
        for (flag, field) in fields {
            if let Some(v) = flag {
                *field = *v;
            }
        }
    }
}

/// Arguments for a finance (amortizing loan) calculation
#[derive(Args)]
pub struct FinanceArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Annual percentage rate as a percent (e.g. 6.5)
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to a JSON or YAML deal-option file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a lease calculation
#[derive(Args)]
pub struct LeaseArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Lease money factor (decimal, e.g. 0.00125)
    #[arg(long)]
    pub money_factor: Option<Decimal>,

    /// Residual value as a percent of MSRP (e.g. 57)
    #[arg(long)]
    pub residual_pct: Option<Decimal>,

    /// Lease term in months
    #[arg(long)]
    pub lease_term: Option<u32>,

    /// Lease acquisition fee
    #[arg(long)]
    pub acquisition_fee: Option<Decimal>,

    /// Refundable security deposit
    #[arg(long)]
    pub security_deposit: Option<Decimal>,

    /// Path to a JSON or YAML deal-option file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a type-dispatched quote
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to a JSON or YAML deal-option file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for comparing a set of deal options
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON or YAML file holding an array of deal options
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_finance(args: FinanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let opt = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let mut opt = DealOption {
            deal_type: DealType::Finance,
            ..DealOption::default()
        };
        args.pricing.apply(&mut opt);
        if let Some(apr) = args.apr {
            opt.apr = apr;
        }
        if let Some(term) = args.term_months {
            opt.term_months = term;
        }
        opt
    };
    validate::check_option(&opt)?;
    Ok(serde_json::to_value(calculate_finance(&opt))?)
}

pub fn run_lease(args: LeaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let opt = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let mut opt = DealOption {
            deal_type: DealType::Lease,
            ..DealOption::default()
        };
        args.pricing.apply(&mut opt);
        if let Some(mf) = args.money_factor {
            opt.money_factor = mf;
        }
        if let Some(pct) = args.residual_pct {
            opt.residual_pct = pct;
        }
        if let Some(term) = args.lease_term {
            opt.lease_term = term;
        }
        if let Some(fee) = args.acquisition_fee {
            opt.acquisition_fee = fee;
        }
        if let Some(dep) = args.security_deposit {
            opt.security_deposit = dep;
        }
        opt
    };
    validate::check_option(&opt)?;
    Ok(serde_json::to_value(calculate_lease(&opt))?)
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let opt: DealOption = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for quote".into());
    };
    validate::check_option(&opt)?;
    Ok(serde_json::to_value(calculate_option(&opt))?)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let options: Vec<DealOption> = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for compare".into());
    };

    let mut rows = Vec::with_capacity(options.len());
    for opt in &options {
        validate::check_option(opt)?;
        let row = match calculate_option(opt) {
            PaymentQuote::Finance(r) => serde_json::json!({
                "label": opt.label,
                "type": "finance",
                "monthly_payment": r.monthly_payment,
                "amount_financed": r.amount_financed,
                "total_cost": r.total_cost,
            }),
            PaymentQuote::Lease(r) => serde_json::json!({
                "label": opt.label,
                "type": "lease",
                "monthly_payment": r.monthly_payment,
                "due_at_signing": r.due_at_signing,
                "total_cost": r.total_lease_cost,
            }),
        };
        rows.push(row);
    }

    Ok(serde_json::json!({ "results": rows }))
}
