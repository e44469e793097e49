use clap::Args;
use serde_json::Value;

use deal_engine_core::deal::{blank_option, DealDefaults};
use deal_engine_core::error::DealEngineError;

use crate::input;

/// Arguments for seeding a blank deal option
#[derive(Args)]
pub struct BlankArgs {
    /// Identifier for the new option
    #[arg(long)]
    pub id: String,

    /// Display label for the comparison column
    #[arg(long)]
    pub label: String,

    /// Path to a JSON or YAML dealership-defaults file (built-in defaults
    /// when omitted)
    #[arg(long)]
    pub defaults: Option<String>,

    /// Credit tier name to seed APR and money factor from
    #[arg(long)]
    pub tier: Option<String>,
}

pub fn run_blank(args: BlankArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let defaults: DealDefaults = if let Some(ref path) = args.defaults {
        input::file::read_input(path)?
    } else {
        DealDefaults::default()
    };

    let tier = match args.tier {
        Some(ref name) => Some(
            defaults
                .tier(name)
                .ok_or_else(|| DealEngineError::UnknownCreditTier(name.clone()))?,
        ),
        None => None,
    };

    let opt = blank_option(&args.id, &args.label, &defaults, tier);
    Ok(serde_json::to_value(opt)?)
}
