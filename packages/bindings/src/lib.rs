//! Node bindings for the deal-structuring engine.
//!
//! The surrounding web system calls these to render payment cards and to
//! embed the identical figures in generated documents. Each function takes
//! a JSON string and returns a JSON string, so the Node side never handles
//! decimal types directly.

use napi::Result as NapiResult;
use napi_derive::napi;

use deal_engine_core::deal::{blank_option, CreditTier, DealDefaults, DealOption};
use deal_engine_core::validate;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_option(input_json: &str) -> NapiResult<DealOption> {
    let opt: DealOption = serde_json::from_str(input_json).map_err(to_napi_error)?;
    validate::check_option(&opt).map_err(to_napi_error)?;
    Ok(opt)
}

#[napi]
pub fn calculate_finance_payment(input_json: String) -> NapiResult<String> {
    let opt = parse_option(&input_json)?;
    let result = deal_engine_core::finance::calculate_finance(&opt);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lease_payment(input_json: String) -> NapiResult<String> {
    let opt = parse_option(&input_json)?;
    let result = deal_engine_core::lease::calculate_lease(&opt);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn calculate_deal_option(input_json: String) -> NapiResult<String> {
    let opt = parse_option(&input_json)?;
    let result = deal_engine_core::quote::calculate_option(&opt);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn create_blank_option(
    id: String,
    label: String,
    defaults_json: Option<String>,
    tier_name: Option<String>,
) -> NapiResult<String> {
    let defaults: DealDefaults = match defaults_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => DealDefaults::default(),
    };

    let tier: Option<&CreditTier> = match tier_name {
        Some(ref name) => Some(
            defaults
                .tier(name)
                .ok_or_else(|| to_napi_error(format!("Unknown credit tier: {name}")))?,
        ),
        None => None,
    };

    let opt = blank_option(&id, &label, &defaults, tier);
    serde_json::to_string(&opt).map_err(to_napi_error)
}
