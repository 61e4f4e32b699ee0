// Fairlaunch Tax Package

#![no_std]

mod engine;
mod types;

pub use engine::{anti_snipe_rate, compute_rates, compute_tax, TaxRates};
pub use types::{AssetCategory, TaxBreakdown, TaxSettings, TradeDirection};

/// Rates are whole-percent units; amounts are `gross * pct / PCT_DENOM`.
pub const PCT_DENOM: i128 = 100;
