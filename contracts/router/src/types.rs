//! Router type definitions

use soroban_sdk::{contracttype, Address};

use fairlaunch_tax::TaxBreakdown;

/// Router configuration
///
/// `bonding` is the orchestrator address; every mutating entry point is
/// gated on it.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RouterConfig {
    pub admin: Address,
    pub factory: Address,
    pub bonding: Option<Address>,
}

/// Settlement summary for one executed trade
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapOutcome {
    /// Gross amount pulled from the trader
    pub amount_in: i128,
    /// Amount delivered to the trader (net of sell tax)
    pub amount_out: i128,
    pub tax: TaxBreakdown,
}

/// Raw mirror of the factory's `CurveSettings` for cross-contract reads
#[contracttype]
#[derive(Clone, Debug)]
pub struct CurveSettingsRaw {
    pub asset_rate_bps: u32,
    pub max_tx_bps: u32,
}
