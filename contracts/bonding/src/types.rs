//! Orchestrator type definitions

use soroban_sdk::{contracttype, Address, String};

use fairlaunch_tax::{AssetCategory, TaxBreakdown};

/// Global orchestrator configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct PadConfig {
    pub admin: Address,
    pub factory: Address,
    pub router: Address,
    /// Quote asset every curve trades against
    pub quote_asset: Address,
    pub fee_recipient: Address,
    /// Flat fee carved out of the creator's initial purchase
    pub launch_fee: i128,
    /// Total supply every launched token must bring
    pub initial_supply: i128,
    /// Default graduation threshold as a percent of the curve supply
    pub graduation_threshold_pct: u32,
    pub external_pool: Address,
    pub governance_registry: Address,
}

/// Per-launch bookkeeping, keyed by the factory's pair id
#[contracttype]
#[derive(Clone, Debug)]
pub struct LaunchRecord {
    pub creator: Address,
    pub token: Address,
    pub name: String,
    pub ticker: String,
    pub category: AssetCategory,
    /// Graduation fires when `token_reserve` falls to or below this
    pub graduation_threshold: i128,
    pub team_reserved_amount: i128,
    pub team_reserved_recipient: Address,
    pub launch_fee: i128,
    pub drainable: bool,
    pub graduated: bool,
    /// External pool position, set at graduation
    pub position_ref: u64,
    /// Governance registry record, set at graduation
    pub gov_record_id: u64,
}

/// Creator-supplied launch parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct PreLaunchParams {
    pub token: Address,
    pub name: String,
    pub ticker: String,
    pub category: AssetCategory,
    /// Gross initial purchase; the launch fee comes out of this
    pub purchase_amount: i128,
    pub team_reserved_amount: i128,
    pub team_reserved_recipient: Address,
    pub scheduled_start_time: u64,
}

/// Raw mirror of the router's `SwapOutcome` for cross-contract reads
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapOutcomeRaw {
    pub amount_in: i128,
    pub amount_out: i128,
    pub tax: TaxBreakdown,
}
