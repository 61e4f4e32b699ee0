//! Factory type definitions

use soroban_sdk::{contracttype, Address};

/// Factory configuration
///
/// `router` is the only address allowed to mutate pair records; `bonding` is
/// the only address allowed to create them. Both are set after deployment.
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub admin: Address,
    pub router: Option<Address>,
    pub bonding: Option<Address>,
}

/// Registry-level curve parameters applied to every new pair at seeding
#[contracttype]
#[derive(Clone, Debug)]
pub struct CurveSettings {
    /// Shapes the virtual offset: `offset = curve_supply * 10_000 / rate`
    pub asset_rate_bps: u32,
    /// Per-transaction cap as a fraction of curve supply
    pub max_tx_bps: u32,
}
