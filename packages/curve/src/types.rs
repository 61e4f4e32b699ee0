//! Reserve pair state shared between the factory, router and orchestrator

use soroban_sdk::{contracttype, Address};

/// Lifecycle state of a launched pair
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PairState {
    /// Created and seeded, public trading not yet open
    Seeding,
    /// Public trading open against the curve
    Trading,
    /// Reserves migrated out, trading permanently disabled
    Graduated,
}

/// Two-sided virtual reserve record for one launched asset
///
/// The invariant product is `token_reserve * (asset_reserve + virtual_offset)`.
/// Taxes never enter the curve, only net trade amounts do, so the product is
/// conserved up to pool-favoring rounding.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ReservePair {
    /// Launched asset
    pub token: Address,
    /// Quote asset
    pub asset: Address,
    /// Launched-asset inventory still inside the curve
    pub token_reserve: i128,
    /// Accumulated quote asset inside the curve
    pub asset_reserve: i128,
    /// Configuration-derived steepness constant, immutable after seeding
    pub virtual_offset: i128,
    /// Per-transaction cap on curve-side token amounts
    pub max_tx_amount: i128,
    /// Earliest time public trading may open
    pub scheduled_start_time: u64,
    /// Time trading actually opened; 0 = unset. Anti-snipe clock zero point.
    pub launch_time: u64,
    pub state: PairState,
}
