// Orchestrator error module for Fairlaunch

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BondingError {
    // Initialization errors (3000-3099)
    AlreadyInitialized = 3000,
    NotInitialized = 3001,

    // Authorization errors (3100-3199)
    Unauthorized = 3100,

    // Input errors (3200-3299)
    InvalidInput = 3200,
    ZeroAmount = 3201,

    // Lifecycle errors (3300-3399)
    InvalidState = 3300,
    Expired = 3301,
    NotDrainable = 3302,

    // Registry errors (3400-3499)
    PairNotFound = 3400,
    RecordNotFound = 3401,
}
