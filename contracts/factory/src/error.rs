// Factory error module for Fairlaunch

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Pair registry errors (1100-1199)
    AlreadyExists = 1100,
    PairNotFound = 1101,

    // Input/configuration errors (1200-1299)
    InvalidInput = 1200,

    // Lifecycle errors (1300-1399)
    InvalidState = 1300,

    // Authorization errors (1400-1499)
    Unauthorized = 1400,

    // Reserve errors (1500-1599)
    InsufficientLiquidity = 1500,
    NoLiquidity = 1501,
}
