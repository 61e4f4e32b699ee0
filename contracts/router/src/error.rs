// Router error module for Fairlaunch

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    // Initialization errors (2000-2099)
    AlreadyInitialized = 2000,
    NotInitialized = 2001,

    // Authorization errors (2100-2199)
    Unauthorized = 2100,

    // Input errors (2200-2299)
    ZeroAmount = 2200,
    InvalidInput = 2201,

    // Trade errors (2300-2399)
    InvalidState = 2300,
    InsufficientLiquidity = 2301,
    MaxTxExceeded = 2302,
    SlippageTooHigh = 2303,
    NoLiquidity = 2304,

    // Registry errors (2400-2499)
    PairNotFound = 2400,
}
