// Fairlaunch Curve Package

#![no_std]

pub mod math;
pub mod types;

mod curve;

pub use curve::{
    max_tx_amount,
    quote_buy,
    quote_sell,
    seed_quote,
    virtual_offset,
    SeedResult,
};
pub use math::{div_ceil, i128_to_u128_safe, mul_div, mul_div_ceil, u128_to_i128_saturating};
pub use types::{PairState, ReservePair};

/// Denominator for basis-point parameters (asset rate, max-tx fraction).
pub const BPS_DENOM: u32 = 10_000;
