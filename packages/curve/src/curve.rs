//! Constant-product math over `(token_reserve, asset_reserve + virtual_offset)`
//!
//! Every division rounds toward the pool: paid-out amounts are floored by
//! rounding the surviving reserve up, so the invariant product never
//! decreases across a trade and the pool never over-delivers.

use soroban_sdk::Env;

use crate::math::{i128_to_u128_safe, mul_div, mul_div_ceil, u128_to_i128_saturating};
use crate::types::ReservePair;
use crate::BPS_DENOM;

/// Result of seeding a fresh curve with the creator's initial purchase
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedResult {
    pub token_out: i128,
    pub token_reserve: i128,
    pub asset_reserve: i128,
}

/// Curve-steepness constant derived from the configured asset rate.
///
/// `asset_rate_bps = 10_000` yields an offset equal to the curve supply.
pub fn virtual_offset(env: &Env, curve_supply: i128, asset_rate_bps: u32) -> i128 {
    let supply = i128_to_u128_safe(curve_supply);
    u128_to_i128_saturating(mul_div(env, supply, BPS_DENOM as u128, asset_rate_bps as u128))
}

/// Per-transaction cap: `max_tx_bps` of the curve supply.
pub fn max_tx_amount(env: &Env, curve_supply: i128, max_tx_bps: u32) -> i128 {
    let supply = i128_to_u128_safe(curve_supply);
    u128_to_i128_saturating(mul_div(env, supply, max_tx_bps as u128, BPS_DENOM as u128))
}

/// Initialize reserves once and execute the creator's untaxed purchase
/// against the fresh curve. A zero purchase just opens the curve at
/// `(curve_supply, 0)`.
pub fn seed_quote(
    env: &Env,
    curve_supply: i128,
    virtual_offset: i128,
    net_asset_in: i128,
) -> SeedResult {
    if net_asset_in <= 0 {
        return SeedResult {
            token_out: 0,
            token_reserve: curve_supply,
            asset_reserve: 0,
        };
    }

    let supply = i128_to_u128_safe(curve_supply);
    let offset = i128_to_u128_safe(virtual_offset);
    let net_in = i128_to_u128_safe(net_asset_in);

    let new_token_reserve = mul_div_ceil(env, supply, offset, offset + net_in);
    let token_out = supply - new_token_reserve;

    SeedResult {
        token_out: u128_to_i128_saturating(token_out),
        token_reserve: u128_to_i128_saturating(new_token_reserve),
        asset_reserve: net_asset_in,
    }
}

/// Token output for a net (post-tax) quote-asset input.
///
/// `None` when the curve cannot produce a positive output.
pub fn quote_buy(env: &Env, pair: &ReservePair, net_asset_in: i128) -> Option<i128> {
    if net_asset_in <= 0 || pair.token_reserve <= 0 {
        return None;
    }

    let token_reserve = i128_to_u128_safe(pair.token_reserve);
    let asset_side = i128_to_u128_safe(pair.asset_reserve) + i128_to_u128_safe(pair.virtual_offset);
    let net_in = i128_to_u128_safe(net_asset_in);

    let new_token_reserve = mul_div_ceil(env, token_reserve, asset_side, asset_side + net_in);
    let token_out = token_reserve.saturating_sub(new_token_reserve);

    if token_out == 0 {
        return None;
    }
    Some(u128_to_i128_saturating(token_out))
}

/// Gross (pre-tax) quote-asset output for a token input.
///
/// The sell tax is deducted from this output by the caller; the curve update
/// always uses the gross value. `None` when the output floors to zero or
/// would exceed the real asset reserve (the virtual offset is not payable).
pub fn quote_sell(env: &Env, pair: &ReservePair, token_in: i128) -> Option<i128> {
    if token_in <= 0 || pair.token_reserve <= 0 {
        return None;
    }

    let token_reserve = i128_to_u128_safe(pair.token_reserve);
    let asset_side = i128_to_u128_safe(pair.asset_reserve) + i128_to_u128_safe(pair.virtual_offset);
    let token_in_u = i128_to_u128_safe(token_in);

    let new_asset_side = mul_div_ceil(env, token_reserve, asset_side, token_reserve + token_in_u);
    let gross_out = asset_side.saturating_sub(new_asset_side);

    if gross_out == 0 {
        return None;
    }
    let gross_out = u128_to_i128_saturating(gross_out);
    if gross_out > pair.asset_reserve {
        return None;
    }
    Some(gross_out)
}
