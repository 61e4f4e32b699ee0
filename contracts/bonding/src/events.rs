//! Orchestrator events

use soroban_sdk::{Address, Env, Symbol};

use fairlaunch_tax::TaxBreakdown;

/// Emitted when the orchestrator is initialized
pub fn emit_initialized(env: &Env, admin: &Address, factory: &Address, router: &Address) {
    env.events().publish(
        (Symbol::new(env, "PadInit"),),
        (admin.clone(), factory.clone(), router.clone()),
    )
}

/// Emitted when a launch is registered and its curve seeded
pub fn emit_pre_launched(
    env: &Env,
    pair_id: u32,
    creator: &Address,
    token: &Address,
    initial_token_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "PreLaunched"), pair_id),
        (creator.clone(), token.clone(), initial_token_out),
    )
}

/// Emitted when public trading opens
pub fn emit_launched(env: &Env, pair_id: u32, launch_time: u64) {
    env.events()
        .publish((Symbol::new(env, "Launched"), pair_id), launch_time)
}

/// Emitted on every trade routed through the orchestrator
pub fn emit_traded(
    env: &Env,
    pair_id: u32,
    is_buy: bool,
    gross_amount: i128,
    amount_out: i128,
    tax: &TaxBreakdown,
) {
    env.events().publish(
        (Symbol::new(env, "Traded"), pair_id),
        (
            is_buy,
            gross_amount,
            amount_out,
            tax.base_amount,
            tax.anti_snipe_amount,
            tax.extra_amount,
        ),
    )
}

/// Emitted exactly once when a pair graduates to the external pool
pub fn emit_graduated(env: &Env, pair_id: u32, position_ref: u64, gov_record_id: u64) {
    env.events().publish(
        (Symbol::new(env, "Graduated"), pair_id),
        (position_ref, gov_record_id),
    )
}

/// Emitted when a creator moves the scheduled start
pub fn emit_start_time_reset(env: &Env, pair_id: u32, new_start: u64) {
    env.events()
        .publish((Symbol::new(env, "StartReset"), pair_id), new_start)
}

/// Emitted on an admin reserve drain
pub fn emit_drained(env: &Env, pair_id: u32, recipient: &Address, token_amount: i128, asset_amount: i128) {
    env.events().publish(
        (Symbol::new(env, "PadDrained"), pair_id),
        (recipient.clone(), token_amount, asset_amount),
    )
}

/// Emitted when the admin overrides a pair's graduation threshold
pub fn emit_threshold_set(env: &Env, pair_id: u32, threshold: i128) {
    env.events()
        .publish((Symbol::new(env, "Threshold"), pair_id), threshold)
}

/// Emitted when the admin toggles the drainable flag
pub fn emit_drainable_set(env: &Env, pair_id: u32, drainable: bool) {
    env.events()
        .publish((Symbol::new(env, "Drainable"), pair_id), drainable)
}
