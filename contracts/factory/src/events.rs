//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "FactoryInit"),), (admin.clone(),))
}

/// Emitted when a new pair is registered
pub fn emit_pair_created(
    env: &Env,
    pair_id: u32,
    token: &Address,
    asset: &Address,
    scheduled_start_time: u64,
) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (pair_id, token.clone(), asset.clone(), scheduled_start_time),
    )
}

/// Emitted when a pair's scheduled start moves
pub fn emit_start_time_reset(env: &Env, pair_id: u32, new_start: u64) {
    env.events()
        .publish((Symbol::new(env, "StartReset"), pair_id), new_start)
}

/// Emitted when the router capability holder changes
pub fn emit_router_set(env: &Env, router: &Address) {
    env.events()
        .publish((Symbol::new(env, "RouterSet"),), (router.clone(),))
}

/// Emitted when the orchestrator capability holder changes
pub fn emit_bonding_set(env: &Env, bonding: &Address) {
    env.events()
        .publish((Symbol::new(env, "BondingSet"),), (bonding.clone(),))
}

/// Emitted when tax rates are updated
pub fn emit_tax_updated(env: &Env, base_buy_pct: u32, base_sell_pct: u32, max_total_pct: u32) {
    env.events().publish(
        (Symbol::new(env, "TaxUpdated"),),
        (base_buy_pct, base_sell_pct, max_total_pct),
    )
}

/// Emitted when vault addresses are updated
pub fn emit_vaults_updated(env: &Env, base: &Address, anti_snipe: &Address, extra: &Address) {
    env.events().publish(
        (Symbol::new(env, "VaultsUpdated"),),
        (base.clone(), anti_snipe.clone(), extra.clone()),
    )
}

/// Emitted when curve parameters are updated
pub fn emit_curve_updated(env: &Env, asset_rate_bps: u32, max_tx_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "CurveUpdated"),),
        (asset_rate_bps, max_tx_bps),
    )
}
