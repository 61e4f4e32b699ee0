//! Router events

use soroban_sdk::{Address, Env, Symbol};

use fairlaunch_tax::TaxBreakdown;

/// Emitted when router is initialized
pub fn emit_initialized(env: &Env, factory: &Address, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "RouterInit"),),
        (factory.clone(), admin.clone()),
    )
}

/// Emitted when a pair is seeded with its initial reserves
pub fn emit_seeded(
    env: &Env,
    pair_id: u32,
    token_reserve: i128,
    asset_reserve: i128,
    creator_token_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Seeded"),),
        (pair_id, token_reserve, asset_reserve, creator_token_out),
    )
}

/// Emitted on every executed trade with the full tax breakdown
pub fn emit_swap(
    env: &Env,
    pair_id: u32,
    is_buy: bool,
    gross_amount: i128,
    amount_out: i128,
    tax: &TaxBreakdown,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), pair_id),
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

/// Emitted when a pair's reserves migrate out at graduation
pub fn emit_graduated_out(
    env: &Env,
    pair_id: u32,
    recipient: &Address,
    token_amount: i128,
    asset_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "GraduatedOut"),),
        (pair_id, recipient.clone(), token_amount, asset_amount),
    )
}

/// Emitted on a privileged reserve drain
pub fn emit_drained(
    env: &Env,
    pair_id: u32,
    recipient: &Address,
    token_amount: i128,
    asset_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Drained"),),
        (pair_id, recipient.clone(), token_amount, asset_amount),
    )
}
