#![allow(dead_code)]

use fairlaunch_factory::{CurveSettings, FairlaunchFactory, FairlaunchFactoryClient};
use fairlaunch_tax::TaxSettings;
use soroban_sdk::{testutils::Address as _, Address, Env};

// Test constants
pub const DEFAULT_BASE_BUY_PCT: u32 = 1;
pub const DEFAULT_BASE_SELL_PCT: u32 = 2;
pub const DEFAULT_ANTI_SNIPE_START_PCT: u32 = 99;
pub const DEFAULT_ANTI_SNIPE_WINDOW_MIN: u32 = 120;
pub const DEFAULT_EXTRA_PCT: u32 = 5;
pub const DEFAULT_MAX_TOTAL_PCT: u32 = 99;
pub const DEFAULT_ASSET_RATE_BPS: u32 = 10_000;
pub const DEFAULT_MAX_TX_BPS: u32 = 500;

pub struct FactorySetup<'a> {
    pub client: FairlaunchFactoryClient<'a>,
    pub admin: Address,
    pub router: Address,
    pub bonding: Address,
}

pub fn default_tax(env: &Env) -> TaxSettings {
    TaxSettings {
        base_buy_pct: DEFAULT_BASE_BUY_PCT,
        base_sell_pct: DEFAULT_BASE_SELL_PCT,
        anti_snipe_start_pct: DEFAULT_ANTI_SNIPE_START_PCT,
        anti_snipe_window_minutes: DEFAULT_ANTI_SNIPE_WINDOW_MIN,
        extra_category_pct: DEFAULT_EXTRA_PCT,
        max_total_pct: DEFAULT_MAX_TOTAL_PCT,
        base_vault: Address::generate(env),
        anti_snipe_vault: Address::generate(env),
        extra_vault: Address::generate(env),
    }
}

pub fn default_curve() -> CurveSettings {
    CurveSettings {
        asset_rate_bps: DEFAULT_ASSET_RATE_BPS,
        max_tx_bps: DEFAULT_MAX_TX_BPS,
    }
}

/// Register and initialize a factory with router and bonding grants in place
pub fn setup_factory(env: &Env) -> FactorySetup<'_> {
    let admin = Address::generate(env);
    let router = Address::generate(env);
    let bonding = Address::generate(env);

    let factory_id = env.register(FairlaunchFactory, ());
    let client = FairlaunchFactoryClient::new(env, &factory_id);

    client.initialize(&admin, &default_tax(env), &default_curve());
    client.set_router(&router);
    client.set_bonding(&bonding);

    FactorySetup {
        client,
        admin,
        router,
        bonding,
    }
}
