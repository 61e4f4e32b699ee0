#![allow(dead_code)]

use fairlaunch_factory::{CurveSettings, FairlaunchFactory, FairlaunchFactoryClient};
use fairlaunch_router::{FairlaunchRouter, FairlaunchRouterClient};
use fairlaunch_tax::TaxSettings;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

// Test constants
pub const CURVE_SUPPLY: i128 = 1_000_000_000;
pub const SEED_PURCHASE: i128 = 900;
pub const START_TIME: u64 = 10_000;

pub const DEFAULT_ASSET_RATE_BPS: u32 = 10_000;
pub const DEFAULT_MAX_TX_BPS: u32 = 500;
pub const ANTI_SNIPE_WINDOW_MIN: u32 = 120;

pub struct RouterSetup<'a> {
    pub factory: FairlaunchFactoryClient<'a>,
    pub router: FairlaunchRouterClient<'a>,
    pub router_address: Address,
    pub admin: Address,
    pub bonding: Address,
    pub creator: Address,
    pub trader: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
    pub tax: TaxSettings,
}

pub fn default_tax(env: &Env) -> TaxSettings {
    TaxSettings {
        base_buy_pct: 1,
        base_sell_pct: 2,
        anti_snipe_start_pct: 99,
        anti_snipe_window_minutes: ANTI_SNIPE_WINDOW_MIN,
        extra_category_pct: 5,
        max_total_pct: 99,
        base_vault: Address::generate(env),
        anti_snipe_vault: Address::generate(env),
        extra_vault: Address::generate(env),
    }
}

/// Register factory + router, wire the grant chain, and issue the two
/// Stellar assets backing the pair. Ledger time starts at `START_TIME`.
pub fn setup_router(env: &Env) -> RouterSetup<'_> {
    env.mock_all_auths_allowing_non_root_auth();
    env.ledger().with_mut(|li| li.timestamp = START_TIME);

    let admin = Address::generate(env);
    let bonding = Address::generate(env);
    let creator = Address::generate(env);
    let trader = Address::generate(env);

    let factory_id = env.register(FairlaunchFactory, ());
    let factory = FairlaunchFactoryClient::new(env, &factory_id);

    let router_id = env.register(FairlaunchRouter, ());
    let router = FairlaunchRouterClient::new(env, &router_id);

    let tax = default_tax(env);
    let curve = CurveSettings {
        asset_rate_bps: DEFAULT_ASSET_RATE_BPS,
        max_tx_bps: DEFAULT_MAX_TX_BPS,
    };
    factory.initialize(&admin, &tax, &curve);
    factory.set_router(&router_id);
    factory.set_bonding(&bonding);

    router.initialize(&factory_id, &admin);
    router.set_bonding(&bonding);

    let token_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let asset_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token::Client::new(env, &token_sac.address());
    let token_admin = token::StellarAssetClient::new(env, &token_sac.address());
    let asset = token::Client::new(env, &asset_sac.address());
    let asset_admin = token::StellarAssetClient::new(env, &asset_sac.address());

    token_admin.mint(&creator, &CURVE_SUPPLY);
    asset_admin.mint(&creator, &1_000_000);
    asset_admin.mint(&trader, &100_000_000);

    RouterSetup {
        factory,
        router,
        router_address: router_id,
        admin,
        bonding,
        creator,
        trader,
        token,
        token_admin,
        asset,
        asset_admin,
        tax,
    }
}

/// Create a pair scheduled at `START_TIME` and seed it with the default
/// curve supply and creator purchase.
pub fn create_and_seed(setup: &RouterSetup) -> u32 {
    let pair_id = setup.factory.create_pair(
        &setup.token.address,
        &setup.asset.address,
        &START_TIME,
    );
    setup
        .router
        .seed(&pair_id, &setup.creator, &CURVE_SUPPLY, &SEED_PURCHASE);
    pair_id
}

/// Seed and open trading
pub fn create_seed_launch(setup: &RouterSetup) -> u32 {
    let pair_id = create_and_seed(setup);
    setup.router.launch(&pair_id);
    pair_id
}

/// Advance the ledger clock `minutes` past the launch stamp
pub fn advance_minutes(env: &Env, minutes: u64) {
    env.ledger()
        .with_mut(|li| li.timestamp += minutes * 60);
}
