#![allow(dead_code)]

use fairlaunch_bonding::{FairlaunchBonding, FairlaunchBondingClient, PadConfig, PreLaunchParams};
use fairlaunch_factory::{CurveSettings, FairlaunchFactory, FairlaunchFactoryClient};
use fairlaunch_router::{FairlaunchRouter, FairlaunchRouterClient};
use fairlaunch_tax::{AssetCategory, TaxSettings};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, String};

// Test constants
pub const INITIAL_SUPPLY: i128 = 1_000_000_000;
pub const LAUNCH_FEE: i128 = 100;
pub const GRADUATION_PCT: u32 = 20;
pub const START_TIME: u64 = 10_000;
pub const FAR_DEADLINE: u64 = u64::MAX;
pub const ANTI_SNIPE_WINDOW_MIN: u32 = 120;

// ========================================================
// Mock collaborators
// ========================================================

#[contracttype]
pub enum MockKey {
    Deposits,
    LastDeposit,
    Withdrawals,
    LastWithdrawal,
    Records,
    LastRecord,
}

/// External pool stand-in. Counts deposits so tests can assert the
/// graduation handoff happens exactly once.
#[contract]
pub struct MockExternalPool;

#[contractimpl]
impl MockExternalPool {
    pub fn deposit_initial_liquidity(
        env: Env,
        token: Address,
        asset: Address,
        token_amount: i128,
        asset_amount: i128,
    ) -> u64 {
        let next: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::Deposits)
            .unwrap_or(0u64)
            + 1;
        env.storage().persistent().set(&MockKey::Deposits, &next);
        env.storage().persistent().set(
            &MockKey::LastDeposit,
            &(token, asset, token_amount, asset_amount),
        );
        next
    }

    pub fn withdraw_position(env: Env, position_ref: u64, recipient: Address) {
        let next: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::Withdrawals)
            .unwrap_or(0u64)
            + 1;
        env.storage().persistent().set(&MockKey::Withdrawals, &next);
        env.storage()
            .persistent()
            .set(&MockKey::LastWithdrawal, &(position_ref, recipient));
    }

    pub fn deposit_count(env: Env) -> u64 {
        env.storage()
            .persistent()
            .get(&MockKey::Deposits)
            .unwrap_or(0u64)
    }

    pub fn last_deposit(env: Env) -> Option<(Address, Address, i128, i128)> {
        env.storage().persistent().get(&MockKey::LastDeposit)
    }

    pub fn withdrawal_count(env: Env) -> u64 {
        env.storage()
            .persistent()
            .get(&MockKey::Withdrawals)
            .unwrap_or(0u64)
    }

    pub fn last_withdrawal(env: Env) -> Option<(u64, Address)> {
        env.storage().persistent().get(&MockKey::LastWithdrawal)
    }
}

/// Governance registry stand-in
#[contract]
pub struct MockGovernanceRegistry;

#[contractimpl]
impl MockGovernanceRegistry {
    pub fn register_graduated_asset(
        env: Env,
        pair_id: u32,
        position_ref: u64,
        creator: Address,
    ) -> u64 {
        let next: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::Records)
            .unwrap_or(0u64)
            + 1;
        env.storage().persistent().set(&MockKey::Records, &next);
        env.storage()
            .persistent()
            .set(&MockKey::LastRecord, &(pair_id, position_ref, creator));
        next
    }

    pub fn record_count(env: Env) -> u64 {
        env.storage()
            .persistent()
            .get(&MockKey::Records)
            .unwrap_or(0u64)
    }

    pub fn last_record(env: Env) -> Option<(u32, u64, Address)> {
        env.storage().persistent().get(&MockKey::LastRecord)
    }
}

// ========================================================
// Fixture
// ========================================================

pub struct PadSetup<'a> {
    pub factory: FairlaunchFactoryClient<'a>,
    pub router: FairlaunchRouterClient<'a>,
    pub bonding: FairlaunchBondingClient<'a>,
    pub pool: MockExternalPoolClient<'a>,
    pub pool_address: Address,
    pub gov: MockGovernanceRegistryClient<'a>,
    pub admin: Address,
    pub creator: Address,
    pub trader: Address,
    pub fee_recipient: Address,
    pub team_wallet: Address,
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

/// Register the full contract stack plus mock collaborators and wire the
/// grant chain. Ledger time starts at `START_TIME`.
pub fn setup_pad(env: &Env) -> PadSetup<'_> {
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START_TIME);

    let admin = Address::generate(env);
    let creator = Address::generate(env);
    let trader = Address::generate(env);
    let fee_recipient = Address::generate(env);
    let team_wallet = Address::generate(env);

    let factory_id = env.register(FairlaunchFactory, ());
    let factory = FairlaunchFactoryClient::new(env, &factory_id);

    let router_id = env.register(FairlaunchRouter, ());
    let router = FairlaunchRouterClient::new(env, &router_id);

    let bonding_id = env.register(FairlaunchBonding, ());
    let bonding = FairlaunchBondingClient::new(env, &bonding_id);

    let pool_address = env.register(MockExternalPool, ());
    let pool = MockExternalPoolClient::new(env, &pool_address);

    let gov_address = env.register(MockGovernanceRegistry, ());
    let gov = MockGovernanceRegistryClient::new(env, &gov_address);

    let token_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let asset_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token::Client::new(env, &token_sac.address());
    let token_admin = token::StellarAssetClient::new(env, &token_sac.address());
    let asset = token::Client::new(env, &asset_sac.address());
    let asset_admin = token::StellarAssetClient::new(env, &asset_sac.address());

    let tax = default_tax(env);
    let curve = CurveSettings {
        asset_rate_bps: 10_000,
        max_tx_bps: 500,
    };
    factory.initialize(&admin, &tax, &curve);
    factory.set_router(&router_id);
    factory.set_bonding(&bonding_id);

    router.initialize(&factory_id, &admin);
    router.set_bonding(&bonding_id);

    bonding.initialize(&PadConfig {
        admin: admin.clone(),
        factory: factory_id,
        router: router_id,
        quote_asset: asset_sac.address(),
        fee_recipient: fee_recipient.clone(),
        launch_fee: LAUNCH_FEE,
        initial_supply: INITIAL_SUPPLY,
        graduation_threshold_pct: GRADUATION_PCT,
        external_pool: pool_address.clone(),
        governance_registry: gov_address,
    });

    token_admin.mint(&creator, &INITIAL_SUPPLY);
    asset_admin.mint(&creator, &1_000_000);
    asset_admin.mint(&trader, &100_000_000);

    PadSetup {
        factory,
        router,
        bonding,
        pool,
        pool_address,
        gov,
        admin,
        creator,
        trader,
        fee_recipient,
        team_wallet,
        token,
        token_admin,
        asset,
        asset_admin,
        tax,
    }
}

/// Default launch parameters: gross purchase 1000, no team allocation,
/// scheduled at the current ledger time.
pub fn default_params(env: &Env, setup: &PadSetup) -> PreLaunchParams {
    PreLaunchParams {
        token: setup.token.address.clone(),
        name: String::from_str(env, "Fairlaunch Token"),
        ticker: String::from_str(env, "FLT"),
        category: AssetCategory::Standard,
        purchase_amount: 1000,
        team_reserved_amount: 0,
        team_reserved_recipient: setup.team_wallet.clone(),
        scheduled_start_time: START_TIME,
    }
}

pub fn pre_launch_default(env: &Env, setup: &PadSetup) -> u32 {
    let (pair_id, _) = setup
        .bonding
        .pre_launch(&setup.creator, &default_params(env, setup));
    pair_id
}

/// Register, seed, and open trading with the default parameters
pub fn launch_default(env: &Env, setup: &PadSetup) -> u32 {
    let pair_id = pre_launch_default(env, setup);
    setup.bonding.launch(&pair_id);
    pair_id
}

/// Advance the ledger clock `minutes` past the launch stamp
pub fn advance_minutes(env: &Env, minutes: u64) {
    env.ledger().with_mut(|li| li.timestamp += minutes * 60);
}
