//! Launch registration: fee routing, team allocation, curve seeding

mod common;

use common::*;
use fairlaunch_bonding::BondingError;
use fairlaunch_curve::PairState;
use fairlaunch_tax::AssetCategory;
use soroban_sdk::Env;

#[test]
fn test_pre_launch_routes_fee_and_seeds_curve() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let (pair_id, token_out) = setup
        .bonding
        .pre_launch(&setup.creator, &default_params(&env, &setup));

    assert_eq!(pair_id, 1);
    assert_eq!(token_out, 899);

    // fee comes off the top, the rest seeds the curve
    assert_eq!(setup.asset.balance(&setup.fee_recipient), LAUNCH_FEE);
    assert_eq!(setup.asset.balance(&setup.creator), 1_000_000 - 1000);
    assert_eq!(setup.token.balance(&setup.creator), 899);

    let pair = setup.factory.get_pair(&pair_id);
    assert_eq!(pair.state, PairState::Seeding);
    assert_eq!(pair.token_reserve, 999_999_101);
    assert_eq!(pair.asset_reserve, 900);

    let record = setup.bonding.get_record(&pair_id);
    assert_eq!(record.creator, setup.creator);
    assert_eq!(record.category, AssetCategory::Standard);
    assert_eq!(record.graduation_threshold, 200_000_000);
    assert_eq!(record.launch_fee, LAUNCH_FEE);
    assert_eq!(record.team_reserved_amount, 0);
    assert!(!record.graduated);
    assert!(!record.drainable);
}

#[test]
fn test_pre_launch_with_team_allocation() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let mut params = default_params(&env, &setup);
    params.team_reserved_amount = 100_000_000;

    let (pair_id, token_out) = setup.bonding.pre_launch(&setup.creator, &params);
    assert_eq!(token_out, 899);

    // curve supply shrinks by the team slice; the slice goes straight to
    // the team wallet
    assert_eq!(setup.token.balance(&setup.team_wallet), 100_000_000);

    let pair = setup.factory.get_pair(&pair_id);
    assert_eq!(pair.token_reserve, 899_999_101);
    assert_eq!(pair.virtual_offset, 900_000_000);

    let record = setup.bonding.get_record(&pair_id);
    assert_eq!(record.graduation_threshold, 180_000_000);
    assert_eq!(record.team_reserved_amount, 100_000_000);
}

#[test]
fn test_pre_launch_purchase_below_fee_fails() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let mut params = default_params(&env, &setup);
    params.purchase_amount = LAUNCH_FEE - 1;

    let result = setup.bonding.try_pre_launch(&setup.creator, &params);
    assert_eq!(result.err(), Some(Ok(BondingError::InvalidInput)));
}

#[test]
fn test_pre_launch_purchase_equal_to_fee() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let mut params = default_params(&env, &setup);
    params.purchase_amount = LAUNCH_FEE;

    let (pair_id, token_out) = setup.bonding.pre_launch(&setup.creator, &params);
    assert_eq!(token_out, 0);

    let pair = setup.factory.get_pair(&pair_id);
    assert_eq!(pair.token_reserve, INITIAL_SUPPLY);
    assert_eq!(pair.asset_reserve, 0);
    assert_eq!(setup.asset.balance(&setup.fee_recipient), LAUNCH_FEE);
}

#[test]
fn test_pre_launch_team_reserve_swallows_supply_fails() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let mut params = default_params(&env, &setup);
    params.team_reserved_amount = INITIAL_SUPPLY;

    let result = setup.bonding.try_pre_launch(&setup.creator, &params);
    assert_eq!(result.err(), Some(Ok(BondingError::InvalidInput)));
}

#[test]
fn test_pre_launch_duplicate_token_fails() {
    let env = Env::default();
    let setup = setup_pad(&env);

    pre_launch_default(&env, &setup);
    // one live pair per token identity; rejected by the registry
    assert!(setup
        .bonding
        .try_pre_launch(&setup.creator, &default_params(&env, &setup))
        .is_err());
}

#[test]
fn test_get_record_unknown_pair_fails() {
    let env = Env::default();
    let setup = setup_pad(&env);

    let result = setup.bonding.try_get_record(&42);
    assert_eq!(result.err(), Some(Ok(BondingError::RecordNotFound)));
}
