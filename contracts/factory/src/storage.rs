// Factory storage module for Fairlaunch

use soroban_sdk::{contracttype, Address, Env};

use fairlaunch_curve::ReservePair;
use fairlaunch_tax::TaxSettings;

use crate::types::{CurveSettings, FactoryConfig};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    TaxCfg,
    CurveCfg,
    /// Pair record by id (ids start at 1, never deleted)
    Pair(u32),
    /// Pair id by launched-token identity
    PairIdByToken(Address),
    PairCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> FactoryConfig {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("factory not initialized")
}

pub fn write_tax_settings(env: &Env, tax: &TaxSettings) {
    env.storage().persistent().set(&DataKey::TaxCfg, tax);
    extend_ttl(env, &DataKey::TaxCfg);
}

pub fn read_tax_settings(env: &Env) -> TaxSettings {
    env.storage()
        .persistent()
        .get(&DataKey::TaxCfg)
        .expect("factory not initialized")
}

pub fn write_curve_settings(env: &Env, curve: &CurveSettings) {
    env.storage().persistent().set(&DataKey::CurveCfg, curve);
    extend_ttl(env, &DataKey::CurveCfg);
}

pub fn read_curve_settings(env: &Env) -> CurveSettings {
    env.storage()
        .persistent()
        .get(&DataKey::CurveCfg)
        .expect("factory not initialized")
}

// ============================================================
// PAIR REGISTRY
// ============================================================

pub fn write_pair(env: &Env, pair_id: u32, pair: &ReservePair) {
    let key = DataKey::Pair(pair_id);
    env.storage().persistent().set(&key, pair);
    extend_ttl(env, &key);
}

pub fn read_pair(env: &Env, pair_id: u32) -> Option<ReservePair> {
    env.storage().persistent().get(&DataKey::Pair(pair_id))
}

pub fn write_pair_id_for_token(env: &Env, token: &Address, pair_id: u32) {
    let key = DataKey::PairIdByToken(token.clone());
    env.storage().persistent().set(&key, &pair_id);
    extend_ttl(env, &key);
}

pub fn read_pair_id_for_token(env: &Env, token: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::PairIdByToken(token.clone()))
}

pub fn pair_exists_for_token(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PairIdByToken(token.clone()))
}

pub fn read_pair_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PairCount)
        .unwrap_or(0)
}

pub fn increment_pair_count(env: &Env) -> u32 {
    let count = read_pair_count(env) + 1;
    env.storage().persistent().set(&DataKey::PairCount, &count);
    extend_ttl(env, &DataKey::PairCount);
    count
}
