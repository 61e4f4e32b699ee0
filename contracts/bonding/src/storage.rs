// Orchestrator storage module for Fairlaunch

use soroban_sdk::{contracttype, Env};

use crate::types::{LaunchRecord, PadConfig};

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Record(u32),
}

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

pub fn write_config(env: &Env, config: &PadConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> PadConfig {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("orchestrator not initialized")
}

pub fn write_record(env: &Env, pair_id: u32, record: &LaunchRecord) {
    let key = DataKey::Record(pair_id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}

pub fn read_record(env: &Env, pair_id: u32) -> Option<LaunchRecord> {
    env.storage().persistent().get(&DataKey::Record(pair_id))
}
