// Router storage module for Fairlaunch

use soroban_sdk::{contracttype, Env};

use crate::types::RouterConfig;

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
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

pub fn write_config(env: &Env, config: &RouterConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> RouterConfig {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("router not initialized")
}
