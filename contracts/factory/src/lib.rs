#![no_std]

//! # Fairlaunch Factory
//!
//! Pair registry and configuration authority.
//!
//! ## Responsibilities:
//! 1. Create pair records (one live pair per launched-token identity)
//! 2. Hold tax and curve configuration
//! 3. Enforce that only the router mutates pairs it created

use soroban_sdk::{contract, contractimpl, Address, Env};

use fairlaunch_curve::{PairState, ReservePair};
use fairlaunch_tax::TaxSettings;

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct FairlaunchFactory;

#[contractimpl]
impl FairlaunchFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        tax: TaxSettings,
        curve: CurveSettings,
    ) -> Result<(), FactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        Self::validate_tax(&tax)?;
        Self::validate_curve(&curve)?;

        let config = FactoryConfig {
            admin: admin.clone(),
            router: None,
            bonding: None,
        };
        write_config(&env, &config);
        write_tax_settings(&env, &tax);
        write_curve_settings(&env, &curve);
        set_initialized(&env);

        emit_initialized(&env, &admin);

        Ok(())
    }

    // ========================================================
    // PAIR CREATION (orchestrator-gated)
    // ========================================================

    /// Register a new pair record in `Seeding` state.
    ///
    /// One live pair per launched-token identity; ids start at 1 and the
    /// count only grows. Graduated pairs stay queryable forever.
    pub fn create_pair(
        env: Env,
        token: Address,
        asset: Address,
        scheduled_start_time: u64,
    ) -> Result<u32, FactoryError> {
        let config = Self::read_config_checked(&env)?;
        let bonding = config.bonding.ok_or(FactoryError::Unauthorized)?;
        bonding.require_auth();

        if token == asset {
            return Err(FactoryError::InvalidInput);
        }
        if pair_exists_for_token(&env, &token) {
            return Err(FactoryError::AlreadyExists);
        }

        let pair = ReservePair {
            token: token.clone(),
            asset: asset.clone(),
            token_reserve: 0,
            asset_reserve: 0,
            virtual_offset: 0,
            max_tx_amount: 0,
            scheduled_start_time,
            launch_time: 0,
            state: PairState::Seeding,
        };

        let pair_id = increment_pair_count(&env);
        write_pair(&env, pair_id, &pair);
        write_pair_id_for_token(&env, &token, pair_id);

        emit_pair_created(&env, pair_id, &token, &asset, scheduled_start_time);

        Ok(pair_id)
    }

    // ========================================================
    // PAIR MUTATION (router-gated)
    // ========================================================

    /// Initialize reserves once. Fails `InvalidState` when already seeded.
    pub fn seed_pair(
        env: Env,
        pair_id: u32,
        token_reserve: i128,
        asset_reserve: i128,
        virtual_offset: i128,
        max_tx_amount: i128,
    ) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Seeding || pair.virtual_offset != 0 {
            return Err(FactoryError::InvalidState);
        }
        if token_reserve <= 0 || asset_reserve < 0 || virtual_offset <= 0 || max_tx_amount <= 0 {
            return Err(FactoryError::InvalidInput);
        }

        pair.token_reserve = token_reserve;
        pair.asset_reserve = asset_reserve;
        pair.virtual_offset = virtual_offset;
        pair.max_tx_amount = max_tx_amount;
        write_pair(&env, pair_id, &pair);

        Ok(())
    }

    pub fn apply_buy(
        env: Env,
        pair_id: u32,
        net_asset_in: i128,
        token_out: i128,
    ) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Trading {
            return Err(FactoryError::InvalidState);
        }
        if net_asset_in < 0 || token_out <= 0 {
            return Err(FactoryError::InvalidInput);
        }
        if token_out > pair.token_reserve {
            return Err(FactoryError::InsufficientLiquidity);
        }

        pair.asset_reserve += net_asset_in;
        pair.token_reserve -= token_out;
        write_pair(&env, pair_id, &pair);

        Ok(())
    }

    pub fn apply_sell(
        env: Env,
        pair_id: u32,
        token_in: i128,
        gross_asset_out: i128,
    ) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Trading {
            return Err(FactoryError::InvalidState);
        }
        if token_in <= 0 || gross_asset_out <= 0 {
            return Err(FactoryError::InvalidInput);
        }
        if gross_asset_out > pair.asset_reserve {
            return Err(FactoryError::InsufficientLiquidity);
        }

        pair.token_reserve += token_in;
        pair.asset_reserve -= gross_asset_out;
        write_pair(&env, pair_id, &pair);

        Ok(())
    }

    /// Move the scheduled start; only while still `Seeding`.
    pub fn set_start_time(env: Env, pair_id: u32, new_start: u64) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Seeding {
            return Err(FactoryError::InvalidState);
        }

        pair.scheduled_start_time = new_start;
        write_pair(&env, pair_id, &pair);

        emit_start_time_reset(&env, pair_id, new_start);
        Ok(())
    }

    /// Transition `Seeding -> Trading`, stamping the anti-snipe clock zero.
    pub fn mark_launched(env: Env, pair_id: u32, launch_time: u64) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Seeding || pair.launch_time != 0 {
            return Err(FactoryError::InvalidState);
        }
        if pair.virtual_offset == 0 {
            // never seeded
            return Err(FactoryError::InvalidState);
        }

        pair.state = PairState::Trading;
        pair.launch_time = launch_time;
        write_pair(&env, pair_id, &pair);

        Ok(())
    }

    /// Irreversible `Trading -> Graduated` transition.
    pub fn mark_graduated(env: Env, pair_id: u32) -> Result<(), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.state != PairState::Trading {
            return Err(FactoryError::InvalidState);
        }

        pair.state = PairState::Graduated;
        write_pair(&env, pair_id, &pair);

        Ok(())
    }

    /// Zero both reserves, returning the drained amounts.
    pub fn drain_reserves(env: Env, pair_id: u32) -> Result<(i128, i128), FactoryError> {
        Self::require_router(&env)?;
        let mut pair = Self::read_pair_checked(&env, pair_id)?;

        if pair.token_reserve == 0 && pair.asset_reserve == 0 {
            return Err(FactoryError::NoLiquidity);
        }

        let drained = (pair.token_reserve, pair.asset_reserve);
        pair.token_reserve = 0;
        pair.asset_reserve = 0;
        write_pair(&env, pair_id, &pair);

        Ok(drained)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_router(env: Env, router: Address) -> Result<(), FactoryError> {
        let mut config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        config.router = Some(router.clone());
        write_config(&env, &config);

        emit_router_set(&env, &router);
        Ok(())
    }

    pub fn set_bonding(env: Env, bonding: Address) -> Result<(), FactoryError> {
        let mut config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        config.bonding = Some(bonding.clone());
        write_config(&env, &config);

        emit_bonding_set(&env, &bonding);
        Ok(())
    }

    /// Replace the full tax configuration. Takes effect from the next trade.
    pub fn set_tax_settings(env: Env, tax: TaxSettings) -> Result<(), FactoryError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        Self::validate_tax(&tax)?;
        write_tax_settings(&env, &tax);

        emit_tax_updated(&env, tax.base_buy_pct, tax.base_sell_pct, tax.max_total_pct);
        Ok(())
    }

    pub fn set_vaults(
        env: Env,
        base_vault: Address,
        anti_snipe_vault: Address,
        extra_vault: Address,
    ) -> Result<(), FactoryError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        let mut tax = read_tax_settings(&env);
        tax.base_vault = base_vault.clone();
        tax.anti_snipe_vault = anti_snipe_vault.clone();
        tax.extra_vault = extra_vault.clone();
        write_tax_settings(&env, &tax);

        emit_vaults_updated(&env, &base_vault, &anti_snipe_vault, &extra_vault);
        Ok(())
    }

    pub fn set_curve_settings(env: Env, curve: CurveSettings) -> Result<(), FactoryError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        Self::validate_curve(&curve)?;
        write_curve_settings(&env, &curve);

        emit_curve_updated(&env, curve.asset_rate_bps, curve.max_tx_bps);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_pair(env: Env, pair_id: u32) -> Result<ReservePair, FactoryError> {
        Self::read_pair_checked(&env, pair_id)
    }

    pub fn get_pair_id(env: Env, token: Address) -> Option<u32> {
        read_pair_id_for_token(&env, &token)
    }

    pub fn get_total_pairs(env: Env) -> u32 {
        read_pair_count(&env)
    }

    pub fn get_tax_settings(env: Env) -> Result<TaxSettings, FactoryError> {
        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        Ok(read_tax_settings(&env))
    }

    pub fn get_curve_settings(env: Env) -> Result<CurveSettings, FactoryError> {
        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        Ok(read_curve_settings(&env))
    }

    pub fn get_config(env: Env) -> Result<FactoryConfig, FactoryError> {
        Self::read_config_checked(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn read_config_checked(env: &Env) -> Result<FactoryConfig, FactoryError> {
        if !is_initialized(env) {
            return Err(FactoryError::NotInitialized);
        }
        Ok(read_config(env))
    }

    fn read_pair_checked(env: &Env, pair_id: u32) -> Result<ReservePair, FactoryError> {
        read_pair(env, pair_id).ok_or(FactoryError::PairNotFound)
    }

    fn require_router(env: &Env) -> Result<Address, FactoryError> {
        let config = Self::read_config_checked(env)?;
        let router = config.router.ok_or(FactoryError::Unauthorized)?;
        router.require_auth();
        Ok(router)
    }

    /// The anti-snipe term is the only one compressible at runtime, so the
    /// fixed terms must fit under the cap on their own.
    fn validate_tax(tax: &TaxSettings) -> Result<(), FactoryError> {
        if tax.max_total_pct >= 100 {
            return Err(FactoryError::InvalidInput);
        }
        if tax.base_buy_pct + tax.extra_category_pct >= tax.max_total_pct {
            return Err(FactoryError::InvalidInput);
        }
        if tax.base_sell_pct + tax.extra_category_pct >= tax.max_total_pct {
            return Err(FactoryError::InvalidInput);
        }
        Ok(())
    }

    fn validate_curve(curve: &CurveSettings) -> Result<(), FactoryError> {
        if curve.asset_rate_bps == 0 {
            return Err(FactoryError::InvalidInput);
        }
        if curve.max_tx_bps == 0 || curve.max_tx_bps > 10_000 {
            return Err(FactoryError::InvalidInput);
        }
        Ok(())
    }
}
