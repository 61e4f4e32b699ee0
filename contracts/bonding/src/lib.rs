#![no_std]

//! # Fairlaunch Orchestrator
//!
//! Front door for the launch lifecycle. Registers launches, collects the
//! launch fee and team allocation, seeds the curve, opens trading, and
//! drives the one-way graduation handoff to the external pool and the
//! governance registry.
//!
//! Lifecycle (state lives on the pair record in the factory):
//!
//! ```text
//! Seeding -> Trading   : launch(), once the scheduled start has arrived
//! Trading -> Graduated : a buy or sell drives token_reserve to or below
//!                        the graduation threshold, atomically
//! ```

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol};

use fairlaunch_curve::{PairState, ReservePair};

mod error;
mod events;
mod storage;
mod types;

pub use error::BondingError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct FairlaunchBonding;

#[contractimpl]
impl FairlaunchBonding {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, config: PadConfig) -> Result<(), BondingError> {
        config.admin.require_auth();

        if is_initialized(&env) {
            return Err(BondingError::AlreadyInitialized);
        }
        if config.launch_fee < 0 || config.initial_supply <= 0 {
            return Err(BondingError::InvalidInput);
        }
        if config.graduation_threshold_pct == 0 || config.graduation_threshold_pct >= 100 {
            return Err(BondingError::InvalidInput);
        }

        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &config.admin, &config.factory, &config.router);

        Ok(())
    }

    // ========================================================
    // LAUNCH REGISTRATION
    // ========================================================

    /// Register a launch and seed its curve.
    ///
    /// The creator brings the full token supply and a gross quote-asset
    /// purchase. The launch fee goes to the fee recipient, the team
    /// allocation to its wallet, and the remaining supply plus the net
    /// purchase seed the curve through the router. Seeding is the one
    /// untaxed path into a curve.
    pub fn pre_launch(
        env: Env,
        creator: Address,
        params: PreLaunchParams,
    ) -> Result<(u32, i128), BondingError> {
        creator.require_auth();
        let config = Self::read_config_checked(&env)?;

        if params.purchase_amount < config.launch_fee {
            return Err(BondingError::InvalidInput);
        }
        if params.team_reserved_amount < 0 || params.team_reserved_amount >= config.initial_supply
        {
            return Err(BondingError::InvalidInput);
        }

        let curve_supply = config.initial_supply - params.team_reserved_amount;
        let net_purchase = params.purchase_amount - config.launch_fee;
        let graduation_threshold =
            curve_supply * config.graduation_threshold_pct as i128 / 100;

        let pair_id: u32 = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "create_pair"),
            vec![
                &env,
                params.token.clone().into_val(&env),
                config.quote_asset.clone().into_val(&env),
                params.scheduled_start_time.into_val(&env),
            ],
        );

        let record = LaunchRecord {
            creator: creator.clone(),
            token: params.token.clone(),
            name: params.name.clone(),
            ticker: params.ticker.clone(),
            category: params.category,
            graduation_threshold,
            team_reserved_amount: params.team_reserved_amount,
            team_reserved_recipient: params.team_reserved_recipient.clone(),
            launch_fee: config.launch_fee,
            drainable: false,
            graduated: false,
            position_ref: 0,
            gov_record_id: 0,
        };
        write_record(&env, pair_id, &record);

        if config.launch_fee > 0 {
            token::Client::new(&env, &config.quote_asset).transfer(
                &creator,
                &config.fee_recipient,
                &config.launch_fee,
            );
        }
        if params.team_reserved_amount > 0 {
            token::Client::new(&env, &params.token).transfer(
                &creator,
                &params.team_reserved_recipient,
                &params.team_reserved_amount,
            );
        }

        let initial_token_out: i128 = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "seed"),
            vec![
                &env,
                pair_id.into_val(&env),
                creator.clone().into_val(&env),
                curve_supply.into_val(&env),
                net_purchase.into_val(&env),
            ],
        );

        emit_pre_launched(&env, pair_id, &creator, &params.token, initial_token_out);

        Ok((pair_id, initial_token_out))
    }

    // ========================================================
    // LIFECYCLE
    // ========================================================

    /// Open public trading. Creator-gated; only once the scheduled start
    /// has arrived.
    pub fn launch(env: Env, pair_id: u32) -> Result<(), BondingError> {
        let config = Self::read_config_checked(&env)?;
        let record = Self::read_record_checked(&env, pair_id)?;
        record.creator.require_auth();

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Seeding {
            return Err(BondingError::InvalidState);
        }
        let now = env.ledger().timestamp();
        if now < pair.scheduled_start_time {
            return Err(BondingError::InvalidState);
        }

        let _: () = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "launch"),
            vec![&env, pair_id.into_val(&env)],
        );

        emit_launched(&env, pair_id, now);

        Ok(())
    }

    /// Move the scheduled start. Rejected once the original start has
    /// passed, even when trading has not opened yet.
    pub fn reset_start_time(env: Env, pair_id: u32, new_start: u64) -> Result<(), BondingError> {
        let config = Self::read_config_checked(&env)?;
        let record = Self::read_record_checked(&env, pair_id)?;
        record.creator.require_auth();

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Seeding {
            return Err(BondingError::InvalidState);
        }
        let now = env.ledger().timestamp();
        if now >= pair.scheduled_start_time {
            return Err(BondingError::InvalidState);
        }
        if new_start <= now {
            return Err(BondingError::InvalidInput);
        }

        let _: () = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "set_start_time"),
            vec![&env, pair_id.into_val(&env), new_start.into_val(&env)],
        );

        emit_start_time_reset(&env, pair_id, new_start);

        Ok(())
    }

    // ========================================================
    // TRADING
    // ========================================================

    /// Execute a taxed buy. When the trade drives the token reserve to or
    /// below the graduation threshold, the same call graduates the pair.
    pub fn buy(
        env: Env,
        pair_id: u32,
        sender: Address,
        asset_in: i128,
        min_token_out: i128,
        deadline: u64,
    ) -> Result<i128, BondingError> {
        sender.require_auth();
        let config = Self::read_config_checked(&env)?;
        let mut record = Self::read_record_checked(&env, pair_id)?;

        if env.ledger().timestamp() > deadline {
            return Err(BondingError::Expired);
        }
        if record.graduated {
            return Err(BondingError::InvalidState);
        }
        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(BondingError::InvalidState);
        }

        let outcome: SwapOutcomeRaw = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "execute_buy"),
            vec![
                &env,
                pair_id.into_val(&env),
                sender.into_val(&env),
                asset_in.into_val(&env),
                min_token_out.into_val(&env),
                record.category.into_val(&env),
            ],
        );

        emit_traded(&env, pair_id, true, outcome.amount_in, outcome.amount_out, &outcome.tax);

        Self::maybe_graduate(&env, &config, &mut record, pair_id)?;

        Ok(outcome.amount_out)
    }

    /// Execute a taxed sell. The graduation check runs here too, for the
    /// case where the admin raised the threshold above the current reserve.
    pub fn sell(
        env: Env,
        pair_id: u32,
        sender: Address,
        token_in: i128,
        min_asset_out: i128,
        deadline: u64,
    ) -> Result<i128, BondingError> {
        sender.require_auth();
        let config = Self::read_config_checked(&env)?;
        let mut record = Self::read_record_checked(&env, pair_id)?;

        if env.ledger().timestamp() > deadline {
            return Err(BondingError::Expired);
        }
        if record.graduated {
            return Err(BondingError::InvalidState);
        }
        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(BondingError::InvalidState);
        }

        let outcome: SwapOutcomeRaw = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "execute_sell"),
            vec![
                &env,
                pair_id.into_val(&env),
                sender.into_val(&env),
                token_in.into_val(&env),
                min_asset_out.into_val(&env),
                record.category.into_val(&env),
            ],
        );

        emit_traded(&env, pair_id, false, outcome.amount_in, outcome.amount_out, &outcome.tax);

        Self::maybe_graduate(&env, &config, &mut record, pair_id)?;

        Ok(outcome.amount_out)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn set_graduation_threshold(
        env: Env,
        pair_id: u32,
        threshold: i128,
    ) -> Result<(), BondingError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        if threshold <= 0 {
            return Err(BondingError::InvalidInput);
        }
        let mut record = Self::read_record_checked(&env, pair_id)?;
        if record.graduated {
            return Err(BondingError::InvalidState);
        }

        record.graduation_threshold = threshold;
        write_record(&env, pair_id, &record);

        emit_threshold_set(&env, pair_id, threshold);
        Ok(())
    }

    pub fn set_drainable(env: Env, pair_id: u32, drainable: bool) -> Result<(), BondingError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        let mut record = Self::read_record_checked(&env, pair_id)?;
        record.drainable = drainable;
        write_record(&env, pair_id, &record);

        emit_drainable_set(&env, pair_id, drainable);
        Ok(())
    }

    /// Pre-graduation withdrawal of a pair's reserves. Fails closed: only
    /// pairs the admin explicitly flagged drainable can be drained.
    pub fn drain_pair(
        env: Env,
        pair_id: u32,
        recipient: Address,
    ) -> Result<(i128, i128), BondingError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        let record = Self::read_record_checked(&env, pair_id)?;
        if record.graduated {
            return Err(BondingError::InvalidState);
        }
        if !record.drainable {
            return Err(BondingError::NotDrainable);
        }

        let (token_amt, asset_amt): (i128, i128) = env.invoke_contract(
            &config.router,
            &Symbol::new(&env, "drain"),
            vec![&env, pair_id.into_val(&env), recipient.clone().into_val(&env)],
        );

        emit_drained(&env, pair_id, &recipient, token_amt, asset_amt);

        Ok((token_amt, asset_amt))
    }

    /// Pull a graduated pair's pool position out to a recipient.
    pub fn drain_graduated_position(
        env: Env,
        pair_id: u32,
        recipient: Address,
        deadline: u64,
    ) -> Result<(), BondingError> {
        let config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        if env.ledger().timestamp() > deadline {
            return Err(BondingError::Expired);
        }
        let record = Self::read_record_checked(&env, pair_id)?;
        if !record.graduated {
            return Err(BondingError::InvalidState);
        }

        let _: () = env.invoke_contract(
            &config.external_pool,
            &Symbol::new(&env, "withdraw_position"),
            vec![
                &env,
                record.position_ref.into_val(&env),
                recipient.into_val(&env),
            ],
        );

        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_record(env: Env, pair_id: u32) -> Result<LaunchRecord, BondingError> {
        Self::read_record_checked(&env, pair_id)
    }

    pub fn get_config(env: Env) -> Result<PadConfig, BondingError> {
        Self::read_config_checked(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn read_config_checked(env: &Env) -> Result<PadConfig, BondingError> {
        if !is_initialized(env) {
            return Err(BondingError::NotInitialized);
        }
        Ok(read_config(env))
    }

    fn read_record_checked(env: &Env, pair_id: u32) -> Result<LaunchRecord, BondingError> {
        read_record(env, pair_id).ok_or(BondingError::RecordNotFound)
    }

    fn fetch_pair(env: &Env, factory: &Address, pair_id: u32) -> Result<ReservePair, BondingError> {
        let result = env.try_invoke_contract::<ReservePair, soroban_sdk::Error>(
            factory,
            &Symbol::new(env, "get_pair"),
            vec![env, pair_id.into_val(env)],
        );
        match result {
            Ok(Ok(pair)) => Ok(pair),
            _ => Err(BondingError::PairNotFound),
        }
    }

    /// Graduate when the post-trade reserve has reached the threshold.
    ///
    /// One-way and exactly-once: the pair is marked `Graduated` and its
    /// record stamped inside the same transaction as the crossing trade,
    /// so either everything lands or the trade never happened.
    fn maybe_graduate(
        env: &Env,
        config: &PadConfig,
        record: &mut LaunchRecord,
        pair_id: u32,
    ) -> Result<(), BondingError> {
        let pair = Self::fetch_pair(env, &config.factory, pair_id)?;
        if pair.token_reserve > record.graduation_threshold {
            return Ok(());
        }

        let (token_amt, asset_amt): (i128, i128) = env.invoke_contract(
            &config.router,
            &Symbol::new(env, "graduate"),
            vec![
                env,
                pair_id.into_val(env),
                config.external_pool.clone().into_val(env),
            ],
        );

        let position_ref: u64 = env.invoke_contract(
            &config.external_pool,
            &Symbol::new(env, "deposit_initial_liquidity"),
            vec![
                env,
                record.token.clone().into_val(env),
                config.quote_asset.clone().into_val(env),
                token_amt.into_val(env),
                asset_amt.into_val(env),
            ],
        );

        let gov_record_id: u64 = env.invoke_contract(
            &config.governance_registry,
            &Symbol::new(env, "register_graduated_asset"),
            vec![
                env,
                pair_id.into_val(env),
                position_ref.into_val(env),
                record.creator.clone().into_val(env),
            ],
        );

        record.graduated = true;
        record.position_ref = position_ref;
        record.gov_record_id = gov_record_id;
        write_record(env, pair_id, record);

        emit_graduated(env, pair_id, position_ref, gov_record_id);

        Ok(())
    }
}
