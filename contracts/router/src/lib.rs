#![no_std]

//! # Fairlaunch Router
//!
//! The only component authorized to mutate pair reserves. Executes
//! seed/buy/sell/graduate/drain against factory-owned pair records and
//! custodies the real balances backing every curve.
//!
//! Ordering rule: all reserve mutation and state transitions commit before
//! any token transfer leaves the contract, so re-entering external calls
//! observe consistent state.

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol};

use fairlaunch_curve::{max_tx_amount, quote_buy, quote_sell, seed_quote, virtual_offset, PairState, ReservePair};
use fairlaunch_tax::{compute_tax, AssetCategory, TaxBreakdown, TaxSettings, TradeDirection};

mod error;
mod events;
mod storage;
mod types;

pub use error::RouterError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct FairlaunchRouter;

#[contractimpl]
impl FairlaunchRouter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(env: Env, factory: Address, admin: Address) -> Result<(), RouterError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(RouterError::AlreadyInitialized);
        }

        let config = RouterConfig {
            admin: admin.clone(),
            factory: factory.clone(),
            bonding: None,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &factory, &admin);

        Ok(())
    }

    pub fn set_bonding(env: Env, bonding: Address) -> Result<(), RouterError> {
        let mut config = Self::read_config_checked(&env)?;
        config.admin.require_auth();

        config.bonding = Some(bonding);
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // SEEDING (orchestrator-gated, untaxed)
    // ========================================================

    /// Initialize a pair's reserves and execute the creator's initial
    /// purchase against the fresh curve. Seeding is the creator depositing
    /// liquidity, not a trade, so the tax engine is never consulted here.
    pub fn seed(
        env: Env,
        pair_id: u32,
        creator: Address,
        curve_supply: i128,
        net_purchase: i128,
    ) -> Result<i128, RouterError> {
        let config = Self::require_bonding(&env)?;

        if curve_supply <= 0 {
            return Err(RouterError::ZeroAmount);
        }
        if net_purchase < 0 {
            return Err(RouterError::InvalidInput);
        }

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Seeding || pair.virtual_offset != 0 {
            return Err(RouterError::InvalidState);
        }

        let curve_cfg = Self::fetch_curve_settings(&env, &config.factory)?;
        let offset = virtual_offset(&env, curve_supply, curve_cfg.asset_rate_bps);
        let max_tx = max_tx_amount(&env, curve_supply, curve_cfg.max_tx_bps);
        let seeded = seed_quote(&env, curve_supply, offset, net_purchase);

        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "seed_pair"),
            vec![
                &env,
                pair_id.into_val(&env),
                seeded.token_reserve.into_val(&env),
                seeded.asset_reserve.into_val(&env),
                offset.into_val(&env),
                max_tx.into_val(&env),
            ],
        );

        // pull the curve inventory and the creator's purchase, then pay the
        // creator's initial allocation out of it
        let router_addr = env.current_contract_address();
        token::Client::new(&env, &pair.token).transfer(&creator, &router_addr, &curve_supply);
        if net_purchase > 0 {
            token::Client::new(&env, &pair.asset).transfer(&creator, &router_addr, &net_purchase);
        }
        if seeded.token_out > 0 {
            token::Client::new(&env, &pair.token).transfer(&router_addr, &creator, &seeded.token_out);
        }

        emit_seeded(&env, pair_id, seeded.token_reserve, seeded.asset_reserve, seeded.token_out);

        Ok(seeded.token_out)
    }

    // ========================================================
    // LIFECYCLE (orchestrator-gated)
    // ========================================================

    /// Open public trading. Stamps `launch_time = now`, the zero point of
    /// the anti-snipe clock.
    pub fn launch(env: Env, pair_id: u32) -> Result<(), RouterError> {
        let config = Self::require_bonding(&env)?;

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Seeding {
            return Err(RouterError::InvalidState);
        }
        let now = env.ledger().timestamp();
        if now < pair.scheduled_start_time {
            return Err(RouterError::InvalidState);
        }

        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "mark_launched"),
            vec![&env, pair_id.into_val(&env), now.into_val(&env)],
        );

        Ok(())
    }

    /// Move the scheduled start. Rejected once the public start has passed,
    /// even when `launch` has not been called yet.
    pub fn set_start_time(env: Env, pair_id: u32, new_start: u64) -> Result<(), RouterError> {
        let config = Self::require_bonding(&env)?;

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Seeding {
            return Err(RouterError::InvalidState);
        }
        if env.ledger().timestamp() >= pair.scheduled_start_time {
            return Err(RouterError::InvalidState);
        }

        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "set_start_time"),
            vec![&env, pair_id.into_val(&env), new_start.into_val(&env)],
        );

        Ok(())
    }

    // ========================================================
    // TRADING (orchestrator-gated)
    // ========================================================

    /// Execute a taxed buy: tax on the gross input, curve quote on the net.
    pub fn execute_buy(
        env: Env,
        pair_id: u32,
        sender: Address,
        asset_in: i128,
        min_token_out: i128,
        category: AssetCategory,
    ) -> Result<SwapOutcome, RouterError> {
        let config = Self::require_bonding(&env)?;

        if asset_in <= 0 {
            return Err(RouterError::ZeroAmount);
        }

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(RouterError::InvalidState);
        }

        let tax_cfg = Self::fetch_tax_settings(&env, &config.factory)?;
        let elapsed = Self::elapsed_minutes(&env, pair.launch_time);
        let tax = compute_tax(TradeDirection::Buy, elapsed, category, asset_in, &tax_cfg);
        let net_in = asset_in - tax.total();

        let token_out =
            quote_buy(&env, &pair, net_in).ok_or(RouterError::InsufficientLiquidity)?;
        if token_out > pair.max_tx_amount {
            return Err(RouterError::MaxTxExceeded);
        }
        if token_out < min_token_out {
            return Err(RouterError::SlippageTooHigh);
        }

        // effects first
        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "apply_buy"),
            vec![
                &env,
                pair_id.into_val(&env),
                net_in.into_val(&env),
                token_out.into_val(&env),
            ],
        );

        // then interactions
        let router_addr = env.current_contract_address();
        token::Client::new(&env, &pair.asset).transfer(&sender, &router_addr, &asset_in);
        Self::route_tax(&env, &pair.asset, &tax_cfg, &tax);
        token::Client::new(&env, &pair.token).transfer(&router_addr, &sender, &token_out);

        emit_swap(&env, pair_id, true, asset_in, token_out, &tax);

        Ok(SwapOutcome {
            amount_in: asset_in,
            amount_out: token_out,
            tax,
        })
    }

    /// Execute a taxed sell: the tax is deducted from the gross asset
    /// output, so the curve update uses the pre-tax value and the seller
    /// receives the net.
    pub fn execute_sell(
        env: Env,
        pair_id: u32,
        sender: Address,
        token_in: i128,
        min_asset_out: i128,
        category: AssetCategory,
    ) -> Result<SwapOutcome, RouterError> {
        let config = Self::require_bonding(&env)?;

        if token_in <= 0 {
            return Err(RouterError::ZeroAmount);
        }

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(RouterError::InvalidState);
        }
        if token_in > pair.max_tx_amount {
            return Err(RouterError::MaxTxExceeded);
        }

        let gross_out =
            quote_sell(&env, &pair, token_in).ok_or(RouterError::InsufficientLiquidity)?;

        let tax_cfg = Self::fetch_tax_settings(&env, &config.factory)?;
        let elapsed = Self::elapsed_minutes(&env, pair.launch_time);
        let tax = compute_tax(TradeDirection::Sell, elapsed, category, gross_out, &tax_cfg);
        let net_out = gross_out - tax.total();

        if net_out < min_asset_out {
            return Err(RouterError::SlippageTooHigh);
        }

        // effects first
        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "apply_sell"),
            vec![
                &env,
                pair_id.into_val(&env),
                token_in.into_val(&env),
                gross_out.into_val(&env),
            ],
        );

        // then interactions
        let router_addr = env.current_contract_address();
        token::Client::new(&env, &pair.token).transfer(&sender, &router_addr, &token_in);
        Self::route_tax(&env, &pair.asset, &tax_cfg, &tax);
        if net_out > 0 {
            token::Client::new(&env, &pair.asset).transfer(&router_addr, &sender, &net_out);
        }

        emit_swap(&env, pair_id, false, token_in, net_out, &tax);

        Ok(SwapOutcome {
            amount_in: token_in,
            amount_out: net_out,
            tax,
        })
    }

    // ========================================================
    // GRADUATION & DRAIN (orchestrator-gated)
    // ========================================================

    /// Irreversibly close the curve and migrate both remaining reserves to
    /// the external pool recipient. The state transition commits before the
    /// transfers leave.
    pub fn graduate(
        env: Env,
        pair_id: u32,
        recipient: Address,
    ) -> Result<(i128, i128), RouterError> {
        let config = Self::require_bonding(&env)?;

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(RouterError::InvalidState);
        }
        if pair.token_reserve == 0 && pair.asset_reserve == 0 {
            return Err(RouterError::NoLiquidity);
        }

        let _: () = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "mark_graduated"),
            vec![&env, pair_id.into_val(&env)],
        );
        let (token_amt, asset_amt): (i128, i128) = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "drain_reserves"),
            vec![&env, pair_id.into_val(&env)],
        );

        let router_addr = env.current_contract_address();
        if token_amt > 0 {
            token::Client::new(&env, &pair.token).transfer(&router_addr, &recipient, &token_amt);
        }
        if asset_amt > 0 {
            token::Client::new(&env, &pair.asset).transfer(&router_addr, &recipient, &asset_amt);
        }

        emit_graduated_out(&env, pair_id, &recipient, token_amt, asset_amt);

        Ok((token_amt, asset_amt))
    }

    /// Privileged pre-graduation withdrawal of a pair's full reserves.
    pub fn drain(env: Env, pair_id: u32, recipient: Address) -> Result<(i128, i128), RouterError> {
        let config = Self::require_bonding(&env)?;

        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state == PairState::Graduated {
            return Err(RouterError::InvalidState);
        }
        if pair.token_reserve == 0 && pair.asset_reserve == 0 {
            return Err(RouterError::NoLiquidity);
        }

        let (token_amt, asset_amt): (i128, i128) = env.invoke_contract(
            &config.factory,
            &Symbol::new(&env, "drain_reserves"),
            vec![&env, pair_id.into_val(&env)],
        );

        let router_addr = env.current_contract_address();
        if token_amt > 0 {
            token::Client::new(&env, &pair.token).transfer(&router_addr, &recipient, &token_amt);
        }
        if asset_amt > 0 {
            token::Client::new(&env, &pair.asset).transfer(&router_addr, &recipient, &asset_amt);
        }

        emit_drained(&env, pair_id, &recipient, token_amt, asset_amt);

        Ok((token_amt, asset_amt))
    }

    // ========================================================
    // QUOTE FUNCTIONS (Read)
    // ========================================================

    /// Tax-inclusive buy preview without executing
    pub fn preview_buy(
        env: Env,
        pair_id: u32,
        asset_in: i128,
        category: AssetCategory,
    ) -> Result<SwapOutcome, RouterError> {
        let config = Self::read_config_checked(&env)?;

        if asset_in <= 0 {
            return Err(RouterError::ZeroAmount);
        }
        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(RouterError::InvalidState);
        }

        let tax_cfg = Self::fetch_tax_settings(&env, &config.factory)?;
        let elapsed = Self::elapsed_minutes(&env, pair.launch_time);
        let tax = compute_tax(TradeDirection::Buy, elapsed, category, asset_in, &tax_cfg);

        let token_out = quote_buy(&env, &pair, asset_in - tax.total())
            .ok_or(RouterError::InsufficientLiquidity)?;
        if token_out > pair.max_tx_amount {
            return Err(RouterError::MaxTxExceeded);
        }

        Ok(SwapOutcome {
            amount_in: asset_in,
            amount_out: token_out,
            tax,
        })
    }

    /// Tax-inclusive sell preview without executing
    pub fn preview_sell(
        env: Env,
        pair_id: u32,
        token_in: i128,
        category: AssetCategory,
    ) -> Result<SwapOutcome, RouterError> {
        let config = Self::read_config_checked(&env)?;

        if token_in <= 0 {
            return Err(RouterError::ZeroAmount);
        }
        let pair = Self::fetch_pair(&env, &config.factory, pair_id)?;
        if pair.state != PairState::Trading {
            return Err(RouterError::InvalidState);
        }
        if token_in > pair.max_tx_amount {
            return Err(RouterError::MaxTxExceeded);
        }

        let gross_out =
            quote_sell(&env, &pair, token_in).ok_or(RouterError::InsufficientLiquidity)?;
        let tax_cfg = Self::fetch_tax_settings(&env, &config.factory)?;
        let elapsed = Self::elapsed_minutes(&env, pair.launch_time);
        let tax = compute_tax(TradeDirection::Sell, elapsed, category, gross_out, &tax_cfg);

        Ok(SwapOutcome {
            amount_in: token_in,
            amount_out: gross_out - tax.total(),
            tax,
        })
    }

    pub fn get_config(env: Env) -> Result<RouterConfig, RouterError> {
        Self::read_config_checked(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn read_config_checked(env: &Env) -> Result<RouterConfig, RouterError> {
        if !is_initialized(env) {
            return Err(RouterError::NotInitialized);
        }
        Ok(read_config(env))
    }

    fn require_bonding(env: &Env) -> Result<RouterConfig, RouterError> {
        let config = Self::read_config_checked(env)?;
        let bonding = config.bonding.clone().ok_or(RouterError::Unauthorized)?;
        bonding.require_auth();
        Ok(config)
    }

    fn elapsed_minutes(env: &Env, launch_time: u64) -> u64 {
        let now = env.ledger().timestamp();
        if now <= launch_time {
            0
        } else {
            (now - launch_time) / 60
        }
    }

    fn fetch_pair(env: &Env, factory: &Address, pair_id: u32) -> Result<ReservePair, RouterError> {
        let result = env.try_invoke_contract::<ReservePair, soroban_sdk::Error>(
            factory,
            &Symbol::new(env, "get_pair"),
            vec![env, pair_id.into_val(env)],
        );
        match result {
            Ok(Ok(pair)) => Ok(pair),
            _ => Err(RouterError::PairNotFound),
        }
    }

    fn fetch_tax_settings(env: &Env, factory: &Address) -> Result<TaxSettings, RouterError> {
        let result = env.try_invoke_contract::<TaxSettings, soroban_sdk::Error>(
            factory,
            &Symbol::new(env, "get_tax_settings"),
            vec![env],
        );
        match result {
            Ok(Ok(tax)) => Ok(tax),
            _ => Err(RouterError::NotInitialized),
        }
    }

    fn fetch_curve_settings(
        env: &Env,
        factory: &Address,
    ) -> Result<CurveSettingsRaw, RouterError> {
        let result = env.try_invoke_contract::<CurveSettingsRaw, soroban_sdk::Error>(
            factory,
            &Symbol::new(env, "get_curve_settings"),
            vec![env],
        );
        match result {
            Ok(Ok(curve)) => Ok(curve),
            _ => Err(RouterError::NotInitialized),
        }
    }

    /// Forward each withheld component to its configured vault
    fn route_tax(env: &Env, asset: &Address, tax_cfg: &TaxSettings, tax: &TaxBreakdown) {
        let router_addr = env.current_contract_address();
        let client = token::Client::new(env, asset);

        if tax.base_amount > 0 {
            client.transfer(&router_addr, &tax_cfg.base_vault, &tax.base_amount);
        }
        if tax.anti_snipe_amount > 0 {
            client.transfer(&router_addr, &tax_cfg.anti_snipe_vault, &tax.anti_snipe_amount);
        }
        if tax.extra_amount > 0 {
            client.transfer(&router_addr, &tax_cfg.extra_vault, &tax.extra_amount);
        }
    }
}
