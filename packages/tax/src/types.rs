//! Tax configuration and breakdown payloads shared across contracts

use soroban_sdk::{contracttype, Address};

/// Trade direction as seen by the tax engine
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// Launch category; `ExtraTaxed` assets carry a fixed surcharge
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetCategory {
    Standard,
    ExtraTaxed,
}

/// Registry-level tax configuration
///
/// Rates are whole-percent units. Invariant, enforced at configuration time:
/// `base_buy_pct + extra_category_pct < max_total_pct` and likewise for the
/// sell base. The anti-snipe term is the only one compressed at runtime.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TaxSettings {
    pub base_buy_pct: u32,
    pub base_sell_pct: u32,
    /// Starting anti-snipe rate; decays by one percent per elapsed minute
    pub anti_snipe_start_pct: u32,
    /// Hard cutoff for the anti-snipe term, in minutes after launch
    pub anti_snipe_window_minutes: u32,
    pub extra_category_pct: u32,
    pub max_total_pct: u32,
    pub base_vault: Address,
    pub anti_snipe_vault: Address,
    pub extra_vault: Address,
}

/// Per-trade tax amounts, one per component, routed to separate vaults
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxBreakdown {
    pub base_amount: i128,
    pub anti_snipe_amount: i128,
    pub extra_amount: i128,
    pub total_rate_pct: u32,
}

impl TaxBreakdown {
    pub fn total(&self) -> i128 {
        self.base_amount + self.anti_snipe_amount + self.extra_amount
    }
}
