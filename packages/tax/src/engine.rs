//! Pure tax computation: no stored state, deterministic and replayable.

use crate::types::{AssetCategory, TaxBreakdown, TaxSettings, TradeDirection};
use crate::PCT_DENOM;

/// Resolved per-trade rates after cap compression
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TaxRates {
    pub base_pct: u32,
    pub anti_snipe_pct: u32,
    pub extra_pct: u32,
    pub total_pct: u32,
}

/// Anti-snipe rate for a trade `elapsed_minutes` after launch.
///
/// Reaches exactly 0 once `elapsed_minutes >= anti_snipe_start_pct`, and is
/// cut off entirely outside the configured window.
pub fn anti_snipe_rate(elapsed_minutes: u64, settings: &TaxSettings) -> u32 {
    if elapsed_minutes >= settings.anti_snipe_window_minutes as u64 {
        return 0;
    }
    let elapsed = if elapsed_minutes > u32::MAX as u64 {
        u32::MAX
    } else {
        elapsed_minutes as u32
    };
    settings.anti_snipe_start_pct.saturating_sub(elapsed)
}

/// Resolve the component rates for one trade.
///
/// Cap policy: when `base + extra + anti_snipe` exceeds `max_total_pct`, the
/// overflow is removed entirely from the anti-snipe term, clamped at zero.
/// Base and extra rates are never reduced; the configuration invariant keeps
/// their sum below the cap.
pub fn compute_rates(
    direction: TradeDirection,
    elapsed_minutes: u64,
    category: AssetCategory,
    settings: &TaxSettings,
) -> TaxRates {
    let base_pct = match direction {
        TradeDirection::Buy => settings.base_buy_pct,
        TradeDirection::Sell => settings.base_sell_pct,
    };
    let extra_pct = match category {
        AssetCategory::Standard => 0,
        AssetCategory::ExtraTaxed => settings.extra_category_pct,
    };

    let mut anti_snipe_pct = anti_snipe_rate(elapsed_minutes, settings);

    let raw_total = base_pct + extra_pct + anti_snipe_pct;
    if raw_total > settings.max_total_pct {
        anti_snipe_pct = anti_snipe_pct.saturating_sub(raw_total - settings.max_total_pct);
    }

    TaxRates {
        base_pct,
        anti_snipe_pct,
        extra_pct,
        total_pct: base_pct + anti_snipe_pct + extra_pct,
    }
}

/// Component amounts for a trade of gross value `gross`.
///
/// Buys tax the gross input; sells tax the gross output. Each amount is an
/// independent floored percentage of the gross value, so the net amount the
/// curve sees is `gross - total()`.
pub fn compute_tax(
    direction: TradeDirection,
    elapsed_minutes: u64,
    category: AssetCategory,
    gross: i128,
    settings: &TaxSettings,
) -> TaxBreakdown {
    let rates = compute_rates(direction, elapsed_minutes, category, settings);

    TaxBreakdown {
        base_amount: gross * rates.base_pct as i128 / PCT_DENOM,
        anti_snipe_amount: gross * rates.anti_snipe_pct as i128 / PCT_DENOM,
        extra_amount: gross * rates.extra_pct as i128 / PCT_DENOM,
        total_rate_pct: rates.total_pct,
    }
}
