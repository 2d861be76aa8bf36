use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::{BigInt, BigUint};

use crate::types::PolicyConfig;

// ============================================================
// Fixed-point constants
// ============================================================

/// 18-decimal fixed-point one.
pub const UNIT: u64 = 1_000_000_000_000_000_000;

/// Exchange rates above `MAX_RATE_UNITS * UNIT` are treated as exactly that.
pub const MAX_RATE_UNITS: u64 = 1_000_000;

pub fn unit<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(UNIT)
}

pub fn max_rate<M: ManagedTypeApi>() -> BigUint<M> {
    &unit::<M>() * &BigUint::from(MAX_RATE_UNITS)
}

/// Same cap as the ledger, 2^128 - 1.
pub fn max_supply<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from_bytes_be(&[0xff; 16])
}

// ============================================================
// Rate and supply adjustment
// ============================================================

pub fn cap_exchange_rate<M: ManagedTypeApi>(rate: BigUint<M>) -> BigUint<M> {
    let max = max_rate::<M>();
    if rate > max {
        max
    } else {
        rate
    }
}

/// `mcap * UNIT / base_mcap`, truncating.
pub fn target_rate<M: ManagedTypeApi>(mcap: &BigUint<M>, base_mcap: &BigUint<M>) -> BigUint<M> {
    &(mcap * &unit::<M>()) / base_mcap
}

/// True when `|rate - target_rate| < target_rate * deviation_threshold / UNIT`.
pub fn within_deviation_threshold<M: ManagedTypeApi>(
    rate: &BigUint<M>,
    target_rate: &BigUint<M>,
    deviation_threshold: &BigUint<M>,
) -> bool {
    let absolute_threshold = &(target_rate * deviation_threshold) / &unit::<M>();
    let gap = if rate >= target_rate {
        rate - target_rate
    } else {
        target_rate - rate
    };
    gap < absolute_threshold
}

/// Damped proportional correction:
/// `total_supply * (rate - target_rate) / target_rate / rebase_lag`.
///
/// Both divisions truncate toward zero. `target_rate` must be non-zero.
pub fn compute_supply_delta<M: ManagedTypeApi>(
    config: &PolicyConfig<M>,
    rate: &BigUint<M>,
    target_rate: &BigUint<M>,
    total_supply: &BigUint<M>,
) -> BigInt<M> {
    if within_deviation_threshold(rate, target_rate, &config.deviation_threshold) {
        return BigInt::zero();
    }

    let target = BigInt::from(target_rate.clone());
    let deviation = &BigInt::from(rate.clone()) - &target;
    let scaled = &BigInt::from(total_supply.clone()) * &deviation;
    // from_bytes_be: `BigUint::from(u64)` rejects values above i64::MAX
    let lag = BigInt::from(BigUint::from_bytes_be(&config.rebase_lag.to_be_bytes()));

    &(&scaled / &target) / &lag
}

/// Shrinks `supply_delta` so the resulting supply stays in `[1, max_supply]`,
/// matching what the ledger will actually apply.
pub fn clamp_supply_delta<M: ManagedTypeApi>(
    supply_delta: BigInt<M>,
    total_supply: &BigUint<M>,
) -> BigInt<M> {
    let supply = BigInt::from(total_supply.clone());
    let new_supply = &supply + &supply_delta;

    let ceiling = BigInt::from(max_supply::<M>());
    if new_supply > ceiling {
        return &ceiling - &supply;
    }

    let floor = BigInt::from(BigUint::from(1u64));
    if new_supply < floor {
        return &floor - &supply;
    }

    supply_delta
}

// ============================================================
// Rebase window
// ============================================================

/// Opening instant of the window belonging to the interval that contains `now`.
pub fn window_open_at<M: ManagedTypeApi>(config: &PolicyConfig<M>, now: u64) -> u64 {
    let interval_start = now - now % config.min_rebase_time_interval_sec;
    interval_start.saturating_add(config.rebase_window_offset_sec)
}

/// `window_open <= now < window_open + length`
pub fn in_rebase_window<M: ManagedTypeApi>(config: &PolicyConfig<M>, now: u64) -> bool {
    let open = window_open_at(config, now);
    now >= open && now < open.saturating_add(config.rebase_window_length_sec)
}

pub fn interval_elapsed<M: ManagedTypeApi>(
    config: &PolicyConfig<M>,
    last_rebase_timestamp_sec: u64,
    now: u64,
) -> bool {
    now >= last_rebase_timestamp_sec.saturating_add(config.min_rebase_time_interval_sec)
}
