#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod ledger_proxy;
pub mod oracle_proxy;
pub mod policy_math;
pub mod rebase_controller_proxy;
pub mod types;

use errors::{
    ERR_INVALID_MCAP_DATA, ERR_INVALID_RATE_DATA, ERR_NOT_ORCHESTRATOR,
    ERR_OFFSET_EXCEEDS_INTERVAL, ERR_ORACLE_NOT_SET, ERR_OUTSIDE_REBASE_WINDOW,
    ERR_REBASE_TOO_SOON, ERR_ZERO_BASE_MCAP, ERR_ZERO_REBASE_INTERVAL, ERR_ZERO_REBASE_LAG,
    ERR_ZERO_TARGET_RATE,
};
use types::PolicyConfig;

// ============================================================
// Constants: policy defaults applied at init
// ============================================================

/// 5% with 18 decimals
const DEFAULT_DEVIATION_THRESHOLD: u64 = 50_000_000_000_000_000;
const DEFAULT_REBASE_LAG: u64 = 30;
/// One rebase per day
const DEFAULT_MIN_REBASE_TIME_INTERVAL_SEC: u64 = 86_400;
/// 20:00 UTC
const DEFAULT_REBASE_WINDOW_OFFSET_SEC: u64 = 72_000;
/// 15 minutes
const DEFAULT_REBASE_WINDOW_LENGTH_SEC: u64 = 900;

// ============================================================
// Contract
//
// Once per interval, inside the rebase window, compares the token price
// against `mcap * 1e18 / base_mcap` and asks the ledger to expand or
// contract supply by a damped fraction of the gap.
// ============================================================

#[multiversx_sc::contract]
pub trait RebaseController {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, ledger_address: ManagedAddress, base_mcap: BigUint) {
        require!(base_mcap > 0u64, ERR_ZERO_BASE_MCAP);

        self.ledger_address().set(&ledger_address);
        self.base_mcap().set(&base_mcap);
        self.policy_config().set(PolicyConfig {
            deviation_threshold: BigUint::from(DEFAULT_DEVIATION_THRESHOLD),
            rebase_lag: DEFAULT_REBASE_LAG,
            min_rebase_time_interval_sec: DEFAULT_MIN_REBASE_TIME_INTERVAL_SEC,
            rebase_window_offset_sec: DEFAULT_REBASE_WINDOW_OFFSET_SEC,
            rebase_window_length_sec: DEFAULT_REBASE_WINDOW_LENGTH_SEC,
        });
        self.epoch().set(0u64);
        self.last_rebase_timestamp_sec().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: rebase
    // Orchestrator only. Any failed gate reverts the whole call,
    // so epoch and timestamp only move on success.
    // ========================================================

    #[endpoint(rebase)]
    fn rebase(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.orchestrator().is_empty() && caller == self.orchestrator().get(),
            ERR_NOT_ORCHESTRATOR
        );

        // ── Timing ──
        let config = self.policy_config().get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            policy_math::in_rebase_window(&config, now),
            ERR_OUTSIDE_REBASE_WINDOW
        );
        require!(
            policy_math::interval_elapsed(&config, self.last_rebase_timestamp_sec().get(), now),
            ERR_REBASE_TOO_SOON
        );

        // ── Oracles: market cap first, then price ──
        require!(
            !self.mcap_oracle().is_empty() && !self.token_price_oracle().is_empty(),
            ERR_ORACLE_NOT_SET
        );
        let mcap = self.read_oracle(self.mcap_oracle().get(), ERR_INVALID_MCAP_DATA);
        let exchange_rate = policy_math::cap_exchange_rate(
            self.read_oracle(self.token_price_oracle().get(), ERR_INVALID_RATE_DATA),
        );

        let target_rate = policy_math::target_rate(&mcap, &self.base_mcap().get());
        require!(target_rate > 0u64, ERR_ZERO_TARGET_RATE);

        // ── Supply adjustment ──
        let ledger_addr = self.ledger_address().get();
        let total_supply: BigUint = self
            .tx()
            .to(&ledger_addr)
            .typed(ledger_proxy::LedgerProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call();

        let supply_delta = policy_math::clamp_supply_delta(
            policy_math::compute_supply_delta(&config, &exchange_rate, &target_rate, &total_supply),
            &total_supply,
        );

        let epoch = self.epoch().get() + 1;
        self.epoch().set(epoch);
        // Pinned to the window opening so the schedule does not drift
        self.last_rebase_timestamp_sec()
            .set(policy_math::window_open_at(&config, now));

        self.tx()
            .to(&ledger_addr)
            .typed(ledger_proxy::LedgerProxy)
            .rebase(epoch, supply_delta.clone())
            .sync_call();

        self.log_rebase_event(epoch, &exchange_rate, &mcap, &supply_delta);
    }

    // ========================================================
    // ADMIN: policy parameters
    // ========================================================

    #[only_owner]
    #[endpoint(setOrchestrator)]
    fn set_orchestrator(&self, orchestrator: ManagedAddress) {
        self.orchestrator().set(&orchestrator);
    }

    #[only_owner]
    #[endpoint(setTokenPriceOracle)]
    fn set_token_price_oracle(&self, oracle: ManagedAddress) {
        self.token_price_oracle().set(&oracle);
    }

    #[only_owner]
    #[endpoint(setMcapOracle)]
    fn set_mcap_oracle(&self, oracle: ManagedAddress) {
        self.mcap_oracle().set(&oracle);
    }

    #[only_owner]
    #[endpoint(setDeviationThreshold)]
    fn set_deviation_threshold(&self, deviation_threshold: BigUint) {
        self.policy_config()
            .update(|config| config.deviation_threshold = deviation_threshold);
    }

    #[only_owner]
    #[endpoint(setRebaseLag)]
    fn set_rebase_lag(&self, rebase_lag: u64) {
        require!(rebase_lag > 0, ERR_ZERO_REBASE_LAG);
        self.policy_config()
            .update(|config| config.rebase_lag = rebase_lag);
    }

    #[only_owner]
    #[endpoint(setRebaseTimingParameters)]
    fn set_rebase_timing_parameters(
        &self,
        min_rebase_time_interval_sec: u64,
        rebase_window_offset_sec: u64,
        rebase_window_length_sec: u64,
    ) {
        require!(min_rebase_time_interval_sec > 0, ERR_ZERO_REBASE_INTERVAL);
        require!(
            rebase_window_offset_sec <= min_rebase_time_interval_sec,
            ERR_OFFSET_EXCEEDS_INTERVAL
        );

        self.policy_config().update(|config| {
            config.min_rebase_time_interval_sec = min_rebase_time_interval_sec;
            config.rebase_window_offset_sec = rebase_window_offset_sec;
            config.rebase_window_length_sec = rebase_window_length_sec;
        });
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Oracle and ledger views are reached with a plain `sync_call`: the
    /// scenario VM does not execute readonly calls.
    fn read_oracle(&self, oracle_addr: ManagedAddress, invalid_data_err: &str) -> BigUint {
        let data: MultiValue2<BigUint, bool> = self
            .tx()
            .to(&oracle_addr)
            .typed(oracle_proxy::OracleProxy)
            .get_data()
            .returns(ReturnsResult)
            .sync_call();
        let (value, valid) = data.into_tuple();
        require!(valid, invalid_data_err);
        value
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(inRebaseWindow)]
    fn in_rebase_window(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        policy_math::in_rebase_window(&self.policy_config().get(), now)
    }

    #[view(deviationThreshold)]
    fn deviation_threshold(&self) -> BigUint {
        self.policy_config().get().deviation_threshold
    }

    #[view(rebaseLag)]
    fn rebase_lag(&self) -> u64 {
        self.policy_config().get().rebase_lag
    }

    #[view(minRebaseTimeIntervalSec)]
    fn min_rebase_time_interval_sec(&self) -> u64 {
        self.policy_config().get().min_rebase_time_interval_sec
    }

    #[view(rebaseWindowOffsetSec)]
    fn rebase_window_offset_sec(&self) -> u64 {
        self.policy_config().get().rebase_window_offset_sec
    }

    #[view(rebaseWindowLengthSec)]
    fn rebase_window_length_sec(&self) -> u64 {
        self.policy_config().get().rebase_window_length_sec
    }

    #[view(orchestrator)]
    fn get_orchestrator(&self) -> ManagedAddress {
        if self.orchestrator().is_empty() {
            return ManagedAddress::zero();
        }
        self.orchestrator().get()
    }

    #[view(tokenPriceOracle)]
    fn get_token_price_oracle(&self) -> ManagedAddress {
        if self.token_price_oracle().is_empty() {
            return ManagedAddress::zero();
        }
        self.token_price_oracle().get()
    }

    #[view(mcapOracle)]
    fn get_mcap_oracle(&self) -> ManagedAddress {
        if self.mcap_oracle().is_empty() {
            return ManagedAddress::zero();
        }
        self.mcap_oracle().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("logRebase")]
    fn log_rebase_event(
        &self,
        #[indexed] epoch: u64,
        #[indexed] exchange_rate: &BigUint,
        #[indexed] mcap: &BigUint,
        requested_supply_adjustment: &BigInt,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Wiring ──

    #[view(ledger)]
    #[storage_mapper("ledgerAddress")]
    fn ledger_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("orchestrator")]
    fn orchestrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("tokenPriceOracle")]
    fn token_price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("mcapOracle")]
    fn mcap_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Policy ──

    #[view(baseMcap)]
    #[storage_mapper("baseMcap")]
    fn base_mcap(&self) -> SingleValueMapper<BigUint>;

    #[view(getPolicyConfig)]
    #[storage_mapper("policyConfig")]
    fn policy_config(&self) -> SingleValueMapper<PolicyConfig<Self::Api>>;

    // ── State ──

    #[view(epoch)]
    #[storage_mapper("epoch")]
    fn epoch(&self) -> SingleValueMapper<u64>;

    #[view(lastRebaseTimestampSec)]
    #[storage_mapper("lastRebaseTimestampSec")]
    fn last_rebase_timestamp_sec(&self) -> SingleValueMapper<u64>;
}
