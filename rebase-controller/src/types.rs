multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Policy configuration: owner-tuned, validated by the setters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PolicyConfig<M: ManagedTypeApi> {
    /// Minimum relative gap between rate and target rate, 18 decimals
    /// (5e16 is 5%). Gaps strictly below it produce no supply change.
    pub deviation_threshold: BigUint<M>,
    /// Divisor applied to the full correction; 1 applies it in one tick.
    pub rebase_lag: u64,
    pub min_rebase_time_interval_sec: u64,
    /// Window opens this many seconds after each interval boundary
    pub rebase_window_offset_sec: u64,
    pub rebase_window_length_sec: u64,
}
