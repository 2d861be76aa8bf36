use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::{BigInt, BigUint};

// ============================================================
// Denomination constants
// ============================================================

pub const TOKEN_NAME: &[u8] = b"Base Protocol";
pub const TOKEN_TICKER: &[u8] = b"BASE";
pub const DECIMALS: u32 = 9;

/// 50M fragments at 9 decimals, credited to the deployer on init.
pub const INITIAL_FRAGMENTS_SUPPLY: u64 = 50_000_000 * 1_000_000_000;

/// 2^256 - 1
pub fn max_uint256<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from_bytes_be(&[0xff; 32])
}

/// Upper bound of the external supply: 2^128 - 1.
///
/// Keeps `gons_per_fragment` around 2^128 or more, so every fragment stays
/// backed by a large integer number of gons at any reachable supply.
pub fn max_supply<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from_bytes_be(&[0xff; 16])
}

/// Fixed number of gons in existence. The largest multiple of the initial
/// supply that fits in 256 bits, so the initial scale factor is exact.
pub fn total_gons<M: ManagedTypeApi>() -> BigUint<M> {
    let max = max_uint256::<M>();
    let remainder = &max % &BigUint::from(INITIAL_FRAGMENTS_SUPPLY);
    max - remainder
}

/// Applies a signed delta to the supply, saturating at `[1, max_supply]`.
pub fn apply_supply_delta<M: ManagedTypeApi>(
    total_supply: &BigUint<M>,
    supply_delta: &BigInt<M>,
) -> BigUint<M> {
    let magnitude = supply_delta.magnitude();

    if *supply_delta < BigInt::zero() {
        if magnitude >= *total_supply {
            return BigUint::from(1u64);
        }
        return total_supply - &magnitude;
    }

    let grown = total_supply + &magnitude;
    let max = max_supply::<M>();
    if grown > max {
        max
    } else {
        grown
    }
}

/// Gons backing one fragment at the given supply (truncating).
pub fn gons_per_fragment<M: ManagedTypeApi>(total_supply: &BigUint<M>) -> BigUint<M> {
    &total_gons::<M>() / total_supply
}
