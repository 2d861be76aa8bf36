use elastic_supply_ledger::supply::{
    apply_supply_delta, gons_per_fragment, max_supply, total_gons, INITIAL_FRAGMENTS_SUPPLY,
};
use multiversx_sc::types::{BigInt, BigUint};
use multiversx_sc_scenario::api::{DebugApi, StaticApi};

type LedgerContract = elastic_supply_ledger::ContractObj<DebugApi>;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn signed(value: i64) -> BigInt<StaticApi> {
    BigInt::from(value)
}

#[test]
fn test_contract_builds() {
    let _: fn() -> LedgerContract = elastic_supply_ledger::contract_obj;
}

#[test]
fn initial_scale_factor_is_exact() {
    let initial = big(INITIAL_FRAGMENTS_SUPPLY);
    let per_fragment = gons_per_fragment(&initial);
    assert_eq!(&per_fragment * &initial, total_gons::<StaticApi>());
}

#[test]
fn zero_delta_keeps_supply() {
    assert_eq!(apply_supply_delta(&big(1_000), &BigInt::zero()), big(1_000));
}

#[test]
fn positive_delta_grows_supply() {
    assert_eq!(apply_supply_delta(&big(1_000), &signed(100)), big(1_100));
}

#[test]
fn negative_delta_shrinks_supply() {
    assert_eq!(apply_supply_delta(&big(1_000), &signed(-100)), big(900));
    assert_eq!(apply_supply_delta(&big(1_000), &signed(-999)), big(1));
}

#[test]
fn negative_delta_floors_at_one() {
    assert_eq!(apply_supply_delta(&big(1_000), &signed(-1_000)), big(1));
    assert_eq!(apply_supply_delta(&big(1_000), &signed(-5_000)), big(1));
}

#[test]
fn positive_delta_saturates_at_max_supply() {
    let max = max_supply::<StaticApi>();
    let almost_max = &max - &big(1);

    assert_eq!(apply_supply_delta(&almost_max, &signed(1)), max);
    assert_eq!(apply_supply_delta(&almost_max, &signed(1_000)), max);
    assert_eq!(apply_supply_delta(&max, &signed(1)), max);
}

#[test]
fn max_supply_is_two_pow_128_minus_one() {
    let max = max_supply::<StaticApi>();
    let two_pow_64 = BigUint::<StaticApi>::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&max + &big(1), &two_pow_64 * &two_pow_64);
}

#[test]
fn scale_factor_stays_large_at_max_supply() {
    let max = max_supply::<StaticApi>();
    let per_fragment = gons_per_fragment(&max);
    assert!(per_fragment > max);
}
