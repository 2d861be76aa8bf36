#![no_std]

multiversx_sc::imports!();

pub mod mock_oracle_proxy;

// ============================================================
// Contract
//
// Owner-fed `(value, valid)` source implementing the oracle interface the
// rebase controller consumes. Reports `(0, false)` until fed.
// ============================================================

#[multiversx_sc::contract]
pub trait MockOracle {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(storeData)]
    fn store_data(&self, value: BigUint) {
        self.data().set(&value);
        self.data_stored_event(&value);
    }

    #[only_owner]
    #[endpoint(storeValidity)]
    fn store_validity(&self, valid: bool) {
        self.validity().set(valid);
        self.validity_stored_event(valid);
    }

    #[view(getData)]
    fn get_data(&self) -> MultiValue2<BigUint, bool> {
        (self.data().get(), self.validity().get()).into()
    }

    #[event("dataStored")]
    fn data_stored_event(&self, value: &BigUint);

    #[event("validityStored")]
    fn validity_stored_event(&self, valid: bool);

    #[storage_mapper("data")]
    fn data(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("validity")]
    fn validity(&self) -> SingleValueMapper<bool>;
}
