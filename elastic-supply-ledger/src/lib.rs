#![no_std]

multiversx_sc::imports!();

pub mod elastic_supply_ledger_proxy;
pub mod errors;
pub mod supply;

use errors::{
    ERR_INSUFFICIENT_ALLOWANCE, ERR_INSUFFICIENT_BALANCE, ERR_LEDGER_RECIPIENT,
    ERR_NOT_MONETARY_POLICY, ERR_ZERO_ADDRESS_RECIPIENT,
};

// ============================================================
// Contract
//
// Balances are kept in gons, a fixed pool of `supply::total_gons()`
// indivisible units. The externally visible balance is
// `gons / gons_per_fragment`. A rebase only rewrites the total supply and
// the scale factor, so every holder is rescaled at once.
// ============================================================

#[multiversx_sc::contract]
pub trait ElasticSupplyLedger {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        let initial_supply = BigUint::from(supply::INITIAL_FRAGMENTS_SUPPLY);

        self.total_supply().set(&initial_supply);
        self.gon_balance(&deployer).set(supply::total_gons::<Self::Api>());
        self.gons_per_fragment()
            .set(supply::gons_per_fragment(&initial_supply));

        self.transfer_event(&ManagedAddress::zero(), &deployer, &initial_supply);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setMonetaryPolicy
    // ========================================================

    #[only_owner]
    #[endpoint(setMonetaryPolicy)]
    fn set_monetary_policy(&self, monetary_policy: ManagedAddress) {
        self.monetary_policy().set(&monetary_policy);
        self.monetary_policy_updated_event(&monetary_policy);
    }

    // ========================================================
    // ENDPOINT: rebase
    // Monetary policy only. Saturates at [1, MAX_SUPPLY].
    // ========================================================

    #[endpoint(rebase)]
    fn rebase(&self, epoch: u64, supply_delta: BigInt) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(
            !self.monetary_policy().is_empty() && caller == self.monetary_policy().get(),
            ERR_NOT_MONETARY_POLICY
        );

        let total_supply = self.total_supply().get();
        self.last_rebase_epoch().set(epoch);

        if supply_delta == BigInt::zero() {
            self.log_rebase_event(epoch, &total_supply);
            return total_supply;
        }

        let new_supply = supply::apply_supply_delta(&total_supply, &supply_delta);
        self.total_supply().set(&new_supply);
        self.gons_per_fragment()
            .set(supply::gons_per_fragment(&new_supply));

        self.log_rebase_event(epoch, &new_supply);
        new_supply
    }

    // ========================================================
    // ENDPOINT: transfer / transferFrom
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, value: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        self.require_valid_recipient(&to);
        self.move_fragments(&caller, &to, &value);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, value: BigUint) -> bool {
        let spender = self.blockchain().get_caller();
        self.require_valid_recipient(&to);

        let allowed = self.allowed_fragments(&from, &spender).get();
        require!(allowed >= value, ERR_INSUFFICIENT_ALLOWANCE);
        self.allowed_fragments(&from, &spender)
            .set(&allowed - &value);

        self.move_fragments(&from, &to, &value);
        true
    }

    // ========================================================
    // ENDPOINT: approve / increaseAllowance / decreaseAllowance
    // Allowances are kept in fragments, not gons.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, value: BigUint) -> bool {
        let owner = self.blockchain().get_caller();
        self.allowed_fragments(&owner, &spender).set(&value);
        self.approval_event(&owner, &spender, &value);
        true
    }

    #[endpoint(increaseAllowance)]
    fn increase_allowance(&self, spender: ManagedAddress, added_value: BigUint) -> bool {
        let owner = self.blockchain().get_caller();
        self.allowed_fragments(&owner, &spender)
            .update(|allowed| *allowed += &added_value);

        let allowed = self.allowed_fragments(&owner, &spender).get();
        self.approval_event(&owner, &spender, &allowed);
        true
    }

    #[endpoint(decreaseAllowance)]
    fn decrease_allowance(&self, spender: ManagedAddress, subtracted_value: BigUint) -> bool {
        let owner = self.blockchain().get_caller();
        let old_value = self.allowed_fragments(&owner, &spender).get();
        let new_value = if subtracted_value >= old_value {
            BigUint::zero()
        } else {
            &old_value - &subtracted_value
        };
        self.allowed_fragments(&owner, &spender).set(&new_value);
        self.approval_event(&owner, &spender, &new_value);
        true
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_valid_recipient(&self, to: &ManagedAddress) {
        require!(!to.is_zero(), ERR_ZERO_ADDRESS_RECIPIENT);
        require!(
            *to != self.blockchain().get_sc_address(),
            ERR_LEDGER_RECIPIENT
        );
    }

    /// Moves `value` fragments as exactly `value * gons_per_fragment` gons,
    /// so both external balances change by exactly `value`.
    fn move_fragments(&self, from: &ManagedAddress, to: &ManagedAddress, value: &BigUint) {
        let gon_value = value * &self.gons_per_fragment().get();
        let from_gons = self.gon_balance(from).get();
        require!(from_gons >= gon_value, ERR_INSUFFICIENT_BALANCE);

        self.gon_balance(from).set(&from_gons - &gon_value);
        self.gon_balance(to).update(|gons| *gons += &gon_value);

        self.transfer_event(from, to, value);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(name)]
    fn token_name(&self) -> ManagedBuffer {
        ManagedBuffer::from(supply::TOKEN_NAME)
    }

    #[view(symbol)]
    fn token_ticker(&self) -> ManagedBuffer {
        ManagedBuffer::from(supply::TOKEN_TICKER)
    }

    #[view(decimals)]
    fn decimals(&self) -> u32 {
        supply::DECIMALS
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.gon_balance(account).get() / self.gons_per_fragment().get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowed_fragments(owner, spender).get()
    }

    #[view(monetaryPolicy)]
    fn get_monetary_policy(&self) -> ManagedAddress {
        if self.monetary_policy().is_empty() {
            return ManagedAddress::zero();
        }
        self.monetary_policy().get()
    }

    #[view(totalGons)]
    fn get_total_gons(&self) -> BigUint {
        supply::total_gons::<Self::Api>()
    }

    #[view(maxSupply)]
    fn get_max_supply(&self) -> BigUint {
        supply::max_supply::<Self::Api>()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        value: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        value: &BigUint,
    );

    #[event("logRebase")]
    fn log_rebase_event(&self, #[indexed] epoch: u64, total_supply: &BigUint);

    #[event("logMonetaryPolicyUpdated")]
    fn monetary_policy_updated_event(&self, #[indexed] monetary_policy: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Supply ──

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(gonsPerFragment)]
    #[storage_mapper("gonsPerFragment")]
    fn gons_per_fragment(&self) -> SingleValueMapper<BigUint>;

    #[view(lastRebaseEpoch)]
    #[storage_mapper("lastRebaseEpoch")]
    fn last_rebase_epoch(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("monetaryPolicy")]
    fn monetary_policy(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Balances ──

    #[view(gonBalanceOf)]
    #[storage_mapper("gonBalance")]
    fn gon_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowedFragments")]
    fn allowed_fragments(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
