// Randomized rebase cycles between -50% and +250% until the supply reaches
// MAX_SUPPLY. After every rebase, a transfer of x fragments must lower the
// sender's balance by exactly x and raise the recipient's by exactly x, for
// both the smallest unit and the sender's whole balance.

use elastic_supply_ledger::elastic_supply_ledger_proxy::ElasticSupplyLedgerProxy;
use multiversx_sc_scenario::imports::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OWNER: TestAddress = TestAddress::new("owner");
const USER: TestAddress = TestAddress::new("user");

const LEDGER_ADDRESS: TestSCAddress = TestSCAddress::new("elastic-supply-ledger");
const LEDGER_CODE_PATH: MxscPath = MxscPath::new("output/elastic-supply-ledger.mxsc.json");

const SEED: u64 = 0xba5e;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("elastic-supply-ledger");
    blockchain.register_contract(LEDGER_CODE_PATH, elastic_supply_ledger::ContractBuilder);
    blockchain
}

fn balance_of(world: &mut ScenarioWorld, account: TestAddress) -> BigUint<StaticApi> {
    world
        .query()
        .to(LEDGER_ADDRESS)
        .typed(ElasticSupplyLedgerProxy)
        .balance_of(account.to_address())
        .returns(ReturnsResult)
        .run()
}

fn total_supply(world: &mut ScenarioWorld) -> BigUint<StaticApi> {
    world
        .query()
        .to(LEDGER_ADDRESS)
        .typed(ElasticSupplyLedgerProxy)
        .total_supply()
        .returns(ReturnsResult)
        .run()
}

fn check_transfer(
    world: &mut ScenarioWorld,
    from: TestAddress,
    to: TestAddress,
    amount: &BigUint<StaticApi>,
) {
    let from_before = balance_of(world, from);
    let to_before = balance_of(world, to);

    world
        .tx()
        .from(from)
        .to(LEDGER_ADDRESS)
        .typed(ElasticSupplyLedgerProxy)
        .transfer(to.to_address(), amount.clone())
        .run();

    let from_after = balance_of(world, from);
    let to_after = balance_of(world, to);

    assert_eq!(&from_before - amount, from_after);
    assert_eq!(&to_before + amount, to_after);
    assert_eq!(&from_before + &to_before, &from_after + &to_after);
}

#[test]
fn transfer_precision_survives_rebase_cycles() {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.account(USER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(ElasticSupplyLedgerProxy)
        .init()
        .code(LEDGER_CODE_PATH)
        .new_address(LEDGER_ADDRESS)
        .run();
    world
        .tx()
        .from(OWNER)
        .to(LEDGER_ADDRESS)
        .typed(ElasticSupplyLedgerProxy)
        .set_monetary_policy(OWNER.to_address())
        .run();

    let end_supply = BigInt::<StaticApi>::from(BigUint::from_bytes_be(&[0xff; 16]));
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut rebase_amount = BigInt::<StaticApi>::zero();
    let mut epoch = 0u64;

    loop {
        epoch += 1;
        world
            .tx()
            .from(OWNER)
            .to(LEDGER_ADDRESS)
            .typed(ElasticSupplyLedgerProxy)
            .rebase(epoch, rebase_amount.clone())
            .run();

        let one = BigUint::<StaticApi>::from(1u64);
        check_transfer(&mut world, OWNER, USER, &one);
        check_transfer(&mut world, USER, OWNER, &one);

        let whole_balance = balance_of(&mut world, OWNER);
        check_transfer(&mut world, OWNER, USER, &whole_balance);
        check_transfer(&mut world, USER, OWNER, &whole_balance);

        let supply = BigInt::from(total_supply(&mut world));
        let growth_permille: i64 = rng.gen_range(-500..=2500);
        rebase_amount = &(&supply * &BigInt::from(growth_permille)) / &BigInt::from(1000i64);

        if &supply + &rebase_amount >= end_supply {
            break;
        }
    }

    assert!(epoch > 1);
}
