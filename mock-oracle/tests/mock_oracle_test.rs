use mock_oracle::mock_oracle_proxy::MockOracleProxy;
use multiversx_sc_scenario::imports::*;

const OWNER: TestAddress = TestAddress::new("owner");
const STRANGER: TestAddress = TestAddress::new("stranger");

const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("mock-oracle");
const ORACLE_CODE_PATH: MxscPath = MxscPath::new("output/mock-oracle.mxsc.json");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("mock-oracle");
    blockchain.register_contract(ORACLE_CODE_PATH, mock_oracle::ContractBuilder);
    blockchain
}

fn deploy(world: &mut ScenarioWorld) {
    world.account(OWNER).nonce(1);
    world.account(STRANGER).nonce(1);
    world
        .tx()
        .from(OWNER)
        .typed(MockOracleProxy)
        .init()
        .code(ORACLE_CODE_PATH)
        .new_address(ORACLE_ADDRESS)
        .run();
}

fn read(world: &mut ScenarioWorld) -> (BigUint<StaticApi>, bool) {
    world
        .query()
        .to(ORACLE_ADDRESS)
        .typed(MockOracleProxy)
        .get_data()
        .returns(ReturnsResult)
        .run()
        .into_tuple()
}

#[test]
fn reports_invalid_until_fed() {
    let mut world = world();
    deploy(&mut world);

    assert_eq!(read(&mut world), (BigUint::zero(), false));
}

#[test]
fn reports_stored_data_and_validity() {
    let mut world = world();
    deploy(&mut world);

    world
        .tx()
        .from(OWNER)
        .to(ORACLE_ADDRESS)
        .typed(MockOracleProxy)
        .store_data(BigUint::<StaticApi>::from(42u64))
        .run();
    world
        .tx()
        .from(OWNER)
        .to(ORACLE_ADDRESS)
        .typed(MockOracleProxy)
        .store_validity(true)
        .run();

    assert_eq!(read(&mut world), (BigUint::from(42u64), true));
}

#[test]
fn only_owner_can_feed() {
    let mut world = world();
    deploy(&mut world);

    world
        .tx()
        .from(STRANGER)
        .to(ORACLE_ADDRESS)
        .typed(MockOracleProxy)
        .store_data(BigUint::<StaticApi>::from(1u64))
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();
}

#[test]
fn feeding_logs_value_and_validity() {
    let mut world = world();
    deploy(&mut world);

    let logs = world
        .tx()
        .from(OWNER)
        .to(ORACLE_ADDRESS)
        .typed(MockOracleProxy)
        .store_data(BigUint::<StaticApi>::from(42u64))
        .returns(ReturnsLogs)
        .run();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].topics[0], b"dataStored".to_vec());
    assert_eq!(
        BigUint::<StaticApi>::top_decode(logs[0].data[0].as_slice()).unwrap(),
        BigUint::from(42u64)
    );

    for valid in [true, false] {
        let logs = world
            .tx()
            .from(OWNER)
            .to(ORACLE_ADDRESS)
            .typed(MockOracleProxy)
            .store_validity(valid)
            .returns(ReturnsLogs)
            .run();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].topics[0], b"validityStored".to_vec());
        assert_eq!(bool::top_decode(logs[0].data[0].as_slice()).unwrap(), valid);
    }
}
