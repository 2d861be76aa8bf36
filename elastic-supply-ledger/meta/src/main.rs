fn main() {
    multiversx_sc_meta_lib::cli_main::<elastic_supply_ledger::AbiProvider>();
}
