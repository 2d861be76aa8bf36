use multiversx_sc::proxy_imports::*;

/// Any contract exposing `getData() -> (value, valid)`.
pub struct OracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for OracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = OracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        OracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct OracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> OracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_data(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getData")
            .original_result()
    }
}
