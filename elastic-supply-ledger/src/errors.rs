// Access control
pub const ERR_NOT_MONETARY_POLICY: &str = "Caller is not the monetary policy";

// Invalid parameters
pub const ERR_ZERO_ADDRESS_RECIPIENT: &str = "Cannot transfer to the zero address";
pub const ERR_LEDGER_RECIPIENT: &str = "Cannot transfer to the ledger contract";

// Balances
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "Insufficient allowance";
