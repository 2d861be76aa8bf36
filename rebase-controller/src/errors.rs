// Access control
pub const ERR_NOT_ORCHESTRATOR: &str = "Caller is not the orchestrator";

// Invalid parameters
pub const ERR_ZERO_BASE_MCAP: &str = "Base market cap must be greater than zero";
pub const ERR_ZERO_REBASE_LAG: &str = "Rebase lag must be greater than zero";
pub const ERR_ZERO_REBASE_INTERVAL: &str = "Rebase interval must be greater than zero";
pub const ERR_OFFSET_EXCEEDS_INTERVAL: &str = "Rebase window offset exceeds the rebase interval";

// Oracle data
pub const ERR_ORACLE_NOT_SET: &str = "Oracle is not set";
pub const ERR_INVALID_MCAP_DATA: &str = "Market cap oracle data is not valid";
pub const ERR_INVALID_RATE_DATA: &str = "Token price oracle data is not valid";
pub const ERR_ZERO_TARGET_RATE: &str = "Target rate is zero";

// Timing
pub const ERR_OUTSIDE_REBASE_WINDOW: &str = "Not in the rebase window";
pub const ERR_REBASE_TOO_SOON: &str = "Minimum rebase interval has not elapsed";
