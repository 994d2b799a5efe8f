// Defaults - process-wide staking parameter defaults
use cosmwasm_std::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default unbonding time: three weeks.
pub const DEFAULT_UNBONDING_TIME: Duration = Duration::from_secs(60 * 60 * 24 * 21);

/// Default maximum number of bonded validators
pub const DEFAULT_MAX_VALIDATORS: u16 = 21;

/// Default number of blocks per epoch
pub const DEFAULT_BLOCKS_PER_EPOCH: u16 = 252;

/// Default cap on validators eligible to vote in epoch-level decisions
pub const DEFAULT_MAX_VALS_TO_VOTE: u16 = 21;

/// Default bondable coin denomination
pub const DEFAULT_BOND_DENOM: &str = "stake";

/// Defaults provider for building a parameter set.
///
/// Injected into `Params::default_set` rather than compiled in, so tests
/// and alternate networks can substitute their own values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDefaults {
    pub unbonding_time: Duration,
    pub max_validators: u16,
    pub bond_denom: String,
    pub blocks_per_epoch: u16,
    pub max_vals_to_vote: u16,
    pub min_self_delegation_limit: Decimal,
    pub min_delegation: Decimal,
}

impl ParamDefaults {
    /// Mainnet defaults.
    /// This is the SINGLE SOURCE OF TRUTH for the constants above.
    pub fn mainnet() -> Self {
        Self {
            unbonding_time: DEFAULT_UNBONDING_TIME,
            max_validators: DEFAULT_MAX_VALIDATORS,
            bond_denom: DEFAULT_BOND_DENOM.to_string(),
            blocks_per_epoch: DEFAULT_BLOCKS_PER_EPOCH,
            max_vals_to_vote: DEFAULT_MAX_VALS_TO_VOTE,
            min_self_delegation_limit: Decimal::from_ratio(10_000u128, 1u128),
            min_delegation: Decimal::from_ratio(1u128, 10_000u128),
        }
    }

    /// Load defaults from a JSON file
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save defaults to a JSON file
    pub fn to_file(&self, path: &str) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl Default for ParamDefaults {
    fn default() -> Self {
        Self::mainnet()
    }
}
