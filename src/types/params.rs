// Staking parameters - governance-tunable staking configuration
// Bounds are enforced by `validate`, never by construction: the external
// store deserializes sets field by field, so a partially-built set is legal
// until it is explicitly checked.

use crate::config::ParamDefaults;
use cosmwasm_std::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// High-level settings for staking.
///
/// Equality is deliberately not derived: two sets compare equal iff their
/// canonical encodings are byte-identical (see [`Params::equals`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Time a unit of stake stays locked after being withdrawn
    pub unbonding_time: Duration,
    /// Maximum number of bonded validators (max u16 = 65535)
    pub max_validators: u16,
    /// Number of blocks per epoch
    pub epoch: u16,
    /// Cap on validators eligible to vote in epoch-level decisions
    pub max_vals_to_vote: u16,
    /// Bondable coin denomination
    pub bond_denom: String,
    /// Lower limit on a validator's min self delegation
    pub min_self_delegation_limit: Decimal,
    /// Minimum delegation or undelegation amount
    pub min_delegation: Decimal,
}

impl Params {
    /// Aggregates the seven values into a set. Performs no validation.
    pub fn new(
        unbonding_time: Duration,
        max_validators: u16,
        bond_denom: String,
        epoch: u16,
        max_vals_to_vote: u16,
        min_self_delegation_limit: Decimal,
        min_delegation: Decimal,
    ) -> Self {
        Self {
            unbonding_time,
            max_validators,
            epoch,
            max_vals_to_vote,
            bond_denom,
            min_self_delegation_limit,
            min_delegation,
        }
    }

    /// Builds a parameter set from an injected defaults provider.
    pub fn default_set(defaults: &ParamDefaults) -> Self {
        Self::new(
            defaults.unbonding_time,
            defaults.max_validators,
            defaults.bond_denom.clone(),
            defaults.blocks_per_epoch,
            defaults.max_vals_to_vote,
            defaults.min_self_delegation_limit,
            defaults.min_delegation,
        )
    }

    /// Canonical encoding of the full set.
    ///
    /// One codec path shared by the store and the equality check.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ParamsError> {
        bincode::serialize(self).map_err(|e| ParamsError::Codec(e.to_string()))
    }

    /// Returns whether two sets are identical.
    ///
    /// Compares the canonical encodings rather than the fields. Slower than
    /// a direct comparison, but equality then tracks exactly what would be
    /// persisted, including any future field additions.
    pub fn equals(&self, other: &Params) -> bool {
        match (self.canonical_bytes(), other.canonical_bytes()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Quick validity check for a set of params.
    ///
    /// Checks run in a fixed order and the first violated invariant wins.
    /// `min_delegation` is intentionally left unchecked.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.bond_denom.is_empty() {
            return Err(ParamsError::EmptyBondDenom);
        }
        if self.max_validators == 0 {
            return Err(ParamsError::ZeroMaxValidators);
        }
        if self.epoch == 0 {
            return Err(ParamsError::ZeroEpoch);
        }
        if self.max_vals_to_vote == 0 {
            return Err(ParamsError::ZeroMaxValsToVote);
        }
        if self.min_self_delegation_limit <= Decimal::zero() {
            return Err(ParamsError::NonPositiveMinSelfDelegationLimit);
        }
        Ok(())
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Params:\n  \
             Unbonding Time:            {:?}\n  \
             Max Validators:            {}\n  \
             Blocks Per Epoch:          {}\n  \
             Max Validators To Vote:    {}\n  \
             Bond Denom:                {}\n  \
             Min Self Delegation Limit: {}\n  \
             Min Delegation:            {}",
            self.unbonding_time,
            self.max_validators,
            self.epoch,
            self.max_vals_to_vote,
            self.bond_denom,
            self.min_self_delegation_limit,
            self.min_delegation,
        )
    }
}

/// Parameter validation and codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("staking parameter BondDenom can't be an empty string")]
    EmptyBondDenom,

    #[error("staking parameter MaxValidators must be a positive integer")]
    ZeroMaxValidators,

    #[error("staking parameter Epoch must be a positive integer")]
    ZeroEpoch,

    #[error("staking parameter MaxValsToVote must be a positive integer")]
    ZeroMaxValsToVote,

    #[error("staking parameter MinSelfDelegationLimit must be a positive decimal")]
    NonPositiveMinSelfDelegationLimit,

    #[error("parameter encoding failed: {0}")]
    Codec(String),
}
