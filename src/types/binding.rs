// Parameter bindings - stable keys and in-place field accessors
// External stores persist values under these keys; a key must never be
// renamed once deployed.

use super::params::{Params, ParamsError};
use cosmwasm_std::Decimal;
use serde::de::DeserializeOwned;
use std::time::Duration;

// Keys for parameter access
pub const KEY_UNBONDING_TIME: &str = "UnbondingTime";
pub const KEY_MAX_VALIDATORS: &str = "MaxValidators";
pub const KEY_BOND_DENOM: &str = "BondDenom";
/// How many blocks each epoch has
pub const KEY_BLOCKS_PER_EPOCH: &str = "BlocksPerEpoch";
pub const KEY_MAX_VALS_TO_VOTE: &str = "MaxValsToVote";
pub const KEY_MIN_SELF_DELEGATION_LIMIT: &str = "MinSelfDelegationLimit";
pub const KEY_MIN_DELEGATION: &str = "MinDelegation";

/// Mutable accessor for one field of one parameter set.
///
/// The variant fixes the semantic type a caller must write; bytes of any
/// other type fail to decode and surface as a codec error in the store.
#[derive(Debug)]
pub enum ParamField<'a> {
    Duration(&'a mut Duration),
    U16(&'a mut u16),
    Denom(&'a mut String),
    Decimal(&'a mut Decimal),
}

impl ParamField<'_> {
    /// Encode the referenced field with the canonical codec.
    pub fn encode(&self) -> Result<Vec<u8>, ParamsError> {
        let bytes = match self {
            ParamField::Duration(v) => bincode::serialize(v),
            ParamField::U16(v) => bincode::serialize(v),
            ParamField::Denom(v) => bincode::serialize(v),
            ParamField::Decimal(v) => bincode::serialize(v),
        };
        bytes.map_err(|e| ParamsError::Codec(e.to_string()))
    }

    /// Overwrite the referenced field in place from canonical bytes.
    pub fn decode_from(&mut self, bytes: &[u8]) -> Result<(), ParamsError> {
        match self {
            ParamField::Duration(v) => **v = decode(bytes)?,
            ParamField::U16(v) => **v = decode(bytes)?,
            ParamField::Denom(v) => **v = decode(bytes)?,
            ParamField::Decimal(v) => **v = decode(bytes)?,
        }
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ParamsError> {
    bincode::deserialize(bytes).map_err(|e| ParamsError::Codec(e.to_string()))
}

/// One (key, accessor) binding of a parameter set.
#[derive(Debug)]
pub struct ParamPair<'a> {
    pub key: &'static str,
    pub field: ParamField<'a>,
}

impl Params {
    /// Bindings for every parameter, in the fixed store order.
    ///
    /// INVARIANT: exactly seven entries, same order on every call. External
    /// stores zip this sequence against persisted keys positionally as well
    /// as by key lookup.
    pub fn param_pairs(&mut self) -> [ParamPair<'_>; 7] {
        [
            ParamPair {
                key: KEY_UNBONDING_TIME,
                field: ParamField::Duration(&mut self.unbonding_time),
            },
            ParamPair {
                key: KEY_MAX_VALIDATORS,
                field: ParamField::U16(&mut self.max_validators),
            },
            ParamPair {
                key: KEY_BOND_DENOM,
                field: ParamField::Denom(&mut self.bond_denom),
            },
            ParamPair {
                key: KEY_BLOCKS_PER_EPOCH,
                field: ParamField::U16(&mut self.epoch),
            },
            ParamPair {
                key: KEY_MAX_VALS_TO_VOTE,
                field: ParamField::U16(&mut self.max_vals_to_vote),
            },
            ParamPair {
                key: KEY_MIN_SELF_DELEGATION_LIMIT,
                field: ParamField::Decimal(&mut self.min_self_delegation_limit),
            },
            ParamPair {
                key: KEY_MIN_DELEGATION,
                field: ParamField::Decimal(&mut self.min_delegation),
            },
        ]
    }

    /// Key list alone, in the same order as `param_pairs`.
    pub fn param_keys() -> [&'static str; 7] {
        [
            KEY_UNBONDING_TIME,
            KEY_MAX_VALIDATORS,
            KEY_BOND_DENOM,
            KEY_BLOCKS_PER_EPOCH,
            KEY_MAX_VALS_TO_VOTE,
            KEY_MIN_SELF_DELEGATION_LIMIT,
            KEY_MIN_DELEGATION,
        ]
    }
}
