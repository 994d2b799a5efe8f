// Staking parameter types
// Principle: construction never validates; validation is an explicit step

pub mod binding;
pub mod params;

pub use binding::{
    ParamField, ParamPair, KEY_BLOCKS_PER_EPOCH, KEY_BOND_DENOM, KEY_MAX_VALIDATORS,
    KEY_MAX_VALS_TO_VOTE, KEY_MIN_DELEGATION, KEY_MIN_SELF_DELEGATION_LIMIT, KEY_UNBONDING_TIME,
};
pub use params::{Params, ParamsError};
