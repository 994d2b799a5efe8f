// Staking Params - governance-tunable staking parameters
// Principle: typed fields, stable keys, canonical-encoding equality

pub mod config;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::ParamDefaults;
pub use store::{ParamStore, StoreError};
pub use types::{ParamField, ParamPair, Params, ParamsError};
