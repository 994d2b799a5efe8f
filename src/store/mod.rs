// Parameter store - key-value surface over a bound parameter set
// One bincode value per key. All typed access goes through the binding
// table; the store itself never names a field.

use crate::types::{Params, ParamsError};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory parameter store.
///
/// BTreeMap keeps iteration deterministic across runs.
///
/// # Thread Safety
/// NOT thread-safe. A parameter set is owned by whichever store manages the
/// current state snapshot; concurrent updates must be serialized by the
/// caller (one state transition at a time).
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Raw read of the stored value for a key
    pub fn get_raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Raw write of the stored value for a key
    pub fn set_raw(&mut self, key: &str, bytes: Vec<u8>) {
        debug!("parameter {} overwritten ({} bytes)", key, bytes.len());
        self.entries.insert(key.to_string(), bytes);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Persist every field of the set, one value per key.
    pub fn save_params(&mut self, params: &mut Params) -> Result<(), StoreError> {
        for pair in params.param_pairs() {
            let bytes = pair.field.encode().map_err(|source| StoreError::Codec {
                key: pair.key.to_string(),
                source,
            })?;
            self.entries.insert(pair.key.to_string(), bytes);
        }
        debug!("parameter set saved ({} keys)", self.entries.len());
        Ok(())
    }

    /// Overwrite every field of the set in place from the stored values.
    ///
    /// Every key must be present; a missing key means the store was never
    /// seeded with a full set.
    pub fn load_params(&self, params: &mut Params) -> Result<(), StoreError> {
        for mut pair in params.param_pairs() {
            let bytes = self
                .entries
                .get(pair.key)
                .ok_or_else(|| StoreError::UnknownKey(pair.key.to_string()))?;
            pair.field
                .decode_from(bytes)
                .map_err(|source| StoreError::Codec {
                    key: pair.key.to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Parameter store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("unknown parameter key: {0}")]
    UnknownKey(String),

    #[error("stored value for {key} cannot be decoded: {source}")]
    Codec { key: String, source: ParamsError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParamDefaults;
    use crate::types::{KEY_MAX_VALIDATORS, KEY_UNBONDING_TIME};

    fn seeded_store() -> (ParamStore, Params) {
        let mut params = Params::default_set(&ParamDefaults::mainnet());
        let mut store = ParamStore::new();
        store.save_params(&mut params).unwrap();
        (store, params)
    }

    #[test]
    fn test_save_persists_one_value_per_key() {
        let (store, _) = seeded_store();
        for key in Params::param_keys() {
            assert!(store.contains(key));
        }
    }

    #[test]
    fn test_load_restores_saved_set() {
        let (store, params) = seeded_store();

        let other_defaults = ParamDefaults {
            max_validators: 1,
            bond_denom: "other".to_string(),
            ..ParamDefaults::mainnet()
        };
        let mut loaded = Params::default_set(&other_defaults);
        store.load_params(&mut loaded).unwrap();

        assert!(loaded.equals(&params));
    }

    #[test]
    fn test_single_key_overwrite_observed_after_load() {
        let (mut store, params) = seeded_store();

        store.set_raw(KEY_MAX_VALIDATORS, bincode::serialize(&7u16).unwrap());

        let mut loaded = params.clone();
        store.load_params(&mut loaded).unwrap();
        assert_eq!(loaded.max_validators, 7);
        assert!(!loaded.equals(&params));
    }

    #[test]
    fn test_load_from_empty_store_fails() {
        let store = ParamStore::new();
        let mut params = Params::default_set(&ParamDefaults::mainnet());
        let err = store.load_params(&mut params).unwrap_err();
        assert_eq!(err, StoreError::UnknownKey(KEY_UNBONDING_TIME.to_string()));
    }

    #[test]
    fn test_wrong_type_bytes_surface_as_codec_error() {
        let (mut store, params) = seeded_store();

        // two bytes cannot decode as a Duration
        store.set_raw(KEY_UNBONDING_TIME, bincode::serialize(&7u16).unwrap());

        let mut loaded = params.clone();
        let err = store.load_params(&mut loaded).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Codec { key, .. } if key == KEY_UNBONDING_TIME
        ));
    }

    #[test]
    fn test_raw_round_trip() {
        let mut store = ParamStore::new();
        assert!(store.get_raw("MaxValidators").is_none());

        store.set_raw("MaxValidators", vec![1, 2]);
        assert_eq!(store.get_raw("MaxValidators"), Some(&[1u8, 2u8][..]));
    }
}
