use super::config::CacheConfig;
use super::error::{CacheError, Result};
use std::collections::BTreeMap;

/// Cache key type
pub type KeyType = str;

/// Cache value associated with a key
pub type ValueType = String;

/// Increment/decrement operand and result
pub type DeltaType = u64;

/// Mapping used by the batch set operations, iterated in key order
pub type KeyValueMap = BTreeMap<String, ValueType>;

/// Value and expiration stored by a backend under a namespaced key
#[derive(Clone, Debug)]
pub struct Entry {
    pub value: ValueType,
    pub expire: u32,
}

impl Entry {
    pub fn new(value: ValueType, expire: u32) -> Entry {
        Entry { value, expire }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// Not a part of Cache public API
pub mod impl_details {

    use super::*;
    pub trait CacheImplDetails {
        /// Keys must be non-empty.
        fn validate_key(&self, key: &KeyType) -> Result<()> {
            if key.is_empty() {
                return Err(CacheError::InvalidArguments);
            }
            Ok(())
        }

        /// Parses a stored value as a u64 and adds or subtracts the delta.
        /// Increment wraps around at 64 bits, decrement stops at 0.
        fn apply_delta(
            &self,
            value: &str,
            delta: DeltaType,
            increment: bool,
        ) -> Result<DeltaType> {
            value
                .parse::<DeltaType>()
                .map_err(|_err| CacheError::ArithOnNonNumeric)
                .map(|value: DeltaType| {
                    if increment {
                        value.wrapping_add(delta)
                    } else {
                        value.saturating_sub(delta)
                    }
                })
        }
    }
}

/// Capability set every cache backend exposes.
///
/// Each operation has one required, `Result` returning primitive. A miss is
/// reported as `CacheError::NotFound`, anything else is a failure of the
/// backend. The plain forms (`get`, `set`, `add`, ...) are thin adapters over
/// the primitives which swallow the error and degrade to `""`, an empty
/// `Vec` or `false`, so call sites which do not care never fail loudly.
pub trait Cache: impl_details::CacheImplDetails {
    /// Configuration the backend was created with
    fn config(&self) -> &CacheConfig;

    /// Returns the value associated with a key.
    ///
    /// - `Err(NotFound)` if the key is absent or expired
    fn check_get(&self, key: &KeyType) -> Result<ValueType>;

    /// Stores a value with an explicit expiration in seconds, overwriting
    /// any existing value. Echoes the stored value on success.
    fn check_set_expire(
        &self,
        key: &KeyType,
        value: ValueType,
        expire: u32,
    ) -> Result<ValueType>;

    /// Stores a value only if the key is absent.
    ///
    /// - `Err(KeyExists)` if the key is already stored, the value is left untouched
    fn check_add(&self, key: &KeyType, value: ValueType) -> Result<()>;

    /// Removes a value.
    ///
    /// - `Err(NotFound)` if there was nothing to remove
    fn check_delete(&self, key: &KeyType) -> Result<()>;

    /// Checks if a key exists without loading its value.
    fn has(&self, key: &KeyType) -> bool;

    /// Removes every entry within this backend's namespace.
    fn check_clear(&self) -> Result<()>;

    /// Performs an arithmetic operation on a numeric value stored in the cache.
    /// If `increment` is true adds `delta`, otherwise subtracts it.
    /// Returns the new value after the operation.
    ///
    /// - `Err(NotFound)` if the key is absent
    /// - `Err(ArithOnNonNumeric)` if the value is not a valid u64
    fn incr_decr(&self, key: &KeyType, delta: DeltaType, increment: bool) -> Result<DeltaType>;

    fn get(&self, key: &KeyType) -> ValueType {
        self.check_get(key).unwrap_or_default()
    }

    /// Like `check_get` but a miss is `Ok(None)`, which keeps an empty value
    /// apart from an absent one.
    fn try_get(&self, key: &KeyType) -> Result<Option<ValueType>> {
        match self.check_get(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_miss() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Values aligned with `keys`, `""` for every miss.
    fn get_many(&self, keys: &[&KeyType]) -> Vec<ValueType> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    /// Fails as a whole as soon as one key misses or fails.
    fn check_get_many(&self, keys: &[&KeyType]) -> Result<Vec<ValueType>> {
        keys.iter().map(|key| self.check_get(key)).collect()
    }

    fn set(&self, key: &KeyType, value: ValueType) -> ValueType {
        self.check_set(key, value).unwrap_or_default()
    }

    /// Stores a value using the configured default expiration.
    fn check_set(&self, key: &KeyType, value: ValueType) -> Result<ValueType> {
        let expire = self.config().expiration(None);
        self.check_set_expire(key, value, expire)
    }

    /// Per key results in key order, `""` for every failed write.
    fn set_many(&self, entries: &KeyValueMap) -> Vec<ValueType> {
        entries
            .iter()
            .map(|(key, value)| self.set(key, value.clone()))
            .collect()
    }

    fn check_set_many(&self, entries: &KeyValueMap) -> Result<Vec<ValueType>> {
        entries
            .iter()
            .map(|(key, value)| self.check_set(key, value.clone()))
            .collect()
    }

    /// True if the key was absent and is now set.
    fn add(&self, key: &KeyType, value: ValueType) -> bool {
        self.check_add(key, value).is_ok()
    }

    /// True if the key is gone afterwards, false only on backend failure.
    fn delete(&self, key: &KeyType) -> bool {
        match self.check_delete(key) {
            Ok(()) => true,
            Err(err) => err.is_miss(),
        }
    }

    fn clear(&self) -> bool {
        self.check_clear().is_ok()
    }

    fn check_inc(&self, key: &KeyType, delta: DeltaType) -> Result<DeltaType> {
        self.incr_decr(key, delta, true)
    }

    fn check_dec(&self, key: &KeyType, delta: DeltaType) -> Result<DeltaType> {
        self.incr_decr(key, delta, false)
    }

    /// New value as a decimal string, `""` on failure.
    fn inc(&self, key: &KeyType, delta: DeltaType) -> ValueType {
        self.check_inc(key, delta)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    fn dec(&self, key: &KeyType, delta: DeltaType) -> ValueType {
        self.check_dec(key, delta)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }
}
