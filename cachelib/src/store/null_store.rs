use crate::cache::cache::{impl_details, Cache, DeltaType, KeyType, KeyValueMap, ValueType};
use crate::cache::config::CacheConfig;
use crate::cache::error::{CacheError, Result};

/// Cache that doesn't cache.
///
/// Every read misses, every write is discarded, delete and clear succeed
/// because there is never anything to remove. Checked operations report
/// `CacheError::Unavailable`. Useful in unit tests and wherever caching is
/// switched off. Holds no state besides its configuration, so it can be
/// shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct NullCache {
    config: CacheConfig,
}

impl NullCache {
    pub fn new() -> NullCache {
        NullCache::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> NullCache {
        debug!(
            "Creating null cache, prefix: {:?}, expire: {}",
            config.key_prefix, config.expire
        );
        NullCache { config }
    }

    fn trace_call(&self, operation: &str, key: &KeyType) {
        trace!(
            "Null cache {}: {}",
            operation,
            self.config.namespaced_key(key)
        );
    }
}

impl impl_details::CacheImplDetails for NullCache {}

impl Cache for NullCache {
    fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn check_get(&self, key: &KeyType) -> Result<ValueType> {
        self.trace_call("get", key);
        Err(CacheError::Unavailable)
    }

    fn check_set_expire(
        &self,
        key: &KeyType,
        _value: ValueType,
        _expire: u32,
    ) -> Result<ValueType> {
        self.trace_call("set", key);
        Err(CacheError::Unavailable)
    }

    fn check_add(&self, key: &KeyType, _value: ValueType) -> Result<()> {
        self.trace_call("add", key);
        Err(CacheError::Unavailable)
    }

    fn check_delete(&self, key: &KeyType) -> Result<()> {
        self.trace_call("delete", key);
        Ok(())
    }

    fn has(&self, key: &KeyType) -> bool {
        self.trace_call("has", key);
        false
    }

    fn check_clear(&self) -> Result<()> {
        trace!("Null cache clear: {:?}", self.config.key_prefix);
        Ok(())
    }

    fn incr_decr(&self, key: &KeyType, _delta: DeltaType, increment: bool) -> Result<DeltaType> {
        self.trace_call(if increment { "incr" } else { "decr" }, key);
        Err(CacheError::Unavailable)
    }

    fn get_many(&self, keys: &[&KeyType]) -> Vec<ValueType> {
        trace!("Null cache get_many: {} keys", keys.len());
        Vec::new()
    }

    fn check_get_many(&self, keys: &[&KeyType]) -> Result<Vec<ValueType>> {
        trace!("Null cache check_get_many: {} keys", keys.len());
        Err(CacheError::Unavailable)
    }

    fn set_many(&self, entries: &KeyValueMap) -> Vec<ValueType> {
        trace!("Null cache set_many: {} entries", entries.len());
        Vec::new()
    }

    fn check_set_many(&self, entries: &KeyValueMap) -> Result<Vec<ValueType>> {
        trace!("Null cache check_set_many: {} entries", entries.len());
        Err(CacheError::Unavailable)
    }
}
