use crate::cache::cache::impl_details::CacheImplDetails;
use crate::cache::cache::{Cache, DeltaType, Entry, KeyType, ValueType};
use crate::cache::config::CacheConfig;
use crate::cache::error::{CacheError, Result};
use crate::store::null_store::NullCache;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::sync::Arc;

/// (key prefix, key) so that namespaces never overlap, even when one
/// prefix is a prefix of another.
type StorageKey = (String, String);
type Storage = DashMap<StorageKey, Entry>;

/// In-memory backend used to exercise the contract where the null
/// backend cannot. Several stores may share one map under different
/// prefixes, clear only drops entries of the exact same prefix.
/// Expiration is recorded but never enforced.
pub struct MockStore {
    memory: Arc<Storage>,
    config: CacheConfig,
}

impl MockStore {
    pub fn new(config: CacheConfig) -> MockStore {
        MockStore::shared(Arc::new(DashMap::new()), config)
    }

    pub fn shared(memory: Arc<Storage>, config: CacheConfig) -> MockStore {
        MockStore { memory, config }
    }

    pub fn memory(&self) -> Arc<Storage> {
        self.memory.clone()
    }

    pub fn expiration_of(&self, key: &KeyType) -> Option<u32> {
        let key = self.namespaced(key).ok()?;
        self.memory.get(&key).map(|entry| entry.expire)
    }

    fn namespaced(&self, key: &KeyType) -> Result<StorageKey> {
        self.validate_key(key)?;
        Ok((self.config.key_prefix.clone(), key.to_string()))
    }
}

impl CacheImplDetails for MockStore {}

impl Cache for MockStore {
    fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn check_get(&self, key: &KeyType) -> Result<ValueType> {
        let key = self.namespaced(key)?;
        self.memory
            .get(&key)
            .map(|entry| entry.value.clone())
            .ok_or(CacheError::NotFound)
    }

    fn check_set_expire(
        &self,
        key: &KeyType,
        value: ValueType,
        expire: u32,
    ) -> Result<ValueType> {
        let key = self.namespaced(key)?;
        self.memory.insert(key, Entry::new(value.clone(), expire));
        Ok(value)
    }

    fn check_add(&self, key: &KeyType, value: ValueType) -> Result<()> {
        let key = self.namespaced(key)?;
        match self.memory.entry(key) {
            MapEntry::Occupied(_) => Err(CacheError::KeyExists),
            MapEntry::Vacant(entry) => {
                entry.insert(Entry::new(value, self.config.expiration(None)));
                Ok(())
            }
        }
    }

    fn check_delete(&self, key: &KeyType) -> Result<()> {
        let key = self.namespaced(key)?;
        match self.memory.remove(&key) {
            Some(_) => Ok(()),
            None => Err(CacheError::NotFound),
        }
    }

    fn has(&self, key: &KeyType) -> bool {
        match self.namespaced(key) {
            Ok(key) => self.memory.contains_key(&key),
            Err(_) => false,
        }
    }

    fn check_clear(&self) -> Result<()> {
        let prefix = &self.config.key_prefix;
        self.memory
            .retain(|(key_prefix, _key), _entry| key_prefix != prefix);
        Ok(())
    }

    fn incr_decr(&self, key: &KeyType, delta: DeltaType, increment: bool) -> Result<DeltaType> {
        let key = self.namespaced(key)?;
        match self.memory.entry(key) {
            MapEntry::Occupied(mut entry) => {
                let record = entry.get_mut();
                let new_value = self.apply_delta(&record.value, delta, increment)?;
                record.value = new_value.to_string();
                Ok(new_value)
            }
            MapEntry::Vacant(_) => Err(CacheError::NotFound),
        }
    }
}

pub fn create_mock_store() -> Arc<dyn Cache + Send + Sync> {
    Arc::new(MockStore::new(CacheConfig::default()))
}

pub fn create_null_store() -> Arc<dyn Cache + Send + Sync> {
    Arc::new(NullCache::new())
}
