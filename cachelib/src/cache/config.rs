use clap::Args;
use serde_derive::{Deserialize, Serialize};

/// Expiration in seconds applied when a call does not supply its own.
pub const DEFAULT_EXPIRE: u32 = 300;

/// Base configuration shared by every backend.
///
/// Owned by the backend instance and never mutated after construction;
/// the `with_*` helpers consume the value and return a new one.
#[derive(Args, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    #[arg(long = "cache-key-prefix", value_name = "PREFIX", default_value = "")]
    /// prefix prepended to every key stored by the cache
    pub key_prefix: String,

    #[arg(long = "cache-expire", value_name = "SECONDS", default_value_t = DEFAULT_EXPIRE)]
    /// default expiration of cache entries in seconds
    pub expire: u32,
}

impl CacheConfig {
    pub fn new(key_prefix: impl Into<String>, expire: u32) -> CacheConfig {
        CacheConfig {
            key_prefix: key_prefix.into(),
            expire,
        }
    }

    pub fn with_key_prefix(self, key_prefix: impl Into<String>) -> CacheConfig {
        CacheConfig {
            key_prefix: key_prefix.into(),
            ..self
        }
    }

    pub fn with_expire(self, expire: u32) -> CacheConfig {
        CacheConfig { expire, ..self }
    }

    /// Key as seen by the underlying store.
    pub fn namespaced_key(&self, key: &str) -> String {
        let mut namespaced = String::with_capacity(self.key_prefix.len() + key.len());
        namespaced.push_str(&self.key_prefix);
        namespaced.push_str(key);
        namespaced
    }

    pub fn expiration(&self, per_call: Option<u32>) -> u32 {
        per_call.unwrap_or(self.expire)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig::new(String::new(), DEFAULT_EXPIRE)
    }
}
