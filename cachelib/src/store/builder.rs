use super::null_store::NullCache;
use super::StoreEngine;
use crate::cache::cache::Cache;
use crate::cache::config::CacheConfig;
use clap::Args;
use serde_derive::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Args, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CacheStoreConfig {
    #[arg(long = "cache-engine", value_enum, default_value_t = StoreEngine::Null)]
    /// cache backend to use
    pub engine: StoreEngine,

    #[command(flatten)]
    #[serde(flatten)]
    pub cache: CacheConfig,
}

impl CacheStoreConfig {
    pub fn new(engine: StoreEngine, cache: CacheConfig) -> CacheStoreConfig {
        CacheStoreConfig { engine, cache }
    }
}

pub struct CacheStoreBuilder {}

impl CacheStoreBuilder {
    pub fn from_config(config: CacheStoreConfig) -> Arc<dyn Cache + Send + Sync> {
        info!("Cache backend: {}", config.engine.as_str());
        match config.engine {
            StoreEngine::Null => Arc::new(NullCache::with_config(config.cache)),
        }
    }
}
