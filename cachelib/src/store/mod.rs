use clap::ValueEnum;
use serde_derive::{Deserialize, Serialize};

pub mod builder;
pub mod null_store;

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize, Debug, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum StoreEngine {
    /// store that never keeps anything
    #[default]
    Null,
}

impl StoreEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreEngine::Null => "Null backend",
        }
    }
}
