//! Network provider descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ChainId;

/// Provider type for user-added networks.
pub const NETWORK_TYPE_RPC: &str = "rpc";

/// The active network provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Built-in network name (`mainnet`, `goerli`, ...) or `rpc`.
    #[serde(rename = "type")]
    pub kind: String,
    pub chain_id: ChainId,
    #[serde(default)]
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
}

impl Provider {
    pub fn is_rpc(&self) -> bool {
        self.kind == NETWORK_TYPE_RPC
    }
}

/// Per-network preferences attached to a saved RPC endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcPrefs {
    #[serde(default)]
    pub block_explorer_url: Option<String>,
}

/// A user-saved RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEntry {
    pub rpc_url: String,
    #[serde(default)]
    pub chain_id: Option<ChainId>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub rpc_prefs: Option<RpcPrefs>,
}

/// Capabilities detected for the current network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDetails {
    /// EIP number (as a string key) to support flag.
    #[serde(rename = "EIPS", default)]
    pub eips: BTreeMap<String, bool>,
}

impl NetworkDetails {
    pub fn supports_eip(&self, eip: u32) -> bool {
        self.eips.get(&eip.to_string()).copied().unwrap_or(false)
    }
}
