//! Requests waiting on user confirmation.

use serde::{Deserialize, Serialize};

use crate::ChainId;

/// An unapproved transaction, as tracked by the transaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    pub id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub chain_id: Option<ChainId>,
    #[serde(default)]
    pub time: Option<u64>,
    #[serde(default)]
    pub tx_params: serde_json::Value,
}

/// A generic approval request raised by a dapp or snap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApproval {
    pub id: String,
    pub origin: String,
    /// RPC method that raised the request, e.g. `wallet_addEthereumChain`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub time: Option<u64>,
    #[serde(default)]
    pub request_data: serde_json::Value,
}

/// A token a site asked the user to add (`wallet_watchAsset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAsset {
    pub address: String,
    pub symbol: String,
    #[serde(default)]
    pub decimals: u8,
    #[serde(default)]
    pub image: Option<String>,
}
