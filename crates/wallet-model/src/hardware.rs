//! Hardware wallet transport state published by the keyring bridge.

use serde::{Deserialize, Serialize};

/// How the extension talks to a Ledger device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerTransportType {
    #[serde(rename = "ledgerLive")]
    Live,
    #[serde(rename = "webhid")]
    WebHid,
    #[serde(rename = "u2f")]
    U2f,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebHidConnectedStatus {
    Connected,
    NotConnected,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportStatus {
    None,
    Verified,
    DeviceOpenFailure,
    UnknownFailure,
}
