//! Root state tree.
//!
//! The tree is owned and mutated by the background controllers; this crate
//! only describes its shape. Collections that the memoized accessors depend
//! on are held behind [`Arc`] so callers can tell whether they were replaced
//! between two snapshots without comparing contents.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::account::{Account, AddressBookEntry, Identity, Keyring};
use crate::approval::{PendingApproval, SuggestedAsset, TransactionMeta};
use crate::error::Result;
use crate::hardware::{LedgerTransportType, TransportStatus, WebHidConnectedStatus};
use crate::network::{NetworkDetails, Provider, RpcEntry};
use crate::notification::Notification;
use crate::preferences::{AdvancedGasFee, FeatureFlags, Preferences};
use crate::subject::{MethodData, SubjectMetadata};
use crate::token::{Token, TokenListEntry};
use crate::ChainId;

/// Address (as stored by the controllers) to value.
pub type AddressMap<T> = BTreeMap<String, T>;

/// Cached balances keyed by chain id, or by deprecated network id for
/// snapshots written before chain ids were used.
pub type CachedBalances = BTreeMap<String, AddressMap<String>>;

/// Top-level application state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Controller-owned wallet state.
    #[serde(alias = "metamask")]
    pub wallet: WalletState,
    /// Transient UI flags.
    #[serde(default, alias = "appState")]
    pub ui: UiState,
    /// The focused browser tab.
    #[serde(default)]
    pub active_tab: ActiveTab,
}

impl AppState {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load a snapshot previously exported as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// State published by the wallet's background controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub provider: Provider,
    /// Deprecated numeric network id, kept for cached-balance fallback.
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub selected_address: Option<String>,

    // Accounts
    #[serde(default)]
    pub accounts: Arc<AddressMap<Account>>,
    #[serde(default)]
    pub identities: Arc<AddressMap<Identity>>,
    #[serde(default)]
    pub keyrings: Arc<Vec<Keyring>>,
    #[serde(default)]
    pub cached_balances: Arc<CachedBalances>,
    #[serde(default)]
    pub address_book: BTreeMap<ChainId, AddressMap<AddressBookEntry>>,

    // Tokens and rates
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub token_list: BTreeMap<String, TokenListEntry>,
    #[serde(default)]
    pub all_detected_tokens: BTreeMap<ChainId, AddressMap<Vec<Token>>>,
    #[serde(default)]
    pub current_currency: String,
    #[serde(default)]
    pub native_currency: String,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    #[serde(default)]
    pub usd_conversion_rate: Option<f64>,
    #[serde(default)]
    pub contract_exchange_rates: BTreeMap<String, f64>,

    // Settings
    #[serde(default)]
    pub feature_flags: FeatureFlags,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub use_nonce_field: bool,
    /// String or number, depending on which screen last wrote it.
    #[serde(default)]
    pub custom_nonce_value: serde_json::Value,
    #[serde(default)]
    pub next_nonce: Option<u64>,
    #[serde(default)]
    pub use_token_detection: bool,
    #[serde(default)]
    pub advanced_gas_fee: Option<AdvancedGasFee>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub ipfs_gateway: String,
    #[serde(default)]
    pub infura_blocked: Option<bool>,

    // Pending requests
    #[serde(default)]
    pub unapproved_txs: BTreeMap<String, TransactionMeta>,
    #[serde(default)]
    pub unapproved_msg_count: u32,
    #[serde(default)]
    pub unapproved_personal_msg_count: u32,
    #[serde(default)]
    pub unapproved_decrypt_msg_count: u32,
    #[serde(default)]
    pub unapproved_encryption_public_key_msg_count: u32,
    #[serde(default)]
    pub unapproved_typed_messages_count: u32,
    #[serde(default)]
    pub pending_approvals: BTreeMap<String, PendingApproval>,
    #[serde(default)]
    pub pending_approval_count: u32,
    #[serde(default)]
    pub suggested_assets: Vec<SuggestedAsset>,

    // Notifications and reminders
    #[serde(default)]
    pub notifications: BTreeMap<u32, Notification>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub recovery_phrase_reminder_last_shown: i64,
    #[serde(default)]
    pub recovery_phrase_reminder_has_been_shown: bool,
    #[serde(default)]
    pub outdated_browser_warning_last_shown: Option<i64>,

    // Networks
    #[serde(default)]
    pub frequent_rpc_list_detail: Vec<RpcEntry>,
    #[serde(default)]
    pub network_details: NetworkDetails,
    #[serde(default)]
    pub used_networks: BTreeMap<ChainId, bool>,

    // Sites
    #[serde(default)]
    pub known_method_data: BTreeMap<String, MethodData>,
    #[serde(default)]
    pub web3_shim_usage_origins: BTreeMap<String, u8>,
    #[serde(default)]
    pub subject_metadata: BTreeMap<String, SubjectMetadata>,

    // Hardware wallets
    #[serde(default)]
    pub ledger_transport_type: Option<LedgerTransportType>,
}

/// Transient UI flags owned by the popup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    pub gas_is_loading: bool,
    pub show_whats_new_popup: bool,
    pub new_network_added: Option<String>,
    pub networks_tab_selected_rpc_url: Option<String>,
    pub ledger_web_hid_connected_status: Option<WebHidConnectedStatus>,
    pub ledger_transport_status: Option<TransportStatus>,
    #[serde(rename = "onboardedInThisUISession")]
    pub onboarded_in_this_ui_session: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveTab {
    pub origin: Option<String>,
}
