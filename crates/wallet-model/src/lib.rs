//! State tree definitions for the wallet extension.
//!
//! The types mirror the JSON snapshot the extension's background process
//! publishes to its UI. They are read-only from the accessor layer's point of
//! view.

pub mod account;
pub mod approval;
pub mod error;
pub mod hardware;
pub mod ids;
pub mod network;
pub mod notification;
pub mod preferences;
pub mod state;
pub mod subject;
pub mod token;

pub use account::{Account, AccountWithBalance, AddressBookEntry, Identity, Keyring};
pub use approval::{PendingApproval, SuggestedAsset, TransactionMeta};
pub use error::{ModelError, Result};
pub use hardware::{LedgerTransportType, TransportStatus, WebHidConnectedStatus};
pub use ids::ChainId;
pub use network::{NETWORK_TYPE_RPC, NetworkDetails, Provider, RpcEntry, RpcPrefs};
pub use notification::Notification;
pub use preferences::{AdvancedGasFee, FeatureFlags, Preferences};
pub use state::{ActiveTab, AddressMap, AppState, CachedBalances, UiState, WalletState};
pub use subject::{MethodData, MethodParam, SubjectMetadata};
pub use token::{Token, TokenListEntry};
