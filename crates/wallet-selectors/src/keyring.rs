//! Keyring and hardware wallet accessors.

use serde::Serialize;
use wallet_model::{
    AppState, Keyring, LedgerTransportType, TransportStatus, WebHidConnectedStatus,
};

use crate::accounts::selected_identity;
use crate::address::{add_hex_prefix, is_equal_case_insensitive, strip_hex_prefix};
use crate::constants::{
    HARDWARE_KEYRING_MARKER, KEYRING_TYPE_IMPORTED, KEYRING_TYPE_LATTICE, KEYRING_TYPE_LEDGER,
    KEYRING_TYPE_QR, KEYRING_TYPE_TREZOR,
};

/// Coarse classification of the selected account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Hardware,
    Imported,
    Default,
}

impl AccountType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Imported => "imported",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn keyrings(state: &AppState) -> &[Keyring] {
    &state.wallet.keyrings
}

/// Keyring holding the selected account.
///
/// Keyrings may list addresses with or without the `0x` prefix, so both
/// spellings are tried.
pub fn current_keyring(state: &AppState) -> Option<&Keyring> {
    let identity = selected_identity(state)?;
    let simple_address = strip_hex_prefix(&identity.address).to_lowercase();
    keyrings(state).iter().find(|keyring| {
        keyring
            .accounts
            .iter()
            .any(|account| *account == simple_address || *account == identity.address)
    })
}

pub fn is_hardware_wallet(state: &AppState) -> bool {
    current_keyring(state).is_some_and(|keyring| keyring.kind.contains(HARDWARE_KEYRING_MARKER))
}

pub fn hardware_wallet_type(state: &AppState) -> Option<&str> {
    current_keyring(state)
        .filter(|keyring| keyring.kind.contains(HARDWARE_KEYRING_MARKER))
        .map(|keyring| keyring.kind.as_str())
}

pub fn account_type(state: &AppState) -> AccountType {
    match current_keyring(state).map(|keyring| keyring.kind.as_str()) {
        Some(KEYRING_TYPE_TREZOR | KEYRING_TYPE_LEDGER | KEYRING_TYPE_LATTICE | KEYRING_TYPE_QR) => {
            AccountType::Hardware
        }
        Some(KEYRING_TYPE_IMPORTED) => AccountType::Imported,
        _ => AccountType::Default,
    }
}

/// First keyring listing `address`, compared case-insensitively with and
/// without the hex prefix.
pub fn find_keyring_for_address<'a>(state: &'a AppState, address: &str) -> Option<&'a Keyring> {
    let prefixed = add_hex_prefix(address);
    let bare = strip_hex_prefix(address);
    keyrings(state).iter().find(|keyring| {
        keyring.accounts.iter().any(|account| {
            is_equal_case_insensitive(account, &prefixed) || is_equal_case_insensitive(account, bare)
        })
    })
}

pub fn is_address_ledger(state: &AppState, address: &str) -> bool {
    find_keyring_for_address(state, address).is_some_and(|keyring| keyring.kind == KEYRING_TYPE_LEDGER)
}

pub fn ledger_transport_type(state: &AppState) -> Option<LedgerTransportType> {
    state.wallet.ledger_transport_type
}

pub fn ledger_web_hid_connected_status(state: &AppState) -> Option<WebHidConnectedStatus> {
    state.ui.ledger_web_hid_connected_status
}

pub fn ledger_transport_status(state: &AppState) -> Option<TransportStatus> {
    state.ui.ledger_transport_status
}

/// A Ledger account on the WebHID transport needs the user to (re)connect the
/// device before signing, unless the device is connected and its transport
/// has been verified.
pub fn does_address_require_ledger_hid_connection(state: &AppState, address: &str) -> bool {
    let uses_webhid = ledger_transport_type(state) == Some(LedgerTransportType::WebHid);
    let hid_not_connected =
        ledger_web_hid_connected_status(state) != Some(WebHidConnectedStatus::Connected);
    let transport_not_verified = ledger_transport_status(state) != Some(TransportStatus::Verified);
    is_address_ledger(state, address) && uses_webhid && (hid_not_connected || transport_not_verified)
}
