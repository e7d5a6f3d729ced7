//! Tests for wallet-model snapshot parsing.

use serde_json::json;
use wallet_model::{
    AppState, LedgerTransportType, ModelError, TransportStatus, WebHidConnectedStatus,
};

fn minimal_snapshot() -> serde_json::Value {
    json!({
        "wallet": {
            "provider": { "type": "mainnet", "chainId": "0x1" }
        }
    })
}

#[test]
fn minimal_snapshot_uses_defaults() {
    let state = AppState::from_value(minimal_snapshot()).expect("parse snapshot");

    assert_eq!(state.wallet.provider.chain_id, "0x1");
    assert!(state.wallet.selected_address.is_none());
    assert!(state.wallet.accounts.is_empty());
    assert!(state.wallet.keyrings.is_empty());
    assert!(state.wallet.notifications.is_empty());
    assert!(!state.ui.gas_is_loading);
    assert!(state.active_tab.origin.is_none());
}

#[test]
fn extension_key_names_are_accepted() {
    let snapshot = json!({
        "metamask": {
            "provider": { "type": "rpc", "chainId": "0x89", "rpcUrl": "https://polygon-rpc.com" },
            "network": "137",
            "selectedAddress": "0xabc",
            "identities": {
                "0xabc": { "address": "0xabc", "name": "Account 1" }
            },
            "accounts": {
                "0xabc": { "address": "0xabc", "balance": "0x0" }
            },
            "keyrings": [
                { "type": "HD Key Tree", "accounts": ["0xabc"] }
            ],
            "ledgerTransportType": "ledgerLive",
            "unapprovedEncryptionPublicKeyMsgCount": 2
        },
        "appState": {
            "gasIsLoading": true,
            "ledgerWebHidConnectedStatus": "notConnected",
            "ledgerTransportStatus": "DEVICE_OPEN_FAILURE",
            "onboardedInThisUISession": true
        },
        "activeTab": { "origin": "https://app.uniswap.org" }
    });

    let state = AppState::from_value(snapshot).expect("parse snapshot");

    assert!(state.wallet.provider.is_rpc());
    assert_eq!(state.wallet.keyrings[0].kind, "HD Key Tree");
    assert_eq!(
        state.wallet.ledger_transport_type,
        Some(LedgerTransportType::Live)
    );
    assert_eq!(state.wallet.unapproved_encryption_public_key_msg_count, 2);
    assert!(state.ui.gas_is_loading);
    assert!(state.ui.onboarded_in_this_ui_session);
    assert_eq!(
        state.ui.ledger_web_hid_connected_status,
        Some(WebHidConnectedStatus::NotConnected)
    );
    assert_eq!(
        state.ui.ledger_transport_status,
        Some(TransportStatus::DeviceOpenFailure)
    );
    assert_eq!(
        state.active_tab.origin.as_deref(),
        Some("https://app.uniswap.org")
    );
}

#[test]
fn notifications_are_keyed_numerically() {
    let snapshot = json!({
        "wallet": {
            "provider": { "type": "mainnet", "chainId": "0x1" },
            "notifications": {
                "10": { "id": 10, "date": "2022-01-01", "isShown": false },
                "2": { "id": 2, "date": "2021-01-01", "isShown": true },
                "9": { "id": 9, "date": "2021-06-01" }
            }
        }
    });

    let state = AppState::from_value(snapshot).expect("parse snapshot");
    let ids: Vec<u32> = state.wallet.notifications.keys().copied().collect();

    assert_eq!(ids, vec![2, 9, 10]);
    assert!(!state.wallet.notifications[&9].is_shown);
}

#[test]
fn chain_keyed_maps_accept_str_lookups() {
    let snapshot = json!({
        "wallet": {
            "provider": { "type": "goerli", "chainId": "0x5" },
            "addressBook": {
                "0x5": {
                    "0xAbC": { "address": "0xAbC", "name": "Friend", "chainId": "0x5" }
                }
            },
            "networkDetails": { "EIPS": { "1559": true } }
        }
    });

    let state = AppState::from_value(snapshot).expect("parse snapshot");

    assert!(state.wallet.address_book.get("0x5").is_some());
    assert!(state.wallet.address_book.get("0x1").is_none());
    assert!(state.wallet.network_details.supports_eip(1559));
    assert!(!state.wallet.network_details.supports_eip(2930));
}

#[test]
fn missing_provider_is_rejected() {
    let result = AppState::from_value(json!({ "wallet": {} }));
    assert!(matches!(result, Err(ModelError::Json(_))));
}

#[test]
fn snapshot_round_trips_through_json() {
    let state = AppState::from_value(minimal_snapshot()).expect("parse snapshot");
    let text = serde_json::to_string(&state).expect("serialize snapshot");
    let again = AppState::from_json_str(&text).expect("reparse snapshot");
    assert_eq!(again.wallet.provider, state.wallet.provider);
}
