mod common;

use common::{LEDGER_ACCOUNT, base_state, wallet_with};
use serde_json::json;
use wallet_selectors::notifications::{LEDGER_LIVE_NOTIFICATION_ID, MAINNET_NOTIFICATION_ID};
use wallet_selectors::{Environment, allowed_notification_ids, sorted_notifications_to_show};

fn ids(state: &wallet_model::AppState, env: &Environment) -> Vec<u32> {
    sorted_notifications_to_show(state, env)
        .into_iter()
        .map(|notification| notification.id)
        .collect()
}

#[test]
fn retired_ids_are_never_allowed() {
    let allowed = allowed_notification_ids(&base_state(), &Environment::default());

    for id in 1..LEDGER_LIVE_NOTIFICATION_ID {
        assert_eq!(allowed.get(&id), Some(&false), "id {id}");
    }
    assert_eq!(allowed.get(&MAINNET_NOTIFICATION_ID), Some(&true));
}

#[test]
fn only_allowed_unseen_notifications_are_shown() {
    let state = wallet_with(json!({
        "notifications": {
            "9": { "id": 9, "isShown": false, "date": "2021-01-02" },
            "1": { "id": 1, "isShown": false, "date": "2021-01-01" }
        }
    }));

    assert_eq!(ids(&state, &Environment::default()), vec![9]);
}

#[test]
fn shown_notifications_are_hidden() {
    let state = wallet_with(json!({
        "notifications": {
            "9": { "id": 9, "isShown": true, "date": "2021-01-02" }
        }
    }));

    assert!(ids(&state, &Environment::default()).is_empty());
}

#[test]
fn mainnet_notification_hidden_off_mainnet() {
    let state = wallet_with(json!({
        "provider": { "type": "goerli", "chainId": "0x5" },
        "network": "5",
        "notifications": {
            "9": { "id": 9, "isShown": false, "date": "2021-01-02" }
        }
    }));

    assert!(ids(&state, &Environment::default()).is_empty());
}

fn ledger_live_state() -> wallet_model::AppState {
    wallet_with(json!({
        "selectedAddress": LEDGER_ACCOUNT,
        "ledgerTransportType": "ledgerLive",
        "notifications": {
            "8": { "id": 8, "isShown": false, "date": "2021-11-01" },
            "9": { "id": 9, "isShown": false, "date": "2021-12-01" }
        }
    }))
}

#[test]
fn ledger_live_notification_needs_webhid() {
    let state = ledger_live_state();
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };

    assert_eq!(ids(&state, &with_hid), vec![9, 8]);
    assert_eq!(ids(&state, &Environment::default()), vec![9]);
}

#[test]
fn ledger_live_notification_needs_ledger_keyring() {
    let mut state = ledger_live_state();
    state.wallet.selected_address = Some(common::ACCOUNT_1.to_string());
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };

    assert_eq!(ids(&state, &with_hid), vec![9]);
}

#[test]
fn ledger_live_notification_needs_live_transport() {
    let mut state = ledger_live_state();
    state.wallet.ledger_transport_type = Some(wallet_model::LedgerTransportType::WebHid);
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };

    assert_eq!(ids(&state, &with_hid), vec![9]);
}

#[test]
fn undated_notifications_sort_last() {
    let state = wallet_with(json!({
        "selectedAddress": LEDGER_ACCOUNT,
        "ledgerTransportType": "ledgerLive",
        "notifications": {
            "8": { "id": 8, "isShown": false, "date": "2021-11-01" },
            "9": { "id": 9, "isShown": false, "date": "not a date" }
        }
    }));
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };

    assert_eq!(ids(&state, &with_hid), vec![8, 9]);
}

#[test]
fn empty_notifications() {
    assert!(ids(&base_state(), &Environment::default()).is_empty());
}

fn ledger_live_dated(date_8: &str, date_9: &str) -> wallet_model::AppState {
    wallet_with(json!({
        "selectedAddress": LEDGER_ACCOUNT,
        "ledgerTransportType": "ledgerLive",
        "notifications": {
            "9": { "id": 9, "isShown": false, "date": date_9 },
            "8": { "id": 8, "isShown": false, "date": date_8 }
        }
    }))
}

#[test]
fn same_date_keeps_stored_order() {
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };

    let tied = ledger_live_dated("2021-11-01", "2021-11-01");
    assert_eq!(ids(&tied, &with_hid), vec![8, 9]);

    let nine_newer = ledger_live_dated("2021-11-01", "2021-11-02");
    assert_eq!(ids(&nine_newer, &with_hid), vec![9, 8]);

    let eight_newer = ledger_live_dated("2021-11-02", "2021-11-01");
    assert_eq!(ids(&eight_newer, &with_hid), vec![8, 9]);
}

#[test]
fn same_instant_in_different_formats_is_a_tie() {
    let with_hid = Environment {
        supports_webhid: true,
        ..Environment::default()
    };
    let state = ledger_live_dated("2021-11-01T00:00:00Z", "2021-11-01");

    assert_eq!(ids(&state, &with_hid), vec![8, 9]);
}
