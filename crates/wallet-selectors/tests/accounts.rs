//! Tests for account accessors and their memoization.

mod common;

use std::sync::Arc;

use common::{ACCOUNT_1, ACCOUNT_2, LEDGER_ACCOUNT, base_state, wallet_with};
use serde_json::json;
use wallet_model::{Account, Identity};
use wallet_selectors::{
    Selectors, cached_balances, is_balance_cached, number_of_accounts,
    selected_account_cached_balance, selected_identity,
};

// ============================================================================
// Ordered / connected accounts
// ============================================================================

#[test]
fn empty_keyrings_give_no_ordered_accounts() {
    let state = wallet_with(json!({ "keyrings": [] }));
    let selectors = Selectors::new();

    assert!(selectors.accounts_ordered(&state).is_empty());
    assert!(selectors.accounts_connected(&state).is_empty());
}

#[test]
fn ordered_accounts_merge_identity_and_balance() {
    let state = base_state();
    let selectors = Selectors::new();

    let ordered = selectors.accounts_ordered(&state);

    assert_eq!(ordered.len(), 3);
    let first = &ordered[0];
    assert_eq!(first.address, ACCOUNT_1);
    assert_eq!(first.name, "Test Account");
    assert_eq!(first.balance.as_deref(), Some("0xde0b6b3a7640000"));
    assert_eq!(ordered[1].address, ACCOUNT_2);
    assert_eq!(ordered[2].address, LEDGER_ACCOUNT);
}

#[test]
fn ordered_accounts_skip_addresses_without_identity() {
    let state = wallet_with(json!({
        "keyrings": [
            { "type": "HD Key Tree", "accounts": ["0xdeadbeef", ACCOUNT_1] }
        ]
    }));
    let selectors = Selectors::new();

    let ordered = selectors.accounts_ordered(&state);

    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].address, ACCOUNT_1);
}

#[test]
fn duplicate_keyring_addresses_are_kept() {
    let state = wallet_with(json!({
        "keyrings": [
            { "type": "HD Key Tree", "accounts": [ACCOUNT_1] },
            { "type": "Simple Key Pair", "accounts": [ACCOUNT_1, ACCOUNT_2] }
        ]
    }));
    let selectors = Selectors::new();

    let connected = selectors.accounts_connected(&state);

    assert_eq!(
        connected.as_slice(),
        &[ACCOUNT_1.to_string(), ACCOUNT_1.to_string(), ACCOUNT_2.to_string()]
    );
}

#[test]
fn connected_accounts_are_lowercased() {
    let mixed = "0xEC1ADF982415D2EF5EC55899B9BFB8BC0F29251B";
    let state = wallet_with(json!({
        "identities": { mixed: { "address": mixed, "name": "Loud" } },
        "accounts": { mixed: { "address": mixed, "balance": "0x0" } },
        "keyrings": [ { "type": "HD Key Tree", "accounts": [mixed] } ]
    }));
    let selectors = Selectors::new();

    assert_eq!(
        selectors.accounts_connected(&state).as_slice(),
        &[ACCOUNT_2.to_string()]
    );
}

// ============================================================================
// Memoization
// ============================================================================

#[test]
fn unchanged_state_returns_same_arc() {
    let state = base_state();
    let selectors = Selectors::new();

    let first = selectors.accounts_ordered(&state);
    let second = selectors.accounts_ordered(&state);
    let connected_a = selectors.accounts_connected(&state);
    let connected_b = selectors.accounts_connected(&state);

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&connected_a, &connected_b));
    let stats = selectors.stats();
    assert_eq!(stats.accounts_with_balances, 1);
    assert_eq!(stats.accounts_ordered, 1);
    assert_eq!(stats.accounts_connected, 1);
}

#[test]
fn cloned_snapshot_shares_cached_result() {
    let state = base_state();
    let selectors = Selectors::new();

    let first = selectors.accounts_ordered(&state);
    let mut next = state.clone();
    next.wallet.selected_address = Some(ACCOUNT_2.to_string());
    let second = selectors.accounts_ordered(&next);

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn replacing_identities_recomputes_only_downstream() {
    let state = base_state();
    let selectors = Selectors::new();
    selectors.accounts_connected(&state);

    let mut next = state.clone();
    Arc::make_mut(&mut next.wallet.identities).insert(
        "0xnew".to_string(),
        Identity {
            address: "0xnew".to_string(),
            name: "New".to_string(),
            last_selected: None,
        },
    );
    let ordered = selectors.accounts_ordered(&next);

    assert_eq!(ordered.len(), 3);
    let stats = selectors.stats();
    assert_eq!(stats.accounts_with_balances, 1);
    assert_eq!(stats.accounts_ordered, 2);
}

#[test]
fn replacing_accounts_recomputes_balances() {
    let state = base_state();
    let selectors = Selectors::new();
    let before = selectors.accounts_with_balances(&state);

    let mut next = state.clone();
    Arc::make_mut(&mut next.wallet.accounts).insert(
        ACCOUNT_1.to_string(),
        Account {
            address: ACCOUNT_1.to_string(),
            balance: Some("0x2".to_string()),
        },
    );
    let after = selectors.accounts_with_balances(&next);

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after[ACCOUNT_1].balance.as_deref(), Some("0x2"));
    assert_eq!(selectors.stats().accounts_with_balances, 2);
}

#[test]
fn switching_chain_invalidates_balances() {
    let state = base_state();
    let selectors = Selectors::new();
    selectors.accounts_with_balances(&state);

    let mut next = state.clone();
    next.wallet.provider.chain_id = wallet_model::ChainId::new("0x5").unwrap();
    selectors.accounts_with_balances(&next);

    assert_eq!(selectors.stats().accounts_with_balances, 2);
}

// ============================================================================
// Cached balances
// ============================================================================

#[test]
fn cached_balances_fall_back_to_network_id() {
    let state = wallet_with(json!({
        "cachedBalances": { "1": { ACCOUNT_1: "0x5" } }
    }));

    let balances = cached_balances(&state).expect("network id fallback");
    assert_eq!(balances.get(ACCOUNT_1).map(String::as_str), Some("0x5"));
}

#[test]
fn cached_balances_prefer_chain_id() {
    let state = wallet_with(json!({
        "cachedBalances": {
            "0x1": { ACCOUNT_1: "0xa" },
            "1": { ACCOUNT_1: "0xb" }
        }
    }));

    assert_eq!(selected_account_cached_balance(&state), Some("0xa"));
}

#[test]
fn missing_balance_uses_cache() {
    let state = wallet_with(json!({
        "accounts": {
            ACCOUNT_1: { "address": ACCOUNT_1 }
        }
    }));
    let selectors = Selectors::new();

    let account = selectors.selected_account(&state).expect("selected account");
    assert_eq!(account.balance.as_deref(), Some("0x1"));
    assert!(is_balance_cached(&state));
}

#[test]
fn live_balance_is_not_reported_as_cached() {
    assert!(!is_balance_cached(&base_state()));
}

// ============================================================================
// Selected / target accounts
// ============================================================================

#[test]
fn selected_identity_and_counts() {
    let state = base_state();
    assert_eq!(selected_identity(&state).unwrap().name, "Test Account");
    assert_eq!(number_of_accounts(&state), 3);
}

#[test]
fn target_account_lookup() {
    let state = base_state();
    let selectors = Selectors::new();

    let target = selectors.target_account(&state, ACCOUNT_2).unwrap();
    assert_eq!(target.balance.as_deref(), Some("0x0"));
    assert!(selectors.target_account(&state, "0x404").is_none());
}

#[test]
fn send_ether_info_covers_every_identity() {
    let state = base_state();
    let selectors = Selectors::new();

    let info = selectors.accounts_with_send_ether_info(&state);
    assert_eq!(info.len(), 3);

    let current = selectors
        .current_account_with_send_ether_info(&state)
        .unwrap();
    assert_eq!(current.name, "Test Account");
    assert_eq!(
        selectors.current_eth_balance(&state).as_deref(),
        Some("0xde0b6b3a7640000")
    );

    let ledger = selectors
        .target_account_with_send_ether_info(&state, LEDGER_ACCOUNT)
        .unwrap();
    assert_eq!(ledger.name, "Ledger 1");
}

#[test]
fn labels_follow_keyring_order() {
    let state = base_state();
    let selectors = Selectors::new();

    let labels = selectors.accounts_with_labels(&state);
    let rendered: Vec<&str> = labels.iter().map(|l| l.address_label.as_str()).collect();

    assert_eq!(
        rendered,
        vec!["Test Account (...e7bc)", "Imported (...251b)", "Ledger 1 (...8813)"]
    );
}

#[test]
fn no_selection_yields_no_current_account() {
    let state = wallet_with(json!({ "selectedAddress": null }));
    let selectors = Selectors::new();

    assert!(selectors.selected_account(&state).is_none());
    assert!(selectors.current_eth_balance(&state).is_none());
    assert!(selected_identity(&state).is_none());
}
