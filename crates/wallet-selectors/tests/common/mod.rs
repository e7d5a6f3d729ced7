//! Shared snapshot fixtures.
#![allow(dead_code)]

use serde_json::{Value, json};
use wallet_model::AppState;

pub const ACCOUNT_1: &str = "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc";
pub const ACCOUNT_2: &str = "0xec1adf982415d2ef5ec55899b9bfb8bc0f29251b";
pub const LEDGER_ACCOUNT: &str = "0xc42edfcc21ed14dda456aa0756c153f7985d8813";

/// Mainnet wallet with an HD keyring, an imported key and a Ledger.
pub fn base_snapshot() -> Value {
    json!({
        "wallet": {
            "provider": { "type": "mainnet", "chainId": "0x1" },
            "network": "1",
            "selectedAddress": ACCOUNT_1,
            "identities": {
                ACCOUNT_1: { "address": ACCOUNT_1, "name": "Test Account" },
                ACCOUNT_2: { "address": ACCOUNT_2, "name": "Imported" },
                LEDGER_ACCOUNT: { "address": LEDGER_ACCOUNT, "name": "Ledger 1" }
            },
            "accounts": {
                ACCOUNT_1: { "address": ACCOUNT_1, "balance": "0xde0b6b3a7640000" },
                ACCOUNT_2: { "address": ACCOUNT_2, "balance": "0x0" },
                LEDGER_ACCOUNT: { "address": LEDGER_ACCOUNT, "balance": "0x1bc16d674ec80000" }
            },
            "keyrings": [
                { "type": "HD Key Tree", "accounts": [ACCOUNT_1] },
                { "type": "Simple Key Pair", "accounts": [ACCOUNT_2] },
                { "type": "Ledger Hardware", "accounts": [LEDGER_ACCOUNT] }
            ],
            "cachedBalances": {
                "0x1": { ACCOUNT_1: "0x1" }
            },
            "currentCurrency": "usd",
            "nativeCurrency": "ETH",
            "conversionRate": 1200.5
        }
    })
}

pub fn state_from(value: Value) -> AppState {
    AppState::from_value(value).expect("fixture parses")
}

pub fn base_state() -> AppState {
    state_from(base_snapshot())
}

/// Base snapshot with `patch` applied to the `wallet` object.
pub fn wallet_with(patch: Value) -> AppState {
    let mut snapshot = base_snapshot();
    merge(&mut snapshot["wallet"], patch);
    state_from(snapshot)
}

/// Base snapshot with `patch` applied to the `ui` object.
pub fn ui_with(patch: Value) -> AppState {
    let mut snapshot = base_snapshot();
    snapshot["ui"] = patch;
    state_from(snapshot)
}

fn merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                target.insert(key, value);
            }
        }
        (target, patch) => *target = patch,
    }
}
