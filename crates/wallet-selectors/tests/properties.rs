//! Property tests for conversion helpers and account ordering.

mod common;

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use wallet_selectors::{Selectors, hex_to_decimal};

proptest! {
    #[test]
    fn hex_to_decimal_matches_u128(value in any::<u128>()) {
        let hex = format!("{value:#x}");
        prop_assert_eq!(hex_to_decimal(&hex).unwrap(), value.to_string());
    }

    #[test]
    fn ordered_accounts_only_include_known_identities(
        known in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut identities = Map::new();
        let mut accounts = Map::new();
        let mut addresses = Vec::new();
        for (index, has_identity) in known.iter().enumerate() {
            let address = format!("0x{index:040x}");
            if *has_identity {
                identities.insert(
                    address.clone(),
                    json!({ "address": address, "name": format!("Account {index}") }),
                );
            }
            accounts.insert(address.clone(), json!({ "address": address, "balance": "0x0" }));
            addresses.push(Value::String(address));
        }
        let state = common::wallet_with(json!({
            "identities": identities,
            "accounts": accounts,
            "keyrings": [{ "type": "HD Key Tree", "accounts": addresses }]
        }));

        let ordered = Selectors::new().accounts_ordered(&state);

        prop_assert_eq!(ordered.len(), known.iter().filter(|k| **k).count());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].address < pair[1].address);
        }
    }
}
