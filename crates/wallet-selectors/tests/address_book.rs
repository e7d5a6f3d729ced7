mod common;

use common::{ACCOUNT_1, ACCOUNT_2, base_state, wallet_with};
use serde_json::{Value, json};
use wallet_selectors::{address_book, address_book_entry, address_book_entry_or_account_name};

const FRIEND: &str = "0xc6d5a3c98ec9073b54fa0969957bd582e8d874bf";

fn book(chain_key: &str) -> Value {
    json!({
        "addressBook": {
            chain_key: {
                "0xC6D5a3c98EC9073B54FA0969957Bd582e8D874bf": {
                    "address": "0xC6D5a3c98EC9073B54FA0969957Bd582e8D874bf",
                    "name": "Friend",
                    "chainId": chain_key,
                    "memo": "",
                    "isEns": false
                }
            }
        }
    })
}

#[test]
fn lookup_ignores_address_case() {
    let state = wallet_with(book("0x1"));

    let lower = address_book_entry(&state, FRIEND).expect("entry");
    let upper = address_book_entry(&state, &FRIEND.to_uppercase().replace("0X", "0x"))
        .expect("entry");

    assert_eq!(lower.name, "Friend");
    assert_eq!(lower, upper);
    assert_eq!(address_book(&state).len(), 1);
}

#[test]
fn entries_on_other_chains_are_invisible() {
    let state = wallet_with(book("0x5"));

    assert!(address_book(&state).is_empty());
    assert!(address_book_entry(&state, FRIEND).is_none());
}

#[test]
fn name_falls_back_to_identity_then_address() {
    let state = wallet_with(book("0x1"));

    assert_eq!(address_book_entry_or_account_name(&state, FRIEND), "Friend");
    assert_eq!(
        address_book_entry_or_account_name(&state, ACCOUNT_2),
        "Imported"
    );
    let stranger = "0x1111111111111111111111111111111111111111";
    assert_eq!(address_book_entry_or_account_name(&state, stranger), stranger);
}

#[test]
fn empty_book() {
    let state = base_state();
    assert!(address_book(&state).is_empty());
    assert_eq!(
        address_book_entry_or_account_name(&state, ACCOUNT_1),
        "Test Account"
    );
}
