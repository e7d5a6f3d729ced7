//! Address book accessors.

use wallet_model::{AddressBookEntry, AppState};

use crate::address::{is_equal_case_insensitive, to_checksum_hex_address};
use crate::network::current_chain_id;

/// Contacts saved for the current chain.
pub fn address_book(state: &AppState) -> Vec<&AddressBookEntry> {
    state
        .wallet
        .address_book
        .get(current_chain_id(state).as_str())
        .map(|entries| entries.values().collect())
        .unwrap_or_default()
}

/// Contact on the current chain whose address matches `address` in any
/// casing.
pub fn address_book_entry<'a>(state: &'a AppState, address: &str) -> Option<&'a AddressBookEntry> {
    let checksummed = to_checksum_hex_address(address);
    address_book(state)
        .into_iter()
        .find(|entry| is_equal_case_insensitive(&entry.address, &checksummed))
}

/// Display name for `address`: the contact name, else the name of one of the
/// user's own accounts, else the address itself.
pub fn address_book_entry_or_account_name(state: &AppState, address: &str) -> String {
    let checksummed = to_checksum_hex_address(address);
    let name = match address_book_entry(state, address) {
        Some(entry) => Some(entry.name.as_str()),
        None => state
            .wallet
            .identities
            .values()
            .find(|identity| is_equal_case_insensitive(&identity.address, &checksummed))
            .map(|identity| identity.name.as_str()),
    };
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => address.to_string(),
    }
}
