//! Account, identity and balance accessors.
//!
//! The `build_*` functions are the pure bodies of the memoized accessors on
//! [`crate::Selectors`]; they take their inputs explicitly so the cache can
//! key on exactly what they read.

use serde::Serialize;
use wallet_model::{
    Account, AccountWithBalance, AddressMap, AppState, CachedBalances, Identity, Keyring,
};

use crate::address::short_suffix;
use crate::network::{current_chain_id, current_network_id};

pub fn selected_address(state: &AppState) -> Option<&str> {
    state.wallet.selected_address.as_deref()
}

pub fn selected_identity(state: &AppState) -> Option<&Identity> {
    state.wallet.identities.get(selected_address(state)?)
}

pub fn identities(state: &AppState) -> &AddressMap<Identity> {
    &state.wallet.identities
}

/// Accounts as published, without cached-balance backfill.
pub fn accounts_raw(state: &AppState) -> &AddressMap<Account> {
    &state.wallet.accounts
}

pub fn number_of_accounts(state: &AppState) -> usize {
    state.wallet.accounts.len()
}

/// Cached balances for the current network.
///
/// Looks up the chain id first and falls back to the deprecated network id
/// that older snapshots were keyed by.
pub fn cached_balances(state: &AppState) -> Option<&AddressMap<String>> {
    lookup_cached_balances(
        &state.wallet.cached_balances,
        current_chain_id(state).as_str(),
        current_network_id(state),
    )
}

pub(crate) fn lookup_cached_balances<'a>(
    cached: &'a CachedBalances,
    chain_id: &str,
    network_id: &str,
) -> Option<&'a AddressMap<String>> {
    cached.get(chain_id).or_else(|| cached.get(network_id))
}

pub fn selected_account_cached_balance(state: &AppState) -> Option<&str> {
    let address = selected_address(state)?;
    cached_balances(state)?.get(address).map(String::as_str)
}

/// The selected account has no live balance but a cached one is available.
pub fn is_balance_cached(state: &AppState) -> bool {
    let live = selected_address(state)
        .and_then(|address| state.wallet.accounts.get(address))
        .and_then(|account| account.balance.as_deref())
        .is_some_and(|balance| !balance.is_empty());
    let cached = selected_account_cached_balance(state).is_some_and(|balance| !balance.is_empty());
    !live && cached
}

// ============================================================================
// Memoized bodies
// ============================================================================

/// Accounts with missing balances filled from the cache.
pub fn build_accounts_with_balances(
    accounts: &AddressMap<Account>,
    cached: Option<&AddressMap<String>>,
) -> AddressMap<Account> {
    accounts
        .iter()
        .map(|(key, account)| {
            let mut account = account.clone();
            if account.balance.is_none() {
                account.balance = cached.and_then(|balances| balances.get(key)).cloned();
            }
            (key.clone(), account)
        })
        .collect()
}

/// Accounts in keyring order, merged with their identities.
///
/// Addresses listed by more than one keyring appear once per listing.
/// Addresses without an identity are skipped.
pub fn build_accounts_ordered(
    keyrings: &[Keyring],
    identities: &AddressMap<Identity>,
    accounts: &AddressMap<Account>,
) -> Vec<AccountWithBalance> {
    keyrings
        .iter()
        .flat_map(|keyring| keyring.accounts.iter())
        .filter_map(|address| {
            identities
                .get(address)
                .map(|identity| AccountWithBalance::merge(identity, accounts.get(address)))
        })
        .collect()
}

/// Lower-cased addresses of the ordered accounts.
pub fn build_accounts_connected(ordered: &[AccountWithBalance]) -> Vec<String> {
    ordered
        .iter()
        .map(|account| account.address.to_lowercase())
        .collect()
}

/// Every identity merged with its balance record, in identity order.
pub fn build_accounts_with_send_ether_info(
    identities: &AddressMap<Identity>,
    accounts: &AddressMap<Account>,
) -> Vec<AccountWithBalance> {
    identities
        .iter()
        .map(|(key, identity)| AccountWithBalance::merge(identity, accounts.get(key)))
        .collect()
}

/// Account entry for pickers: `"<name> (...<last 4>)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLabel {
    pub address: String,
    pub address_label: String,
    pub label: String,
    pub balance: Option<String>,
}

pub fn build_accounts_with_labels(ordered: &[AccountWithBalance]) -> Vec<AccountLabel> {
    ordered
        .iter()
        .map(|account| AccountLabel {
            address: account.address.clone(),
            address_label: format!("{} (...{})", account.name, short_suffix(&account.address)),
            label: account.name.clone(),
            balance: account.balance.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(address: &str, balance: Option<&str>) -> Account {
        Account {
            address: address.to_string(),
            balance: balance.map(str::to_string),
        }
    }

    fn identity(address: &str, name: &str) -> Identity {
        Identity {
            address: address.to_string(),
            name: name.to_string(),
            last_selected: None,
        }
    }

    #[test]
    fn missing_balance_is_backfilled_from_cache() {
        let mut accounts = AddressMap::new();
        accounts.insert("0xa".to_string(), account("0xa", None));
        accounts.insert("0xb".to_string(), account("0xb", Some("0x2")));
        let mut cached = AddressMap::new();
        cached.insert("0xa".to_string(), "0x1".to_string());
        cached.insert("0xb".to_string(), "0x9".to_string());

        let filled = build_accounts_with_balances(&accounts, Some(&cached));

        assert_eq!(filled["0xa"].balance.as_deref(), Some("0x1"));
        assert_eq!(filled["0xb"].balance.as_deref(), Some("0x2"));
    }

    #[test]
    fn ordered_accounts_follow_keyrings_and_keep_duplicates() {
        let keyrings = vec![
            Keyring::new("HD Key Tree", vec!["0xb".to_string(), "0xa".to_string()]),
            Keyring::new("Simple Key Pair", vec!["0xa".to_string(), "0xnoid".to_string()]),
        ];
        let mut identities = AddressMap::new();
        identities.insert("0xa".to_string(), identity("0xa", "A"));
        identities.insert("0xb".to_string(), identity("0xb", "B"));
        let accounts = AddressMap::new();

        let ordered = build_accounts_ordered(&keyrings, &identities, &accounts);
        let names: Vec<&str> = ordered.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "A"]);
    }

    #[test]
    fn labels_use_last_four_characters() {
        let ordered = vec![AccountWithBalance {
            address: "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc".to_string(),
            name: "Test Account".to_string(),
            last_selected: None,
            balance: Some("0x0".to_string()),
        }];
        let labels = build_accounts_with_labels(&ordered);
        assert_eq!(labels[0].address_label, "Test Account (...e7bc)");
        assert_eq!(labels[0].label, "Test Account");
    }
}
