//! Account, identity and keyring records.

use serde::{Deserialize, Serialize};

use crate::ChainId;

/// Balance record for a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    /// Hex-encoded balance in wei. Absent until the balance controller has
    /// fetched it for the current network.
    #[serde(default)]
    pub balance: Option<String>,
}

/// User-facing metadata for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub address: String,
    #[serde(default)]
    pub name: String,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub last_selected: Option<u64>,
}

/// A group of addresses managed under one key-management scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyring {
    /// Keyring type tag, e.g. `HD Key Tree` or `Ledger Hardware`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub accounts: Vec<String>,
}

impl Keyring {
    pub fn new(kind: impl Into<String>, accounts: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            accounts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookEntry {
    pub address: String,
    #[serde(default)]
    pub name: String,
    pub chain_id: ChainId,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub is_ens: bool,
}

/// An identity merged with its balance record.
///
/// Produced by the ordered-accounts accessors: identity fields first, then
/// account fields layered on top, so the account's `address` wins when the
/// two disagree in casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithBalance {
    pub address: String,
    pub name: String,
    #[serde(default)]
    pub last_selected: Option<u64>,
    #[serde(default)]
    pub balance: Option<String>,
}

impl AccountWithBalance {
    /// Shallow merge with the account taking precedence.
    pub fn merge(identity: &Identity, account: Option<&Account>) -> Self {
        let mut merged = Self {
            address: identity.address.clone(),
            name: identity.name.clone(),
            last_selected: identity.last_selected,
            balance: None,
        };
        if let Some(account) = account {
            merged.address.clone_from(&account.address);
            merged.balance.clone_from(&account.balance);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_account_fields() {
        let identity = Identity {
            address: "0xABC".to_string(),
            name: "Account 1".to_string(),
            last_selected: Some(7),
        };
        let account = Account {
            address: "0xabc".to_string(),
            balance: Some("0x1".to_string()),
        };
        let merged = AccountWithBalance::merge(&identity, Some(&account));
        assert_eq!(merged.address, "0xabc");
        assert_eq!(merged.name, "Account 1");
        assert_eq!(merged.last_selected, Some(7));
        assert_eq!(merged.balance.as_deref(), Some("0x1"));
    }

    #[test]
    fn merge_without_account_keeps_identity() {
        let identity = Identity {
            address: "0xabc".to_string(),
            name: "Solo".to_string(),
            last_selected: None,
        };
        let merged = AccountWithBalance::merge(&identity, None);
        assert_eq!(merged.address, "0xabc");
        assert!(merged.balance.is_none());
    }
}
