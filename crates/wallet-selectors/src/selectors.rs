//! Memoized account accessors.
//!
//! [`Selectors`] owns one [`Memo`] per composed accessor. A rendering host
//! keeps a single instance for its lifetime and calls it with every new state
//! snapshot; as long as the controllers did not replace the underlying
//! collections, the previous result is returned as the same [`Arc`].

use std::sync::Arc;

use serde::Serialize;
use wallet_model::{
    Account, AccountWithBalance, AddressMap, AppState, CachedBalances, ChainId, Identity, Keyring,
};

use crate::accounts::{
    AccountLabel, build_accounts_connected, build_accounts_ordered, build_accounts_with_balances,
    build_accounts_with_labels, build_accounts_with_send_ether_info, lookup_cached_balances,
    selected_address,
};
use crate::error::Result;
use crate::memo::Memo;
use crate::swaps::{SwapsDefaultToken, build_swaps_default_token, swaps_default_token_object};

type BalancesKey = (
    Arc<AddressMap<Account>>,
    Arc<CachedBalances>,
    ChainId,
    String,
);
type OrderedKey = (
    Arc<Vec<Keyring>>,
    Arc<AddressMap<Identity>>,
    Arc<AddressMap<Account>>,
);

/// Recomputation counters, one per memoized accessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoStats {
    pub accounts_with_balances: usize,
    pub accounts_ordered: usize,
    pub accounts_connected: usize,
}

/// Memoization caches for the composed account accessors.
#[derive(Debug)]
pub struct Selectors {
    accounts_with_balances: Memo<BalancesKey, AddressMap<Account>>,
    accounts_ordered: Memo<OrderedKey, Vec<AccountWithBalance>>,
    accounts_connected: Memo<Arc<Vec<AccountWithBalance>>, Vec<String>>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

impl Selectors {
    pub const fn new() -> Self {
        Self {
            accounts_with_balances: Memo::new("accounts_with_balances"),
            accounts_ordered: Memo::new("accounts_ordered"),
            accounts_connected: Memo::new("accounts_connected"),
        }
    }

    /// Accounts keyed by address, with missing balances taken from the
    /// cached balances of the current network.
    pub fn accounts_with_balances(&self, state: &AppState) -> Arc<AddressMap<Account>> {
        let wallet = &state.wallet;
        let key = (
            Arc::clone(&wallet.accounts),
            Arc::clone(&wallet.cached_balances),
            wallet.provider.chain_id.clone(),
            wallet.network.clone(),
        );
        self.accounts_with_balances
            .get_or_compute(key, |(accounts, cached, chain_id, network)| {
                let balances = lookup_cached_balances(cached, chain_id.as_str(), network);
                build_accounts_with_balances(accounts, balances)
            })
    }

    /// Accounts in keyring order, each merged with its identity.
    pub fn accounts_ordered(&self, state: &AppState) -> Arc<Vec<AccountWithBalance>> {
        let accounts = self.accounts_with_balances(state);
        let key = (
            Arc::clone(&state.wallet.keyrings),
            Arc::clone(&state.wallet.identities),
            accounts,
        );
        self.accounts_ordered
            .get_or_compute(key, |(keyrings, identities, accounts)| {
                build_accounts_ordered(keyrings, identities, accounts)
            })
    }

    /// Lower-cased addresses of [`Self::accounts_ordered`].
    pub fn accounts_connected(&self, state: &AppState) -> Arc<Vec<String>> {
        let ordered = self.accounts_ordered(state);
        self.accounts_connected
            .get_or_compute(ordered, |ordered| build_accounts_connected(ordered))
    }

    pub fn selected_account(&self, state: &AppState) -> Option<Account> {
        let address = selected_address(state)?;
        self.accounts_with_balances(state).get(address).cloned()
    }

    pub fn target_account(&self, state: &AppState, address: &str) -> Option<Account> {
        self.accounts_with_balances(state).get(address).cloned()
    }

    pub fn accounts_with_labels(&self, state: &AppState) -> Vec<AccountLabel> {
        build_accounts_with_labels(&self.accounts_ordered(state))
    }

    pub fn accounts_with_send_ether_info(&self, state: &AppState) -> Vec<AccountWithBalance> {
        build_accounts_with_send_ether_info(
            &state.wallet.identities,
            &self.accounts_with_balances(state),
        )
    }

    pub fn current_account_with_send_ether_info(
        &self,
        state: &AppState,
    ) -> Option<AccountWithBalance> {
        let address = selected_address(state)?;
        self.target_account_with_send_ether_info(state, address)
    }

    pub fn target_account_with_send_ether_info(
        &self,
        state: &AppState,
        address: &str,
    ) -> Option<AccountWithBalance> {
        self.accounts_with_send_ether_info(state)
            .into_iter()
            .find(|account| account.address == address)
    }

    /// Hex balance of the selected account.
    pub fn current_eth_balance(&self, state: &AppState) -> Option<String> {
        self.current_account_with_send_ether_info(state)?.balance
    }

    /// Default "from" token for the swaps form on the current chain.
    pub fn swaps_default_token(&self, state: &AppState) -> Result<SwapsDefaultToken> {
        let selected = self.selected_account(state);
        build_swaps_default_token(swaps_default_token_object(state), selected.as_ref())
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            accounts_with_balances: self.accounts_with_balances.recomputations(),
            accounts_ordered: self.accounts_ordered.recomputations(),
            accounts_connected: self.accounts_connected.recomputations(),
        }
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.accounts_with_balances.clear();
        self.accounts_ordered.clear();
        self.accounts_connected.clear();
    }
}
