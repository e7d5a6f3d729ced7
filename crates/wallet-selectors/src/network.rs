//! Network and chain accessors.

use serde::Serialize;
use tracing::warn;
use url::Url;
use wallet_model::{AppState, ChainId, Provider, RpcEntry, RpcPrefs};

use crate::constants::{
    ALLOWED_SWAPS_CHAINS, BUILT_IN_CHAINS, BUYABLE_CHAINS, MAINNET_CHAIN_ID,
    MULTI_LAYER_FEE_CHAINS, OPTIMISM_CHAIN_ID, OPTIMISM_TESTNET_CHAIN_ID, TEST_CHAINS,
    TOKEN_DETECTION_CHAINS,
};
use crate::environment::Environment;

static EMPTY_RPC_PREFS: RpcPrefs = RpcPrefs {
    block_explorer_url: None,
};

const EIP_1559: u32 = 1559;

pub fn provider(state: &AppState) -> &Provider {
    &state.wallet.provider
}

pub fn current_chain_id(state: &AppState) -> &ChainId {
    &state.wallet.provider.chain_id
}

/// Deprecated network id, e.g. `"1"`.
pub fn current_network_id(state: &AppState) -> &str {
    &state.wallet.network
}

/// Human-facing name of the current network: nickname, then RPC URL, then
/// provider type.
pub fn network_identifier(state: &AppState) -> &str {
    let provider = provider(state);
    non_empty(provider.nickname.as_deref())
        .or_else(|| non_empty(provider.rpc_url.as_deref()))
        .unwrap_or(provider.kind.as_str())
}

/// Network label reported to analytics: the RPC URL for custom networks,
/// otherwise the provider type.
pub fn metrics_network_identifier(state: &AppState) -> Option<&str> {
    let provider = provider(state);
    if provider.is_rpc() {
        provider.rpc_url.as_deref()
    } else {
        Some(provider.kind.as_str())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn chain_in(state: &AppState, chains: &[&str]) -> bool {
    chains.contains(&current_chain_id(state).as_str())
}

pub fn is_mainnet(state: &AppState) -> bool {
    current_chain_id(state) == MAINNET_CHAIN_ID
}

pub fn is_testnet(state: &AppState) -> bool {
    chain_in(state, TEST_CHAINS)
}

/// Neither mainnet nor a known test network. Test builds always report a
/// standard chain.
pub fn is_non_standard_eth_chain(state: &AppState, env: &Environment) -> bool {
    !(is_mainnet(state) || is_testnet(state) || env.in_test)
}

/// The chain is not one of the built-in networks.
pub fn is_custom_network(state: &AppState) -> bool {
    !chain_in(state, BUILT_IN_CHAINS)
}

pub fn is_optimism(state: &AppState) -> bool {
    chain_in(state, &[OPTIMISM_CHAIN_ID, OPTIMISM_TESTNET_CHAIN_ID])
}

pub fn is_multi_layer_fee_network(state: &AppState) -> bool {
    chain_in(state, MULTI_LAYER_FEE_CHAINS)
}

pub fn is_swaps_chain(state: &AppState) -> bool {
    chain_in(state, ALLOWED_SWAPS_CHAINS)
}

pub fn is_buyable_chain(state: &AppState) -> bool {
    chain_in(state, BUYABLE_CHAINS)
}

pub fn is_token_detection_supported(state: &AppState) -> bool {
    chain_in(state, TOKEN_DETECTION_CHAINS)
}

pub fn is_dynamic_token_list_available(state: &AppState) -> bool {
    chain_in(state, TOKEN_DETECTION_CHAINS)
}

/// Token detection is switched off on a non-mainnet chain that would
/// support it.
pub fn is_token_detection_inactive_on_non_mainnet_supported_network(state: &AppState) -> bool {
    !state.wallet.use_token_detection
        && is_dynamic_token_list_available(state)
        && !is_mainnet(state)
}

pub fn is_network_used(state: &AppState) -> bool {
    state
        .wallet
        .used_networks
        .get(current_chain_id(state).as_str())
        .copied()
        .unwrap_or(false)
}

pub fn frequent_rpc_list_detail(state: &AppState) -> &[RpcEntry] {
    &state.wallet.frequent_rpc_list_detail
}

/// Preferences of the saved RPC entry matching the provider URL, or empty
/// preferences when the provider is not a saved entry.
pub fn rpc_prefs_for_current_provider(state: &AppState) -> &RpcPrefs {
    let provider = provider(state);
    state
        .wallet
        .frequent_rpc_list_detail
        .iter()
        .find(|entry| Some(entry.rpc_url.as_str()) == provider.rpc_url.as_deref())
        .and_then(|entry| entry.rpc_prefs.as_ref())
        .unwrap_or(&EMPTY_RPC_PREFS)
}

// ============================================================================
// EIP-1559
// ============================================================================

pub fn is_eip1559_network(state: &AppState) -> bool {
    state.wallet.network_details.supports_eip(EIP_1559)
}

/// Every keyring type can sign type-2 transactions.
pub fn is_eip1559_account(_state: &AppState) -> bool {
    true
}

pub fn network_and_account_support_1559(state: &AppState) -> bool {
    is_eip1559_network(state) && is_eip1559_account(state)
}

pub fn network_or_account_not_support_1559(state: &AppState) -> bool {
    !is_eip1559_network(state) || !is_eip1559_account(state)
}

// ============================================================================
// Block explorer link
// ============================================================================

/// Translation keys for the "view on block explorer" menu entry.
///
/// `second_part` is either a translation key or, for the account details
/// modal, the explorer host substituted into `first_part`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExplorerLinkText {
    pub first_part: &'static str,
    pub second_part: String,
}

/// A saved explorer URL wins over the built-in explorer of known networks.
pub fn block_explorer_link_text(
    state: &AppState,
    account_details_modal: bool,
) -> BlockExplorerLinkText {
    let explorer_url = rpc_prefs_for_current_provider(state)
        .block_explorer_url
        .as_deref()
        .filter(|url| !url.is_empty());
    if let Some(explorer_url) = explorer_url {
        let second_part = if account_details_modal {
            url_host_name(explorer_url)
        } else {
            "blockExplorerAccountAction".to_string()
        };
        return BlockExplorerLinkText {
            first_part: "blockExplorerView",
            second_part,
        };
    }
    if !is_custom_network(state) {
        return BlockExplorerLinkText {
            first_part: "viewOnEtherscan",
            second_part: "blockExplorerAccountAction".to_string(),
        };
    }
    BlockExplorerLinkText {
        first_part: "addBlockExplorer",
        second_part: String::new(),
    }
}

/// Host of `url`, or the empty string when it does not parse.
fn url_host_name(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(error) => {
            warn!(url, %error, "unparsable block explorer url");
            String::new()
        }
    }
}
