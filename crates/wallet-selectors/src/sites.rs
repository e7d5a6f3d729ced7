//! Accessors about connected sites and the dapp requests they send.

use std::collections::BTreeMap;

use wallet_model::{AppState, MethodData, SubjectMetadata};

use crate::address::add_hex_prefix;

/// Length of `0x` plus a 4-byte method selector.
const METHOD_SELECTOR_LEN: usize = 10;

pub fn origin_of_current_tab(state: &AppState) -> Option<&str> {
    state.active_tab.origin.as_deref()
}

pub fn subject_metadata(state: &AppState) -> &BTreeMap<String, SubjectMetadata> {
    &state.wallet.subject_metadata
}

pub fn target_subject_metadata<'a>(
    state: &'a AppState,
    origin: &str,
) -> Option<&'a SubjectMetadata> {
    state.wallet.subject_metadata.get(origin)
}

/// Whether `origin` used the legacy `window.web3` shim (1) or was already
/// alerted about it (2).
pub fn web3_shim_usage_state_for_origin(state: &AppState, origin: &str) -> Option<u8> {
    state.wallet.web3_shim_usage_origins.get(origin).copied()
}

/// Decoded method signature for raw transaction `data`, looked up by its
/// 4-byte selector.
pub fn known_method_data<'a>(state: &'a AppState, data: &str) -> Option<&'a MethodData> {
    if data.is_empty() {
        return None;
    }
    let prefixed = add_hex_prefix(data);
    let selector = match prefixed.char_indices().nth(METHOD_SELECTOR_LEN) {
        Some((end, _)) => &prefixed[..end],
        None => prefixed.as_str(),
    };
    state.wallet.known_method_data.get(selector)
}
