//! Token and asset accessors.

use std::collections::BTreeMap;

use wallet_model::{AppState, Token, TokenListEntry};

use crate::constants::NATIVE_CURRENCY_TOKEN_IMAGE_MAP;
use crate::network::current_chain_id;
use crate::preferences::native_currency;

pub fn tokens(state: &AppState) -> &[Token] {
    &state.wallet.tokens
}

pub fn number_of_tokens(state: &AppState) -> usize {
    state.wallet.tokens.len()
}

pub fn token_list(state: &AppState) -> &BTreeMap<String, TokenListEntry> {
    &state.wallet.token_list
}

/// Token contract address to exchange rate against the native currency.
pub fn token_exchange_rates(state: &AppState) -> &BTreeMap<String, f64> {
    &state.wallet.contract_exchange_rates
}

pub fn native_currency_image(state: &AppState) -> Option<&'static str> {
    let symbol = native_currency(state).to_uppercase();
    NATIVE_CURRENCY_TOKEN_IMAGE_MAP.get(symbol.as_str()).copied()
}

/// Tokens detected for the selected address on the current chain.
pub fn detected_tokens_in_current_network(state: &AppState) -> Option<&[Token]> {
    let selected = state.wallet.selected_address.as_deref()?;
    state
        .wallet
        .all_detected_tokens
        .get(current_chain_id(state).as_str())?
        .get(selected)
        .map(Vec::as_slice)
}
