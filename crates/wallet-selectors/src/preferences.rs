//! Settings, currency and gas preference accessors.

use wallet_model::{AdvancedGasFee, AppState, FeatureFlags, Preferences};

use crate::network::is_mainnet;

pub fn preferences(state: &AppState) -> &Preferences {
    &state.wallet.preferences
}

pub fn feature_flags(state: &AppState) -> &FeatureFlags {
    &state.wallet.feature_flags
}

pub fn current_currency(state: &AppState) -> &str {
    &state.wallet.current_currency
}

pub fn native_currency(state: &AppState) -> &str {
    &state.wallet.native_currency
}

pub fn conversion_rate(state: &AppState) -> Option<f64> {
    state.wallet.conversion_rate
}

pub fn usd_conversion_rate(state: &AppState) -> Option<f64> {
    state.wallet.usd_conversion_rate
}

pub fn show_test_networks(state: &AppState) -> bool {
    preferences(state).show_test_networks
}

/// Fiat values are shown on mainnet, or on test networks when the user opted
/// in, and only once a non-zero conversion rate is known.
pub fn should_show_fiat(state: &AppState) -> bool {
    let has_rate = conversion_rate(state).is_some_and(|rate| rate != 0.0 && !rate.is_nan());
    (is_mainnet(state) || preferences(state).show_fiat_in_testnets) && has_rate
}

pub fn should_hide_zero_balance_tokens(state: &AppState) -> bool {
    preferences(state).hide_zero_balance_tokens
}

pub fn advanced_inline_gas_shown(state: &AppState) -> bool {
    feature_flags(state).advanced_inline_gas.unwrap_or(false)
}

pub fn use_nonce_field(state: &AppState) -> bool {
    state.wallet.use_nonce_field
}

/// The custom nonce as typed by the user. Numbers are rendered in base 10 and
/// an unset value is the empty string.
pub fn custom_nonce_value(state: &AppState) -> String {
    match &state.wallet.custom_nonce_value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

pub fn next_suggested_nonce(state: &AppState) -> Option<u64> {
    state.wallet.next_nonce
}

pub fn use_token_detection(state: &AppState) -> bool {
    state.wallet.use_token_detection
}

pub fn ipfs_gateway(state: &AppState) -> &str {
    &state.wallet.ipfs_gateway
}

pub fn infura_blocked(state: &AppState) -> bool {
    state.wallet.infura_blocked.unwrap_or(false)
}

pub fn theme(state: &AppState) -> Option<&str> {
    state.wallet.theme.as_deref()
}

pub fn advanced_gas_fee_values(state: &AppState) -> Option<&AdvancedGasFee> {
    state.wallet.advanced_gas_fee.as_ref()
}

/// Both halves of a saved advanced gas fee are present.
pub fn is_advanced_gas_fee_default(state: &AppState) -> bool {
    let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
    advanced_gas_fee_values(state)
        .is_some_and(|fee| filled(&fee.max_base_fee) && filled(&fee.priority_fee))
}
