use serde::{Deserialize, Serialize};

/// User preferences toggled from the settings screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub use_native_currency_as_primary_currency: bool,
    pub show_fiat_in_testnets: bool,
    pub show_test_networks: bool,
    pub hide_zero_balance_tokens: bool,
}

/// Remotely or locally toggled feature switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub advanced_inline_gas: Option<bool>,
    pub show_incoming_transactions: Option<bool>,
}

/// Saved custom gas fee defaults, in gwei.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedGasFee {
    pub max_base_fee: Option<String>,
    pub priority_fee: Option<String>,
}
