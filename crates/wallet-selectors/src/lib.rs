//! Derived views over the wallet extension state tree.
//!
//! Every accessor takes the state snapshot explicitly and never mutates it.
//! Plain projections and predicates are free functions grouped by concern;
//! the composed account views that are worth caching live on [`Selectors`].

pub mod accounts;
pub mod address;
pub mod address_book;
pub mod approvals;
pub mod constants;
pub mod environment;
pub mod error;
pub mod keyring;
pub mod memo;
pub mod network;
pub mod notifications;
pub mod preferences;
pub mod reminders;
pub mod selectors;
pub mod sites;
pub mod swaps;
pub mod tokens;
pub mod ui;
pub mod units;

pub use accounts::{
    AccountLabel, accounts_raw, cached_balances, identities, is_balance_cached,
    number_of_accounts, selected_account_cached_balance, selected_address, selected_identity,
};
pub use address::{
    add_hex_prefix, is_equal_case_insensitive, strip_hex_prefix, to_checksum_hex_address,
};
pub use address_book::{address_book, address_book_entry, address_book_entry_or_account_name};
pub use approvals::{
    suggested_assets, total_unapproved_count, unapproved_confirmations,
    unapproved_templated_confirmations,
};
pub use environment::Environment;
pub use error::{Result, SelectorError};
pub use keyring::{
    AccountType, account_type, current_keyring, does_address_require_ledger_hid_connection,
    find_keyring_for_address, hardware_wallet_type, is_address_ledger, is_hardware_wallet,
};
pub use memo::{Memo, MemoKey};
pub use network::{
    BlockExplorerLinkText, block_explorer_link_text, current_chain_id, current_network_id,
    is_custom_network, is_mainnet, is_non_standard_eth_chain, is_testnet,
    metrics_network_identifier, network_identifier, rpc_prefs_for_current_provider,
};
pub use notifications::{allowed_notification_ids, sorted_notifications_to_show};
pub use selectors::{MemoStats, Selectors};
pub use swaps::SwapsDefaultToken;
pub use units::{Denomination, hex_to_decimal, wei_hex_to_denomination};
