//! Report views built from a state snapshot and rendered as tables or JSON.
//!
//! Each report is a plain serializable record assembled from accessor calls;
//! [`Report::table`] turns it into a `comfy-table` for terminal output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use wallet_model::{AppState, Notification};
use wallet_selectors::approvals::unapproved_tx_count;
use wallet_selectors::network::{
    is_buyable_chain, is_swaps_chain, network_and_account_support_1559,
};
use wallet_selectors::reminders::{
    show_outdated_browser_warning_at, show_recovery_phrase_reminder_at,
};
use wallet_selectors::{
    AccountType, BlockExplorerLinkText, Denomination, Environment, MemoStats, Selectors,
    SwapsDefaultToken, account_type, address_book_entry_or_account_name, block_explorer_link_text,
    current_chain_id, current_network_id, does_address_require_ledger_hid_connection,
    find_keyring_for_address, hardware_wallet_type, is_address_ledger, is_balance_cached,
    is_custom_network, is_mainnet, is_non_standard_eth_chain, is_testnet, network_identifier,
    selected_address, sorted_notifications_to_show, suggested_assets, to_checksum_hex_address,
    total_unapproved_count, unapproved_confirmations, unapproved_templated_confirmations,
    wei_hex_to_denomination,
};

/// Decimal places shown for ETH balances.
const BALANCE_DECIMALS: u32 = 4;

/// A command result that can be printed as a table.
pub trait Report: Serialize {
    fn table(&self) -> Table;
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRow {
    pub name: String,
    pub address: String,
    pub label: String,
    /// Balance in ETH, `None` while unknown.
    pub balance: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsReport {
    pub accounts: Vec<AccountRow>,
    pub balance_cached: bool,
}

impl AccountsReport {
    pub fn build(selectors: &Selectors, state: &AppState) -> Self {
        let selected = selected_address(state);
        let accounts = selectors
            .accounts_with_labels(state)
            .into_iter()
            .map(|label| AccountRow {
                selected: selected.is_some_and(|address| address == label.address),
                name: label.label,
                address: to_checksum_hex_address(&label.address),
                balance: label.balance.as_deref().and_then(eth_balance),
                label: label.address_label,
            })
            .collect();
        Self {
            accounts,
            balance_cached: is_balance_cached(state),
        }
    }
}

impl Report for AccountsReport {
    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell(""),
            header_cell("Name"),
            header_cell("Address"),
            header_cell("Balance (ETH)"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 3, CellAlignment::Right);
        for row in &self.accounts {
            let marker = if row.selected {
                Cell::new("*").fg(Color::Green)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                marker,
                Cell::new(&row.name),
                Cell::new(&row.address),
                optional_cell(row.balance.as_deref()),
            ]);
        }
        table
    }
}

fn eth_balance(hex: &str) -> Option<String> {
    wei_hex_to_denomination(hex, Denomination::Eth, BALANCE_DECIMALS).ok()
}

// ============================================================================
// Network
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkReport {
    pub chain_id: String,
    pub network_id: String,
    pub identifier: String,
    pub mainnet: bool,
    pub testnet: bool,
    pub custom: bool,
    pub non_standard: bool,
    pub eip1559: bool,
    pub swaps: bool,
    pub buyable: bool,
    pub block_explorer: BlockExplorerLinkText,
}

impl NetworkReport {
    pub fn build(state: &AppState, env: &Environment) -> Self {
        Self {
            chain_id: current_chain_id(state).to_string(),
            network_id: current_network_id(state).to_string(),
            identifier: network_identifier(state).to_string(),
            mainnet: is_mainnet(state),
            testnet: is_testnet(state),
            custom: is_custom_network(state),
            non_standard: is_non_standard_eth_chain(state, env),
            eip1559: network_and_account_support_1559(state),
            swaps: is_swaps_chain(state),
            buyable: is_buyable_chain(state),
            block_explorer: block_explorer_link_text(state, false),
        }
    }
}

impl Report for NetworkReport {
    fn table(&self) -> Table {
        key_value_table(vec![
            ("Chain id", Cell::new(&self.chain_id)),
            ("Network id", Cell::new(&self.network_id)),
            ("Name", Cell::new(&self.identifier)),
            ("Mainnet", bool_cell(self.mainnet)),
            ("Testnet", bool_cell(self.testnet)),
            ("Custom", bool_cell(self.custom)),
            ("Non-standard", bool_cell(self.non_standard)),
            ("EIP-1559", bool_cell(self.eip1559)),
            ("Swaps", bool_cell(self.swaps)),
            ("Buyable", bool_cell(self.buyable)),
            ("Explorer link", Cell::new(self.block_explorer.first_part)),
        ])
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationsReport {
    pub notifications: Vec<Notification>,
}

impl NotificationsReport {
    pub fn build(state: &AppState, env: &Environment) -> Self {
        Self {
            notifications: sorted_notifications_to_show(state, env)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Report for NotificationsReport {
    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Id"), header_cell("Date")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        if self.notifications.is_empty() {
            table.add_row(vec![dim_cell("-"), dim_cell("nothing new")]);
        }
        for notification in &self.notifications {
            table.add_row(vec![
                Cell::new(notification.id),
                Cell::new(&notification.date),
            ]);
        }
        table
    }
}

// ============================================================================
// Swaps
// ============================================================================

impl Report for SwapsDefaultToken {
    fn table(&self) -> Table {
        let symbol = self.token.map_or("-", |token| token.symbol);
        let name = self.token.map_or("-", |token| token.name);
        key_value_table(vec![
            ("Symbol", Cell::new(symbol)),
            ("Name", Cell::new(name)),
            ("Balance (wei)", Cell::new(&self.balance)),
            ("Balance", Cell::new(&self.string)),
        ])
    }
}

// ============================================================================
// Lookup
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReport {
    pub address: String,
    pub name: String,
    pub keyring: Option<String>,
    pub ledger: bool,
    pub requires_hid_connection: bool,
}

impl LookupReport {
    pub fn build(state: &AppState, address: &str) -> Self {
        Self {
            address: to_checksum_hex_address(address),
            name: address_book_entry_or_account_name(state, address),
            keyring: find_keyring_for_address(state, address).map(|keyring| keyring.kind.clone()),
            ledger: is_address_ledger(state, address),
            requires_hid_connection: does_address_require_ledger_hid_connection(state, address),
        }
    }
}

impl Report for LookupReport {
    fn table(&self) -> Table {
        key_value_table(vec![
            ("Address", Cell::new(&self.address)),
            ("Name", Cell::new(&self.name)),
            ("Keyring", optional_cell(self.keyring.as_deref())),
            ("Ledger", bool_cell(self.ledger)),
            ("Needs HID connection", bool_cell(self.requires_hid_connection)),
        ])
    }
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnapprovedCounts {
    pub total: usize,
    pub transactions: usize,
    pub confirmations: usize,
    pub templated_confirmations: usize,
    pub suggested_assets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub selected_address: Option<String>,
    pub selected_name: Option<String>,
    pub account_type: AccountType,
    pub hardware_wallet: Option<String>,
    pub unapproved: UnapprovedCounts,
    pub show_recovery_phrase_reminder: bool,
    pub show_outdated_browser_warning: bool,
    pub memo: MemoStats,
}

impl SummaryReport {
    /// `now_ms` is the reference time for the reminder checks.
    pub fn build(selectors: &Selectors, state: &AppState, now_ms: i64) -> Self {
        let current = selectors.current_account_with_send_ether_info(state);
        let unapproved = UnapprovedCounts {
            total: total_unapproved_count(state),
            transactions: unapproved_tx_count(state),
            confirmations: unapproved_confirmations(state).len(),
            templated_confirmations: unapproved_templated_confirmations(state).len(),
            suggested_assets: suggested_assets(state).len(),
        };
        Self {
            selected_address: current
                .as_ref()
                .map(|account| to_checksum_hex_address(&account.address)),
            selected_name: current.map(|account| account.name),
            account_type: account_type(state),
            hardware_wallet: hardware_wallet_type(state).map(str::to_string),
            unapproved,
            show_recovery_phrase_reminder: show_recovery_phrase_reminder_at(state, now_ms),
            show_outdated_browser_warning: show_outdated_browser_warning_at(state, now_ms),
            memo: selectors.stats(),
        }
    }
}

impl Report for SummaryReport {
    fn table(&self) -> Table {
        key_value_table(vec![
            ("Selected", optional_cell(self.selected_address.as_deref())),
            ("Name", optional_cell(self.selected_name.as_deref())),
            ("Account type", Cell::new(self.account_type)),
            ("Hardware wallet", optional_cell(self.hardware_wallet.as_deref())),
            ("Pending requests", count_cell(self.unapproved.total)),
            ("Transactions", count_cell(self.unapproved.transactions)),
            ("Confirmations", count_cell(self.unapproved.confirmations)),
            ("Suggested tokens", count_cell(self.unapproved.suggested_assets)),
            (
                "Recovery phrase reminder",
                bool_cell(self.show_recovery_phrase_reminder),
            ),
            (
                "Outdated browser warning",
                bool_cell(self.show_outdated_browser_warning),
            ),
        ])
    }
}

// ============================================================================
// Table helpers
// ============================================================================

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn key_value_table(rows: Vec<(&str, Cell)>) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (key, value) in rows {
        table.add_row(vec![header_cell(key), value]);
    }
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn bool_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("no")
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::DarkGrey)
        .add_attribute(Attribute::Dim)
}
