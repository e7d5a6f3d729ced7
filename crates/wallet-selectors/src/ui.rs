//! Projections of transient popup state.

use wallet_model::AppState;

pub fn gas_is_loading(state: &AppState) -> bool {
    state.ui.gas_is_loading
}

pub fn show_whats_new_popup(state: &AppState) -> bool {
    state.ui.show_whats_new_popup
}

pub fn new_network_added(state: &AppState) -> Option<&str> {
    state.ui.new_network_added.as_deref()
}

pub fn networks_tab_selected_rpc_url(state: &AppState) -> Option<&str> {
    state.ui.networks_tab_selected_rpc_url.as_deref()
}

pub fn onboarded_in_this_ui_session(state: &AppState) -> bool {
    state.ui.onboarded_in_this_ui_session
}
