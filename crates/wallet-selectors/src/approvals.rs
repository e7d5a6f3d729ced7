//! Pending confirmation accessors.

use wallet_model::{AppState, PendingApproval, SuggestedAsset};

use crate::constants::TEMPLATED_CONFIRMATION_MESSAGE_TYPES;

pub fn unapproved_tx_count(state: &AppState) -> usize {
    state.wallet.unapproved_txs.len()
}

pub fn suggested_assets(state: &AppState) -> &[SuggestedAsset] {
    &state.wallet.suggested_assets
}

/// Everything waiting on the user: signature requests of every kind,
/// transactions, generic approvals and suggested tokens.
pub fn total_unapproved_count(state: &AppState) -> usize {
    let wallet = &state.wallet;
    let message_counts = [
        wallet.unapproved_msg_count,
        wallet.unapproved_personal_msg_count,
        wallet.unapproved_decrypt_msg_count,
        wallet.unapproved_encryption_public_key_msg_count,
        wallet.unapproved_typed_messages_count,
        wallet.pending_approval_count,
    ];
    message_counts.iter().map(|&count| count as usize).sum::<usize>()
        + unapproved_tx_count(state)
        + suggested_assets(state).len()
}

pub fn unapproved_confirmations(state: &AppState) -> Vec<&PendingApproval> {
    state.wallet.pending_approvals.values().collect()
}

/// Approvals rendered by the templated confirmation page.
pub fn unapproved_templated_confirmations(state: &AppState) -> Vec<&PendingApproval> {
    state
        .wallet
        .pending_approvals
        .values()
        .filter(|approval| TEMPLATED_CONFIRMATION_MESSAGE_TYPES.contains(&approval.kind.as_str()))
        .collect()
}
