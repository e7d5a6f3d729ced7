//! "What's new" notification accessors.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use tracing::warn;
use wallet_model::{AppState, LedgerTransportType, Notification};

use crate::constants::KEYRING_TYPE_LEDGER;
use crate::environment::Environment;
use crate::keyring::{current_keyring, ledger_transport_type};
use crate::network::is_mainnet;

/// Notification announcing Ledger Live support over WebHID.
pub const LEDGER_LIVE_NOTIFICATION_ID: u32 = 8;
/// Mainnet-only announcement.
pub const MAINNET_NOTIFICATION_ID: u32 = 9;

/// Eligibility of every known notification id.
///
/// Ids 1 through 7 belong to retired announcements and are never shown.
pub fn allowed_notification_ids(state: &AppState, env: &Environment) -> BTreeMap<u32, bool> {
    let keyring_is_ledger =
        current_keyring(state).is_some_and(|keyring| keyring.kind == KEYRING_TYPE_LEDGER);
    let using_ledger_live = ledger_transport_type(state) == Some(LedgerTransportType::Live);

    let mut allowed: BTreeMap<u32, bool> = (1..LEDGER_LIVE_NOTIFICATION_ID)
        .map(|id| (id, false))
        .collect();
    allowed.insert(
        LEDGER_LIVE_NOTIFICATION_ID,
        env.supports_webhid && keyring_is_ledger && using_ledger_live,
    );
    allowed.insert(MAINNET_NOTIFICATION_ID, is_mainnet(state));
    allowed
}

/// Unseen, eligible notifications, newest first.
///
/// Notifications with the same date keep their stored order. A date that
/// cannot be parsed sorts after every dated notification.
pub fn sorted_notifications_to_show<'a>(
    state: &'a AppState,
    env: &Environment,
) -> Vec<&'a Notification> {
    let allowed = allowed_notification_ids(state, env);
    let mut to_show: Vec<(Option<i64>, &Notification)> = state
        .wallet
        .notifications
        .values()
        .filter(|notification| {
            !notification.is_shown && allowed.get(&notification.id).copied().unwrap_or(false)
        })
        .map(|notification| (parse_notification_date(notification), notification))
        .collect();
    to_show.sort_by(|(a, _), (b, _)| b.cmp(a));
    to_show
        .into_iter()
        .map(|(_, notification)| notification)
        .collect()
}

/// Milliseconds since the epoch for a `YYYY-MM-DD` or RFC 3339 date.
fn parse_notification_date(notification: &Notification) -> Option<i64> {
    let date = notification.date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis());
    }
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => Some(parsed.timestamp_millis()),
        Err(error) => {
            warn!(id = notification.id, date, %error, "unparsable notification date");
            None
        }
    }
}
