//! Time-based reminder accessors.
//!
//! Each accessor has an `_at` form taking the current time in milliseconds
//! since the epoch; the plain form reads the system clock.

use chrono::Utc;
use wallet_model::AppState;

use crate::constants::DAY_MS;

/// Reminder interval before the user has ever seen the reminder.
const FIRST_RECOVERY_REMINDER_MS: i64 = 2 * DAY_MS;
/// Reminder interval once it has been shown at least once.
const REPEAT_RECOVERY_REMINDER_MS: i64 = 90 * DAY_MS;
const OUTDATED_BROWSER_WARNING_MS: i64 = 2 * DAY_MS;

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn show_recovery_phrase_reminder(state: &AppState) -> bool {
    show_recovery_phrase_reminder_at(state, now_ms())
}

pub fn show_recovery_phrase_reminder_at(state: &AppState, now_ms: i64) -> bool {
    let frequency = if state.wallet.recovery_phrase_reminder_has_been_shown {
        REPEAT_RECOVERY_REMINDER_MS
    } else {
        FIRST_RECOVERY_REMINDER_MS
    };
    now_ms.saturating_sub(state.wallet.recovery_phrase_reminder_last_shown) >= frequency
}

pub fn show_outdated_browser_warning(state: &AppState) -> bool {
    show_outdated_browser_warning_at(state, now_ms())
}

/// Shown when the warning was never dismissed, then every two days.
pub fn show_outdated_browser_warning_at(state: &AppState, now_ms: i64) -> bool {
    match state.wallet.outdated_browser_warning_last_shown {
        None | Some(0) => true,
        Some(last_shown) => now_ms.saturating_sub(last_shown) >= OUTDATED_BROWSER_WARNING_MS,
    }
}
