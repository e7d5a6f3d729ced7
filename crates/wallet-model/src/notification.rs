use serde::{Deserialize, Serialize};

/// A "what's new" notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    /// Publication date, `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    #[serde(default)]
    pub is_shown: bool,
}
