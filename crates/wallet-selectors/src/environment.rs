//! Host capabilities that live outside the state tree.

use serde::{Deserialize, Serialize};

/// Runtime facts about the host the UI renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// The browser exposes the WebHID API.
    pub supports_webhid: bool,
    /// Running an end-to-end test build.
    pub in_test: bool,
}
