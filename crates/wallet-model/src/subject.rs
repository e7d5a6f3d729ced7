use serde::{Deserialize, Serialize};

/// Metadata recorded for a site or extension that connected to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMetadata {
    pub origin: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub extension_id: Option<String>,
}

/// Decoded signature for a 4-byte method selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodData {
    pub name: String,
    #[serde(default)]
    pub params: Vec<MethodParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    #[serde(rename = "type")]
    pub kind: String,
}
