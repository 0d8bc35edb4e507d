use serde::{Deserialize, Serialize};

/// Response shaping for `/resolve`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Send `application/json` instead of Google's `application/x-javascript`.
    #[serde(default)]
    pub json_content_type: bool,

    /// Value for the `server` response header; omitted when unset.
    #[serde(default)]
    pub server_header: Option<String>,
}
