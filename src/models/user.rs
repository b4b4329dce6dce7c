use serde::{Deserialize, Serialize};

/// The account the configured credentials belong to, as reported by `/myself`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Identity {
    // Cloud instances can hide the address behind privacy settings
    #[serde(rename = "emailAddress", default)]
    pub email_address: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}
