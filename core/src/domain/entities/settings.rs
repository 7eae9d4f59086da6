//! Persistent settings record consumed by the token service.

use serde::{Deserialize, Serialize};

/// Settings record
///
/// The token service owns the whole record. Unknown keys are ignored when
/// reading and are not carried over when the record is written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Durable secret for the kubeconfig scope, created on first start
    #[serde(default, with = "secret_base64", skip_serializing_if = "Option::is_none")]
    pub kube_secret_key: Option<Vec<u8>>,

    /// Desktop-extension deployments get effectively non-expiring session tokens
    #[serde(default)]
    pub is_desktop_extension: bool,

    /// Lifetime of kubeconfig tokens as a duration string; "0" means never expire
    #[serde(default = "default_kubeconfig_expiry")]
    pub kubeconfig_expiry: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kube_secret_key: None,
            is_desktop_extension: false,
            kubeconfig_expiry: default_kubeconfig_expiry(),
        }
    }
}

fn default_kubeconfig_expiry() -> String {
    String::from(sg_shared::config::DEFAULT_KUBECONFIG_EXPIRY)
}

mod secret_base64 {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&BASE64.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| BASE64.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}
