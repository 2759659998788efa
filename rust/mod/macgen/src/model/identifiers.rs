use serde::{Deserialize, Serialize};

/// Identifiers derived for one ONT device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OntIdentifiers {
    pub mac_id: String,
    pub pon_sn: String,
    pub hw_sn: String,

    /// MD5 of `mac_id`; only present when the order asks for MAC keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_key: Option<String>,
}

/// Identifiers derived for one SWITCH device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwitchIdentifiers {
    pub mac_id: String,
    pub hw_sn: String,
}

/// One expanded device record, shaped by the order's device family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DeviceIdentifiers {
    Ont(OntIdentifiers),
    Switch(SwitchIdentifiers),
}

impl DeviceIdentifiers {
    pub fn mac_id(&self) -> &str {
        match self {
            DeviceIdentifiers::Ont(d) => &d.mac_id,
            DeviceIdentifiers::Switch(d) => &d.mac_id,
        }
    }

    pub fn hw_sn(&self) -> &str {
        match self {
            DeviceIdentifiers::Ont(d) => &d.hw_sn,
            DeviceIdentifiers::Switch(d) => &d.hw_sn,
        }
    }
}
