use std::fmt;

use serde::{Deserialize, Serialize};

/// Device family of a work order. Decides which identifiers are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceFamily {
    Ont,
    Switch,
}

impl DeviceFamily {
    /// Parse the wire name (`ONT` / `SWITCH`). Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ONT" => Some(Self::Ont),
            "SWITCH" => Some(Self::Switch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ont => "ONT",
            Self::Switch => "SWITCH",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WorkOrder: a customer order for a batch of devices of one family.
///
/// Order metadata is fixed at creation. The generation parameters stay
/// unset until the order is allocated a MAC-ID range; they are then
/// written together and `excel_file_generated` flips to true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    /// UUID primary key.
    pub id: String,

    /// Ordinal from the sequence counter. Unique, never reused.
    pub order_sequence: u64,

    /// Human-readable code (e.g. "RREC2507").
    pub work_order_number: String,

    pub customer_name: String,
    pub customer_po: String,
    pub customer_po_date: String,
    pub item_type: DeviceFamily,
    pub customer_model: String,
    pub oem_model: String,
    pub odm_model: String,

    /// Number of devices in the batch.
    pub item_quantity: u64,

    /// First MAC of the range, hex. Its length fixes the rendering width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mac_id: Option<String>,

    /// MAC addresses consumed per device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_per_device: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hw_sn_prefix: Option<String>,

    /// Decimal seed of the HW-SN suffix; its length is the suffix width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_hw_sn_suffix: Option<String>,

    /// ONT only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_pon_sn_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_vendor_name: Option<String>,

    /// Whether each device gets a MAC key (hash of its MAC).
    #[serde(default)]
    pub mac_id_required: bool,

    /// True once generation parameters have been validated and stored.
    #[serde(default)]
    pub excel_file_generated: bool,

    pub create_at: String,
    pub update_at: String,
}

impl WorkOrder {
    /// Whether a MAC-ID range has been stored for this order.
    pub fn has_allocation(&self) -> bool {
        self.start_mac_id.as_deref().is_some_and(|s| !s.is_empty())
            && self.required_per_device.is_some()
    }
}
