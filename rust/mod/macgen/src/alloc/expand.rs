//! Identifier expansion: one record per device, derived from a work
//! order's stored generation parameters.
//!
//! Pure: no I/O, and the same stored parameters always expand to the same
//! records. Device `i` gets MAC `start + stride*i` rendered at the width of
//! `startMacId`; its HW-SN is the prefix plus `seed + i`, zero-padded to the
//! length of the stored seed string.

use num_bigint::BigUint;

use super::range::{render_hex, AllocError, MacRange};
use crate::model::{DeviceFamily, DeviceIdentifiers, OntIdentifiers, SwitchIdentifiers, WorkOrder};

/// Number of trailing MAC hex characters embedded in a PON serial.
const PON_SN_MAC_CHARS: usize = 8;

/// Largest device count one work order may carry. Expansion materializes
/// every record, so larger orders are refused up front.
pub const MAX_ITEM_QUANTITY: u64 = 1_000_000;

/// Errors during expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("Missing generation parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    #[error("itemQuantity {quantity} exceeds the maximum of {max} devices")]
    TooManyDevices { quantity: u64, max: u64 },

    #[error(transparent)]
    Range(#[from] AllocError),
}

/// Generation parameters of one order, checked for completeness.
#[derive(Debug, Clone)]
pub struct GenerationParams<'a> {
    pub family: DeviceFamily,
    pub range: MacRange,
    pub hw_sn_prefix: &'a str,
    pub hw_sn_suffix: &'a str,
    /// Set for ONT orders only.
    pub pon_sn_prefix: Option<&'a str>,
    pub mac_key: bool,
}

impl<'a> GenerationParams<'a> {
    /// Collect the parameters the order's family needs. Every absent one is
    /// named in the error, in field order.
    pub fn from_order(order: &'a WorkOrder) -> Result<Self, ExpandError> {
        let start = non_empty(&order.start_mac_id);
        let stride = order.required_per_device.filter(|s| *s > 0);
        let hw_prefix = non_empty(&order.start_hw_sn_prefix);
        let hw_suffix = non_empty(&order.start_hw_sn_suffix);
        let pon_prefix = match order.item_type {
            DeviceFamily::Ont => non_empty(&order.start_pon_sn_prefix),
            DeviceFamily::Switch => None,
        };

        let mut missing = Vec::new();
        if start.is_none() {
            missing.push("startMacId");
        }
        if stride.is_none() {
            missing.push("requiredPerDevice");
        }
        if hw_prefix.is_none() {
            missing.push("startHwSnPrefix");
        }
        if hw_suffix.is_none() {
            missing.push("startHwSnSuffix");
        }
        if order.item_type == DeviceFamily::Ont && pon_prefix.is_none() {
            missing.push("startPonSnPrefix");
        }

        match (start, stride, hw_prefix, hw_suffix) {
            (Some(start), Some(stride), Some(hw_sn_prefix), Some(hw_sn_suffix))
                if missing.is_empty() =>
            {
                let range = MacRange::new(start, stride, order.item_quantity)?;
                Ok(Self {
                    family: order.item_type,
                    range,
                    hw_sn_prefix,
                    hw_sn_suffix,
                    pon_sn_prefix: pon_prefix,
                    mac_key: order.mac_id_required,
                })
            }
            _ => Err(ExpandError::MissingParameters(missing)),
        }
    }
}

/// Expand an order into one identifier record per device, in device order.
pub fn expand(order: &WorkOrder) -> Result<Vec<DeviceIdentifiers>, ExpandError> {
    let params = GenerationParams::from_order(order)?;
    if order.item_quantity > MAX_ITEM_QUANTITY {
        return Err(ExpandError::TooManyDevices {
            quantity: order.item_quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }
    // Fail before producing anything if the last MAC would not fit.
    params.range.check_width()?;

    let width = params.range.width();
    let hw_seed = parse_seed(params.hw_sn_suffix);
    let hw_pad = params.hw_sn_suffix.len();

    let mut records = Vec::new();
    for index in 0..order.item_quantity {
        let mac_id = render_hex(&params.range.device_address(index), width)?;
        let hw_sn = hw_serial(params.hw_sn_prefix, &hw_seed, hw_pad, index);

        let record = match (params.family, params.pon_sn_prefix) {
            (DeviceFamily::Ont, Some(pon_prefix)) => {
                let mac_key = params.mac_key.then(|| mac_key(&mac_id));
                DeviceIdentifiers::Ont(OntIdentifiers {
                    pon_sn: pon_serial(pon_prefix, &mac_id),
                    mac_id,
                    hw_sn,
                    mac_key,
                })
            }
            _ => DeviceIdentifiers::Switch(SwitchIdentifiers { mac_id, hw_sn }),
        };
        records.push(record);
    }

    Ok(records)
}

/// PON serial: prefix plus the last 8 characters of the MAC hex (the whole
/// MAC when it is shorter).
pub fn pon_serial(prefix: &str, mac_hex: &str) -> String {
    let tail = &mac_hex[mac_hex.len().saturating_sub(PON_SN_MAC_CHARS)..];
    format!("{}{}", prefix, tail)
}

/// MAC key: lowercase hex MD5 of the exact MAC text.
pub fn mac_key(mac_hex: &str) -> String {
    format!("{:x}", md5::compute(mac_hex.as_bytes()))
}

/// HW serial of device `index`. Pads to `pad` digits but never cuts a
/// longer number down.
fn hw_serial(prefix: &str, seed: &BigUint, pad: usize, index: u64) -> String {
    let seq = seed + BigUint::from(index);
    format!("{}{:0>pad$}", prefix, seq.to_string(), pad = pad)
}

/// Leading decimal digits of the seed; 0 when there are none.
fn parse_seed(seed: &str) -> BigUint {
    let digits: String = seed
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
