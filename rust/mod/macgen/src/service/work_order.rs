use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use macgen_core::{new_id, now_rfc3339, ServiceError};
use macgen_kv::KVTransaction;

use crate::alloc::{build_code, check_overlap, AllocError, MacRange, OccupiedRange, MAX_ITEM_QUANTITY};
use crate::model::{DeviceFamily, WorkOrder};
use super::sequence::next_ordinal;
use super::{
    check_id, decode, encode, kv_err, not_found, work_order_code_key, work_order_key,
    MacGenService, WORK_ORDER_PREFIX,
};

/// HW-SN and PON-SN prefixes are 2–6 characters.
const SN_PREFIX_LEN: std::ops::RangeInclusive<usize> = 2..=6;

/// Order metadata for a new work order. Every field is required; they are
/// optional here so that all missing ones can be reported together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrderInput {
    pub customer_name: Option<String>,
    pub customer_po: Option<String>,
    pub customer_po_date: Option<String>,
    pub item_type: Option<String>,
    pub customer_model: Option<String>,
    pub oem_model: Option<String>,
    pub odm_model: Option<String>,
    pub item_quantity: Option<i64>,
}

/// Generation parameters for an existing work order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    pub start_mac_id: Option<String>,
    pub required_per_device: Option<i64>,
    pub start_hw_sn_prefix: Option<String>,
    pub start_hw_sn_suffix: Option<String>,
    pub start_pon_sn_prefix: Option<String>,
    pub mac_vendor_name: Option<String>,
    #[serde(default)]
    pub mac_id_required: bool,
}

/// Whether an order's derived identifiers reflect its stored parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderStatus {
    pub work_order_data: WorkOrder,
    pub up_to_date: bool,
    pub message: String,
}

impl MacGenService {
    /// Create a work order stamped with the current time.
    pub fn create_work_order(&self, input: CreateWorkOrderInput) -> Result<WorkOrder, ServiceError> {
        self.create_work_order_at(input, Utc::now())
    }

    /// Create a work order: take the next ordinal, derive the code from it
    /// and `now`, insert the record. One transaction.
    pub fn create_work_order_at(
        &self,
        input: CreateWorkOrderInput,
        now: DateTime<Utc>,
    ) -> Result<WorkOrder, ServiceError> {
        let mut missing = Vec::new();
        let customer_name = required(&input.customer_name, "customerName", &mut missing);
        let customer_po = required(&input.customer_po, "customerPo", &mut missing);
        let customer_po_date = required(&input.customer_po_date, "customerPoDate", &mut missing);
        let item_type = required(&input.item_type, "itemType", &mut missing);
        let customer_model = required(&input.customer_model, "customerModel", &mut missing);
        let oem_model = required(&input.oem_model, "oemModel", &mut missing);
        let odm_model = required(&input.odm_model, "odmModel", &mut missing);
        if input.item_quantity.is_none() {
            missing.push("itemQuantity");
        }
        if !missing.is_empty() {
            return Err(ServiceError::missing_fields(&missing));
        }

        let item_type = DeviceFamily::parse(item_type).ok_or_else(|| {
            ServiceError::Validation("Invalid itemType; must be 'ONT' or 'SWITCH'".into())
        })?;
        let item_quantity = positive(input.item_quantity, "itemQuantity")?;
        if item_quantity > MAX_ITEM_QUANTITY {
            return Err(ServiceError::Validation(format!(
                "itemQuantity must not exceed {}",
                MAX_ITEM_QUANTITY
            )));
        }
        check_po_date(customer_po_date)?;

        let order = self.transact(|txn| {
            let order_sequence = next_ordinal(txn, &self.counter_name)?;
            let work_order_number = build_code(&self.code_prefix, order_sequence, &now);

            let code_key = work_order_code_key(&work_order_number);
            if txn.get(&code_key).map_err(kv_err)?.is_some() {
                return Err(ServiceError::Conflict(format!(
                    "work-order number '{}' already exists",
                    work_order_number
                )));
            }

            let stamp = now.to_rfc3339();
            let order = WorkOrder {
                id: new_id(),
                order_sequence,
                work_order_number,
                customer_name: customer_name.to_string(),
                customer_po: customer_po.to_string(),
                customer_po_date: customer_po_date.to_string(),
                item_type,
                customer_model: customer_model.to_string(),
                oem_model: oem_model.to_string(),
                odm_model: odm_model.to_string(),
                item_quantity,
                start_mac_id: None,
                required_per_device: None,
                start_hw_sn_prefix: None,
                start_hw_sn_suffix: None,
                start_pon_sn_prefix: None,
                mac_vendor_name: None,
                mac_id_required: false,
                excel_file_generated: false,
                create_at: stamp.clone(),
                update_at: stamp,
            };

            txn.set(&work_order_key(&order.id), &encode(&order)?).map_err(kv_err)?;
            txn.set(&code_key, order.id.as_bytes()).map_err(kv_err)?;
            Ok(order)
        })?;

        info!(
            "work-order {} created (sequence {}, {} x {})",
            order.work_order_number, order.order_sequence, order.item_quantity, order.item_type
        );
        Ok(order)
    }

    /// Set or replace the generation parameters of an order.
    ///
    /// The requested MAC-ID range is checked against every other allocated
    /// order inside the same write transaction that stores it. The order's
    /// own previous range is not compared, so re-submitting the same range
    /// succeeds.
    pub fn generate_parameters(&self, id: &str, input: GenerateInput) -> Result<WorkOrder, ServiceError> {
        check_id(id)?;

        let order = self.transact(|txn| {
            let mut order: WorkOrder = match txn.get(&work_order_key(id)).map_err(kv_err)? {
                Some(bytes) => decode(&bytes)?,
                None => return Err(not_found(id)),
            };

            let pon_given = input.start_pon_sn_prefix.as_deref().is_some_and(|p| !p.trim().is_empty());
            if order.item_type == DeviceFamily::Switch && pon_given {
                return Err(ServiceError::Validation(
                    "ONT-only fields not allowed for SWITCH".into(),
                ));
            }

            let mut missing = Vec::new();
            let start_mac_id = required(&input.start_mac_id, "startMacId", &mut missing);
            if input.required_per_device.is_none() {
                missing.push("requiredPerDevice");
            }
            let hw_prefix = required(&input.start_hw_sn_prefix, "startHwSnPrefix", &mut missing);
            let hw_suffix = required(&input.start_hw_sn_suffix, "startHwSnSuffix", &mut missing);
            let vendor = required(&input.mac_vendor_name, "macVendorName", &mut missing);
            let pon_prefix = match order.item_type {
                DeviceFamily::Ont => required(&input.start_pon_sn_prefix, "startPonSnPrefix", &mut missing),
                DeviceFamily::Switch => "",
            };
            if !missing.is_empty() {
                return Err(ServiceError::missing_fields(&missing));
            }

            let stride = positive(input.required_per_device, "requiredPerDevice")?;
            check_prefix_len(hw_prefix, "startHwSnPrefix")?;
            if order.item_type == DeviceFamily::Ont {
                check_prefix_len(pon_prefix, "startPonSnPrefix")?;
            }

            let requested = MacRange::new(start_mac_id, stride, order.item_quantity)?;
            requested.check_width()?;

            let occupied = occupied_ranges(txn, id)?;
            debug!(
                "checking MAC-ID range {} against {} allocated work-orders",
                requested,
                occupied.len()
            );
            if let Err(e) = check_overlap(&requested, &occupied) {
                warn!("work-order {}: {}", order.work_order_number, e);
                return Err(e.into());
            }

            order.start_mac_id = Some(start_mac_id.to_string());
            order.required_per_device = Some(stride);
            order.start_hw_sn_prefix = Some(hw_prefix.to_string());
            order.start_hw_sn_suffix = Some(hw_suffix.to_string());
            order.start_pon_sn_prefix = match order.item_type {
                DeviceFamily::Ont => Some(pon_prefix.to_string()),
                DeviceFamily::Switch => None,
            };
            order.mac_vendor_name = Some(vendor.to_string());
            order.mac_id_required = input.mac_id_required;
            order.excel_file_generated = true;
            order.update_at = now_rfc3339();

            txn.set(&work_order_key(id), &encode(&order)?).map_err(kv_err)?;
            info!("work-order {} allocated MAC-ID range {}", order.work_order_number, requested);
            Ok(order)
        })?;

        Ok(order)
    }

    /// Report whether an order's generation parameters are current.
    pub fn work_order_status(&self, id: &str) -> Result<WorkOrderStatus, ServiceError> {
        let order = self.get_work_order(id)?;
        let up_to_date = order.excel_file_generated;
        let message = if up_to_date {
            "Work-order is up to date."
        } else {
            "Please update the work-order to generate the excel file."
        };
        Ok(WorkOrderStatus {
            work_order_data: order,
            up_to_date,
            message: message.to_string(),
        })
    }
}

/// Ranges held by every allocated order except `exclude_id`, read inside `txn`.
fn occupied_ranges(
    txn: &dyn KVTransaction,
    exclude_id: &str,
) -> Result<Vec<OccupiedRange>, ServiceError> {
    let mut occupied = Vec::new();
    for (key, bytes) in txn.scan(WORK_ORDER_PREFIX).map_err(kv_err)? {
        let other: WorkOrder = decode(&bytes)?;
        if other.id == exclude_id || !other.has_allocation() {
            continue;
        }
        let (Some(start), Some(stride)) = (other.start_mac_id.as_deref(), other.required_per_device) else {
            continue;
        };
        let range = MacRange::new(start, stride, other.item_quantity).map_err(|e| {
            ServiceError::Internal(format!("stored range of {} is invalid: {}", key, e))
        })?;
        occupied.push(OccupiedRange {
            work_order_number: other.work_order_number,
            range,
        });
    }
    Ok(occupied)
}

/// Non-empty value of a required field, or record its name as missing.
fn required<'a>(value: &'a Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            ""
        }
    }
}

fn positive(value: Option<i64>, name: &'static str) -> Result<u64, ServiceError> {
    match value {
        Some(v) if v > 0 => Ok(v as u64),
        _ => Err(AllocError::NonPositive(name).into()),
    }
}

fn check_prefix_len(prefix: &str, name: &str) -> Result<(), ServiceError> {
    if SN_PREFIX_LEN.contains(&prefix.chars().count()) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "{} must be {} to {} characters",
            name,
            SN_PREFIX_LEN.start(),
            SN_PREFIX_LEN.end()
        )))
    }
}

/// Accept `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn check_po_date(value: &str) -> Result<(), ServiceError> {
    let ok = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok();
    if ok {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "customerPoDate '{}' is not a valid date",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use chrono::TimeZone;

    use super::*;
    use crate::model::SequenceCounter;
    use macgen_kv::KVStore;

    use crate::service::counter_key;
    use crate::service::testutil::{create_input, make_service, ont_params, switch_params};

    fn march_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn create_assigns_sequence_and_code() {
        let (svc, _dir) = make_service();
        let counter = SequenceCounter { name: "macGenerator".into(), seq: 6 };
        svc.kv
            .set(&counter_key("macGenerator"), &serde_json::to_vec(&counter).unwrap())
            .unwrap();

        let order = svc.create_work_order_at(create_input("ONT", 3), march_2025()).unwrap();
        assert_eq!(order.order_sequence, 7);
        assert_eq!(order.work_order_number, "RREC2507");
        assert!(order.work_order_number.ends_with("C2507"));
        assert!(!order.excel_file_generated);
        assert!(!order.has_allocation());

        let stored = svc.get_work_order(&order.id).unwrap();
        assert_eq!(stored, order);
    }

    #[test]
    fn create_lists_all_missing_fields() {
        let (svc, _dir) = make_service();
        let input = CreateWorkOrderInput {
            customer_name: Some("  ".into()),
            customer_po: None,
            ..create_input("ONT", 3)
        };
        let err = svc.create_work_order(input).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: customerName, customerPo");

        let err = svc.create_work_order(CreateWorkOrderInput::default()).unwrap_err();
        assert!(err.to_string().ends_with("odmModel, itemQuantity"), "got {err}");
        assert_eq!(svc.current_ordinal().unwrap(), 0, "no ordinal consumed");
    }

    #[test]
    fn create_rejects_bad_values() {
        let (svc, _dir) = make_service();
        let err = svc.create_work_order(create_input("ROUTER", 3)).unwrap_err();
        assert!(err.to_string().contains("Invalid itemType"));

        let err = svc.create_work_order(create_input("ONT", 0)).unwrap_err();
        assert_eq!(err.to_string(), "itemQuantity must be a positive integer");

        let input = CreateWorkOrderInput {
            customer_po_date: Some("yesterday".into()),
            ..create_input("ONT", 3)
        };
        assert!(matches!(svc.create_work_order(input), Err(ServiceError::Validation(_))));

        let input = CreateWorkOrderInput {
            customer_po_date: Some("2025-03-01T10:00:00Z".into()),
            ..create_input("ONT", 3)
        };
        assert!(svc.create_work_order(input).is_ok());
    }

    #[test]
    fn duplicate_code_is_conflict_and_rolls_back() {
        let (svc, _dir) = make_service();
        // Occupy the code the next creation would get.
        svc.kv.set(&work_order_code_key("RREC2501"), b"someone").unwrap();

        let err = svc.create_work_order_at(create_input("ONT", 3), march_2025()).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(svc.current_ordinal().unwrap(), 0);
        assert!(svc.list_work_orders().unwrap().is_empty());
    }

    #[test]
    fn generate_sets_parameters_and_flag() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("ONT", 3)).unwrap();

        let updated = svc.generate_parameters(&order.id, ont_params("00AABBCC0010", 2)).unwrap();
        assert!(updated.excel_file_generated);
        assert_eq!(updated.start_mac_id.as_deref(), Some("00AABBCC0010"));
        assert_eq!(updated.required_per_device, Some(2));
        assert_eq!(updated.start_pon_sn_prefix.as_deref(), Some("PON"));
        assert_eq!(svc.get_work_order(&order.id).unwrap(), updated);
    }

    #[test]
    fn generate_unknown_order_is_not_found() {
        let (svc, _dir) = make_service();
        let err = svc
            .generate_parameters("0123456789abcdef0123456789abcdef", ont_params("00", 1))
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn generate_lists_missing_fields() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("ONT", 3)).unwrap();
        let input = GenerateInput {
            start_mac_id: None,
            start_pon_sn_prefix: None,
            mac_vendor_name: Some(String::new()),
            ..ont_params("00", 1)
        };
        let err = svc.generate_parameters(&order.id, input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: startMacId, macVendorName, startPonSnPrefix"
        );
        assert!(!svc.get_work_order(&order.id).unwrap().excel_file_generated);
    }

    #[test]
    fn switch_rejects_pon_prefix_before_anything_else() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("SWITCH", 3)).unwrap();
        let input = GenerateInput {
            start_mac_id: None,
            ..ont_params("00", 1)
        };
        let err = svc.generate_parameters(&order.id, input).unwrap_err();
        assert_eq!(err.to_string(), "ONT-only fields not allowed for SWITCH");
    }

    #[test]
    fn generate_rejects_malformed_values() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("ONT", 3)).unwrap();

        let err = svc.generate_parameters(&order.id, ont_params("00ZZ", 1)).unwrap_err();
        assert_eq!(err.to_string(), "startMacId '00ZZ' is not a hexadecimal string");

        let err = svc.generate_parameters(&order.id, ont_params("0010", 0)).unwrap_err();
        assert_eq!(err.to_string(), "requiredPerDevice must be a positive integer");

        let input = GenerateInput {
            start_hw_sn_prefix: Some("H".into()),
            ..ont_params("0010", 1)
        };
        let err = svc.generate_parameters(&order.id, input).unwrap_err();
        assert_eq!(err.to_string(), "startHwSnPrefix must be 2 to 6 characters");

        // 3 devices from FE need FE..100, which does not fit two digits.
        let err = svc.generate_parameters(&order.id, ont_params("FE", 1)).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "got {err:?}");
        assert!(!svc.get_work_order(&order.id).unwrap().excel_file_generated);
    }

    #[test]
    fn adjacent_switch_ranges_coexist_overlapping_ones_conflict() {
        let (svc, _dir) = make_service();
        let a = svc.create_work_order(create_input("SWITCH", 10)).unwrap();
        let b = svc.create_work_order(create_input("SWITCH", 10)).unwrap();
        let c = svc.create_work_order(create_input("SWITCH", 11)).unwrap();

        // [100,109] and [110,119]
        svc.generate_parameters(&a.id, switch_params("0064", 1)).unwrap();
        svc.generate_parameters(&b.id, switch_params("006E", 1)).unwrap();

        // [96,106] only touches a.
        let err = svc.generate_parameters(&c.id, switch_params("0060", 1)).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        let msg = err.to_string();
        assert!(msg.contains(&a.work_order_number), "{msg}");
        assert!(msg.contains("0060-006A"), "{msg}");
        assert!(msg.contains("0064-006D"), "{msg}");

        let rejected = svc.get_work_order(&c.id).unwrap();
        assert!(!rejected.excel_file_generated);
        assert!(rejected.start_mac_id.is_none());

        // [120,130] sits just past b.
        svc.generate_parameters(&c.id, switch_params("0078", 1)).unwrap();

        let allocated = svc.get_work_order(&c.id).unwrap();
        assert!(allocated.excel_file_generated);
        assert_eq!(allocated.start_mac_id.as_deref(), Some("0078"));
    }

    #[test]
    fn switch_tolerates_empty_pon_prefix() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("SWITCH", 2)).unwrap();
        let input = GenerateInput {
            start_pon_sn_prefix: Some(String::new()),
            ..switch_params("B0", 1)
        };
        let updated = svc.generate_parameters(&order.id, input).unwrap();
        assert!(updated.excel_file_generated);
        assert!(updated.start_pon_sn_prefix.is_none());
    }

    #[test]
    fn create_rejects_oversized_quantity() {
        let (svc, _dir) = make_service();
        let err = svc.create_work_order(create_input("SWITCH", 1 << 60)).unwrap_err();
        assert_eq!(err.to_string(), "itemQuantity must not exceed 1000000");

        let max = MAX_ITEM_QUANTITY as i64;
        assert!(svc.create_work_order(create_input("SWITCH", max)).is_ok());
        assert!(svc.create_work_order(create_input("SWITCH", max + 1)).is_err());
    }

    #[test]
    fn concurrent_overlapping_allocations_commit_once() {
        let (svc, _dir) = make_service();
        let orders: Vec<WorkOrder> = (0..8)
            .map(|_| svc.create_work_order(create_input("SWITCH", 10)).unwrap())
            .collect();

        // Starts 0x100..0x107 with 10 addresses each: every pair intersects.
        let barrier = Arc::new(Barrier::new(orders.len()));
        let handles: Vec<_> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| {
                let svc = svc.clone();
                let barrier = barrier.clone();
                let id = order.id.clone();
                thread::spawn(move || {
                    barrier.wait();
                    svc.generate_parameters(&id, switch_params(&format!("{:04X}", 0x100 + i), 1))
                })
            })
            .collect();

        let mut committed = 0;
        for h in handles {
            match h.join().unwrap() {
                Ok(_) => committed += 1,
                Err(ServiceError::Conflict(_)) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(committed, 1);

        let ranges: Vec<MacRange> = svc
            .list_work_orders()
            .unwrap()
            .into_iter()
            .filter(|o| o.excel_file_generated)
            .map(|o| {
                MacRange::new(o.start_mac_id.as_deref().unwrap(), o.required_per_device.unwrap(), o.item_quantity)
                    .unwrap()
            })
            .collect();
        assert_eq!(ranges.len(), 1);
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                assert!(!a.overlaps(b), "{a} and {b} both committed");
            }
        }
    }

    #[test]
    fn concurrent_disjoint_allocations_all_commit() {
        let (svc, _dir) = make_service();
        let orders: Vec<WorkOrder> = (0..8)
            .map(|_| svc.create_work_order(create_input("SWITCH", 10)).unwrap())
            .collect();

        let handles: Vec<_> = orders
            .iter()
            .enumerate()
            .map(|(i, order)| {
                let svc = svc.clone();
                let id = order.id.clone();
                thread::spawn(move || {
                    svc.generate_parameters(&id, switch_params(&format!("{:04X}", 0x100 + 10 * i), 1))
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }
        assert!(svc.list_work_orders().unwrap().iter().all(|o| o.excel_file_generated));
    }

    #[test]
    fn concurrent_creation_issues_unique_sequences_and_codes() {
        let (svc, _dir) = make_service();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = svc.clone();
                thread::spawn(move || {
                    (0..5)
                        .map(|_| svc.create_work_order_at(create_input("ONT", 1), march_2025()).unwrap())
                        .collect::<Vec<WorkOrder>>()
                })
            })
            .collect();

        let mut sequences = BTreeSet::new();
        let mut codes = BTreeSet::new();
        for h in handles {
            for order in h.join().unwrap() {
                assert!(sequences.insert(order.order_sequence));
                assert!(codes.insert(order.work_order_number));
            }
        }
        assert_eq!(sequences, (1..=40).collect::<BTreeSet<u64>>());
        assert_eq!(svc.current_ordinal().unwrap(), 40);
        assert_eq!(svc.list_work_orders().unwrap().len(), 40);
    }

    #[test]
    fn reallocating_same_range_succeeds() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("ONT", 3)).unwrap();
        svc.generate_parameters(&order.id, ont_params("00AABBCC0010", 2)).unwrap();
        let again = svc.generate_parameters(&order.id, ont_params("00AABBCC0010", 2)).unwrap();
        assert_eq!(again.start_mac_id.as_deref(), Some("00AABBCC0010"));

        // Moving within its own old range is fine too.
        svc.generate_parameters(&order.id, ont_params("00AABBCC0012", 2)).unwrap();
    }

    #[test]
    fn unallocated_orders_do_not_block() {
        let (svc, _dir) = make_service();
        svc.create_work_order(create_input("ONT", 1000)).unwrap();
        let order = svc.create_work_order(create_input("ONT", 3)).unwrap();
        assert!(svc.generate_parameters(&order.id, ont_params("000000000000", 1)).is_ok());
    }

    #[test]
    fn status_follows_generation_flag() {
        let (svc, _dir) = make_service();
        let order = svc.create_work_order(create_input("SWITCH", 2)).unwrap();

        let status = svc.work_order_status(&order.id).unwrap();
        assert!(!status.up_to_date);

        svc.generate_parameters(&order.id, switch_params("A0", 1)).unwrap();
        let status = svc.work_order_status(&order.id).unwrap();
        assert!(status.up_to_date);
        assert_eq!(status.message, "Work-order is up to date.");
        assert_eq!(status.work_order_data.id, order.id);
    }
}
