pub mod expand;
pub mod search;
pub mod sequence;
pub mod work_order;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use macgen_core::{is_valid_id, ServiceConfig, ServiceError};
use macgen_kv::{KVError, KVStore, KVTransaction};

use crate::alloc::{AllocError, ExpandError};
use crate::model::WorkOrder;

pub use search::{SearchQuery, SortOrder};
pub use work_order::{CreateWorkOrderInput, GenerateInput, WorkOrderStatus};

/// KV prefix of work-order records, keyed by id.
pub(crate) const WORK_ORDER_PREFIX: &str = "macgen:work_order:";
/// KV prefix of the code → id index.
pub(crate) const WORK_ORDER_CODE_PREFIX: &str = "macgen:work_order_code:";
/// KV prefix of sequence counters, keyed by name.
pub(crate) const COUNTER_PREFIX: &str = "macgen:counter:";

/// MAC generator service: work-order lifecycle on top of a KV store.
///
/// Every mutation runs inside one store write transaction. Write
/// transactions are exclusive, which makes the overlap scan and the write
/// that follows it a single serializable step.
pub struct MacGenService {
    pub(crate) kv: Arc<dyn KVStore>,
    pub(crate) code_prefix: String,
    pub(crate) counter_name: String,
}

impl MacGenService {
    pub fn new(kv: Arc<dyn KVStore>, config: &ServiceConfig) -> Self {
        Self {
            kv,
            code_prefix: config.code_prefix.clone(),
            counter_name: config.counter_name.clone(),
        }
    }

    /// Run `op` in a write transaction: commit on Ok, roll back on Err.
    /// The handle is released on every path.
    pub(crate) fn transact<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut dyn KVTransaction) -> Result<T, ServiceError>,
    {
        let mut txn = self.kv.begin().map_err(kv_err)?;
        match op(txn.as_mut()) {
            Ok(value) => {
                txn.commit().map_err(kv_err)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback() {
                    warn!("rollback failed after '{}': {}", e, rb);
                }
                Err(e)
            }
        }
    }

    /// Load a committed work order by id.
    pub fn get_work_order(&self, id: &str) -> Result<WorkOrder, ServiceError> {
        check_id(id)?;
        let bytes = self
            .kv
            .get(&work_order_key(id))
            .map_err(kv_err)?
            .ok_or_else(|| not_found(id))?;
        decode(&bytes)
    }

    /// All committed work orders, in key order.
    pub(crate) fn list_work_orders(&self) -> Result<Vec<WorkOrder>, ServiceError> {
        let entries = self.kv.scan(WORK_ORDER_PREFIX).map_err(kv_err)?;
        entries.iter().map(|(_key, bytes)| decode(bytes)).collect()
    }
}

// ── Helpers ──

pub(crate) fn work_order_key(id: &str) -> String {
    format!("{}{}", WORK_ORDER_PREFIX, id)
}

pub(crate) fn work_order_code_key(code: &str) -> String {
    format!("{}{}", WORK_ORDER_CODE_PREFIX, code)
}

pub(crate) fn counter_key(name: &str) -> String {
    format!("{}{}", COUNTER_PREFIX, name)
}

pub(crate) fn check_id(id: &str) -> Result<(), ServiceError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!("Invalid work-order ID '{}'", id)))
    }
}

pub(crate) fn not_found(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Work-order '{}' not found", id))
}

pub(crate) fn kv_err(e: KVError) -> ServiceError {
    ServiceError::Storage(e.to_string())
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(bytes).map_err(|e| ServiceError::Internal(format!("deserialize: {}", e)))
}

pub(crate) fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, ServiceError> {
    serde_json::to_vec(record).map_err(|e| ServiceError::Internal(format!("serialize: {}", e)))
}

impl From<AllocError> for ServiceError {
    fn from(e: AllocError) -> Self {
        match e {
            AllocError::Overlap { .. } => ServiceError::Conflict(e.to_string()),
            other => ServiceError::Validation(other.to_string()),
        }
    }
}

impl From<ExpandError> for ServiceError {
    fn from(e: ExpandError) -> Self {
        match e {
            ExpandError::Range(inner) => inner.into(),
            other => ServiceError::Validation(other.to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::make_service;
    use super::*;

    #[test]
    fn failed_transaction_leaves_no_writes() {
        let (svc, _dir) = make_service();
        let err = svc
            .transact(|txn| -> Result<(), ServiceError> {
                txn.set("macgen:scratch", b"x").map_err(kv_err)?;
                Err(ServiceError::Validation("nope".into()))
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert!(svc.kv.get("macgen:scratch").unwrap().is_none());
    }

    #[test]
    fn successful_transaction_commits() {
        let (svc, _dir) = make_service();
        let n = svc
            .transact(|txn| {
                txn.set("macgen:scratch", b"x").map_err(kv_err)?;
                Ok(1)
            })
            .unwrap();
        assert_eq!(n, 1);
        assert!(svc.kv.get("macgen:scratch").unwrap().is_some());
    }

    #[test]
    fn malformed_id_is_validation_not_not_found() {
        let (svc, _dir) = make_service();
        let err = svc.get_work_order("not-an-id").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "got {err:?}");

        let err = svc.get_work_order("0123456789abcdef0123456789abcdef").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn overlap_maps_to_conflict() {
        let a = crate::alloc::MacRange::new("10", 1, 4).unwrap();
        let err: ServiceError = AllocError::Overlap {
            work_order_number: "RREA2501".into(),
            requested: a.clone(),
            existing: a,
        }
        .into();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");

        let err: ServiceError = ExpandError::MissingParameters(vec!["startMacId"]).into();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }
}
