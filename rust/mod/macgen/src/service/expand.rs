use tracing::debug;

use macgen_core::ServiceError;

use crate::alloc;
use crate::model::{DeviceFamily, DeviceIdentifiers, OntIdentifiers, SwitchIdentifiers, WorkOrder};
use super::MacGenService;

impl MacGenService {
    /// Expand an order into its per-device identifiers, whatever its family.
    /// Computed from the committed record; nothing is written.
    pub fn expand_identifiers(&self, id: &str) -> Result<Vec<DeviceIdentifiers>, ServiceError> {
        let order = self.get_work_order(id)?;
        expand_order(&order)
    }

    /// ONT-only expansion.
    pub fn expand_ont(&self, id: &str) -> Result<Vec<OntIdentifiers>, ServiceError> {
        let order = self.get_work_order(id)?;
        require_family(&order, DeviceFamily::Ont)?;
        expand_order(&order)?
            .into_iter()
            .map(|record| match record {
                DeviceIdentifiers::Ont(ont) => Ok(ont),
                DeviceIdentifiers::Switch(_) => Err(mixed_records(&order)),
            })
            .collect()
    }

    /// SWITCH-only expansion.
    pub fn expand_switch(&self, id: &str) -> Result<Vec<SwitchIdentifiers>, ServiceError> {
        let order = self.get_work_order(id)?;
        require_family(&order, DeviceFamily::Switch)?;
        expand_order(&order)?
            .into_iter()
            .map(|record| match record {
                DeviceIdentifiers::Switch(switch) => Ok(switch),
                DeviceIdentifiers::Ont(_) => Err(mixed_records(&order)),
            })
            .collect()
    }
}

fn expand_order(order: &WorkOrder) -> Result<Vec<DeviceIdentifiers>, ServiceError> {
    let records = alloc::expand(order)?;
    debug!(
        "expanded work-order {} into {} {} records",
        order.work_order_number,
        records.len(),
        order.item_type
    );
    Ok(records)
}

fn require_family(order: &WorkOrder, family: DeviceFamily) -> Result<(), ServiceError> {
    if order.item_type == family {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "This endpoint only supports {} work-orders",
            family
        )))
    }
}

fn mixed_records(order: &WorkOrder) -> ServiceError {
    ServiceError::Internal(format!(
        "work-order {} expanded to records of the wrong family",
        order.work_order_number
    ))
}
