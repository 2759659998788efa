pub mod counter;
pub mod identifiers;
pub mod work_order;

pub use counter::SequenceCounter;
pub use identifiers::{DeviceIdentifiers, OntIdentifiers, SwitchIdentifiers};
pub use work_order::{DeviceFamily, WorkOrder};
