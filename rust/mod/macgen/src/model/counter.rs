use serde::{Deserialize, Serialize};

/// SequenceCounter: the singleton work-order ordinal source.
/// Created at zero on first use, only ever incremented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceCounter {
    pub name: String,
    #[serde(default)]
    pub seq: u64,
}

impl SequenceCounter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            seq: 0,
        }
    }
}
