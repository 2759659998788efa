use macgen_core::ServiceError;
use macgen_kv::KVTransaction;

use crate::model::SequenceCounter;
use super::{counter_key, decode, encode, kv_err, MacGenService};

/// Increment the named counter inside `txn` and return the new value.
/// A missing counter starts at zero, so the first ordinal is 1.
pub(crate) fn next_ordinal(txn: &mut dyn KVTransaction, name: &str) -> Result<u64, ServiceError> {
    let key = counter_key(name);
    let mut counter = match txn.get(&key).map_err(kv_err)? {
        Some(bytes) => decode::<SequenceCounter>(&bytes)?,
        None => SequenceCounter::new(name),
    };
    counter.seq = counter
        .seq
        .checked_add(1)
        .ok_or_else(|| ServiceError::Internal(format!("counter '{}' overflowed", name)))?;
    txn.set(&key, &encode(&counter)?).map_err(kv_err)?;
    Ok(counter.seq)
}

impl MacGenService {
    /// Last ordinal issued (0 when none has been).
    pub fn current_ordinal(&self) -> Result<u64, ServiceError> {
        match self.kv.get(&counter_key(&self.counter_name)).map_err(kv_err)? {
            Some(bytes) => Ok(decode::<SequenceCounter>(&bytes)?.seq),
            None => Ok(0),
        }
    }

    /// Atomically take the next work-order ordinal in its own transaction.
    pub fn next_ordinal(&self) -> Result<u64, ServiceError> {
        let name = self.counter_name.clone();
        self.transact(|txn| next_ordinal(txn, &name))
    }
}
