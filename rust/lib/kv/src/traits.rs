use crate::error::KVError;

/// KVStore provides a key-value storage interface with write transactions.
///
/// Keys follow a namespaced convention: `macgen:work_order:{id}`,
/// `macgen:counter:{name}`, etc. Single-key operations run in their own
/// transaction; multi-key read-modify-write sequences go through [`KVStore::begin`].
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), KVError>;

    /// Scan all keys matching a prefix. Returns sorted (key, value) pairs.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>;

    /// Start a write transaction.
    ///
    /// At most one write transaction is open at a time: `begin` blocks until
    /// the current one commits or rolls back. Every read and write made through
    /// the returned handle is therefore serializable with respect to all other
    /// write transactions.
    fn begin(&self) -> Result<Box<dyn KVTransaction>, KVError>;
}

/// A write transaction handle. Dropping it without `commit` rolls back.
pub trait KVTransaction {
    /// Get the value for a key, observing this transaction's own writes.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair inside the transaction.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Delete a key inside the transaction.
    fn delete(&mut self, key: &str) -> Result<(), KVError>;

    /// Scan all keys matching a prefix, observing this transaction's own writes.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>;

    /// Make all writes visible atomically.
    fn commit(self: Box<Self>) -> Result<(), KVError>;

    /// Discard all writes.
    fn rollback(self: Box<Self>) -> Result<(), KVError>;
}
