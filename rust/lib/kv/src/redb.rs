use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use tracing::debug;

use crate::error::KVError;
use crate::traits::{KVStore, KVTransaction};

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("kv");

fn storage_err<E: std::fmt::Display>(e: E) -> KVError {
    KVError::Storage(e.to_string())
}

/// RedbStore is a KVStore implementation backed by redb, a pure-Rust embedded
/// key-value database.
///
/// redb admits a single write transaction at a time, so a transaction started
/// with [`KVStore::begin`] holds the database-wide write lock until it commits
/// or rolls back. Reads outside a transaction see the last committed snapshot.
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, KVError> {
        let db = Database::create(path).map_err(storage_err)?;

        // Ensure the table exists by doing a write transaction.
        let write_txn = db.begin_write().map_err(storage_err)?;
        {
            let _table = write_txn.open_table(TABLE).map_err(storage_err)?;
        }
        write_txn.commit().map_err(storage_err)?;

        debug!("RedbStore: opened {:?}", path);
        Ok(Self { db: Arc::new(db) })
    }
}

impl KVStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(TABLE).map_err(storage_err)?;

        match table.get(key) {
            Ok(Some(val)) => Ok(Some(val.value().to_vec())),
            Ok(None) => Ok(None),
            Err(e) => Err(storage_err(e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let mut txn = self.begin()?;
        txn.set(key, value)?;
        txn.commit()
    }

    fn delete(&self, key: &str) -> Result<(), KVError> {
        let mut txn = self.begin()?;
        txn.delete(key)?;
        txn.commit()
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(TABLE).map_err(storage_err)?;
        scan_table(&table, prefix)
    }

    fn begin(&self) -> Result<Box<dyn KVTransaction>, KVError> {
        let txn = self.db.begin_write().map_err(storage_err)?;
        Ok(Box::new(RedbTransaction { txn }))
    }
}

/// A redb write transaction. Holds the database write lock while alive.
pub struct RedbTransaction {
    txn: WriteTransaction,
}

impl KVTransaction for RedbTransaction {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let table = self.txn.open_table(TABLE).map_err(storage_err)?;
        let value = table
            .get(key)
            .map_err(storage_err)?
            .map(|val| val.value().to_vec());
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let mut table = self.txn.open_table(TABLE).map_err(storage_err)?;
        table.insert(key, value).map_err(storage_err)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), KVError> {
        let mut table = self.txn.open_table(TABLE).map_err(storage_err)?;
        table.remove(key).map_err(storage_err)?;
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError> {
        let table = self.txn.open_table(TABLE).map_err(storage_err)?;
        scan_table(&table, prefix)
    }

    fn commit(self: Box<Self>) -> Result<(), KVError> {
        self.txn.commit().map_err(storage_err)
    }

    fn rollback(self: Box<Self>) -> Result<(), KVError> {
        self.txn.abort().map_err(storage_err)
    }
}

fn scan_table<T>(table: &T, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>
where
    T: ReadableTable<&'static str, &'static [u8]>,
{
    let mut results = Vec::new();
    let iter = table.range(prefix..).map_err(storage_err)?;

    for entry in iter {
        let entry = entry.map_err(storage_err)?;
        let key = entry.0.value().to_string();
        if !key.starts_with(prefix) {
            break;
        }
        let value = entry.1.value().to_vec();
        results.push((key, value));
    }

    Ok(results)
}
