//! Persistence contract: three named JSON blobs holding the employee roster,
//! the partner roster, and the financial history.

pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Employee, HistoryRecord, Partner};
use crate::errors::Result;

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

/// Names of the persisted blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKind {
    Employees,
    Partners,
    FinancialHistory,
}

impl BlobKind {
    pub const ALL: [BlobKind; 3] = [
        BlobKind::Employees,
        BlobKind::Partners,
        BlobKind::FinancialHistory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlobKind::Employees => "employees",
            BlobKind::Partners => "partners",
            BlobKind::FinancialHistory => "financialHistory",
        }
    }
}

/// Abstraction over backends able to read and write the named blobs.
///
/// Only the raw blob accessors are required; the typed helpers serialize through
/// `serde_json` and treat a missing blob as an empty collection.
pub trait StorageBackend: Send + Sync {
    fn read_blob(&self, kind: BlobKind) -> Result<Option<String>>;
    fn write_blob(&self, kind: BlobKind, data: &str) -> Result<()>;

    fn load_employees(&self) -> Result<Vec<Employee>> {
        load_list(self, BlobKind::Employees)
    }

    fn save_employees(&self, employees: &[Employee]) -> Result<()> {
        save_list(self, BlobKind::Employees, employees)
    }

    fn load_partners(&self) -> Result<Vec<Partner>> {
        load_list(self, BlobKind::Partners)
    }

    fn save_partners(&self, partners: &[Partner]) -> Result<()> {
        save_list(self, BlobKind::Partners, partners)
    }

    fn load_history(&self) -> Result<Vec<HistoryRecord>> {
        load_list(self, BlobKind::FinancialHistory)
    }

    fn save_history(&self, records: &[HistoryRecord]) -> Result<()> {
        save_list(self, BlobKind::FinancialHistory, records)
    }
}

fn load_list<S, T>(storage: &S, kind: BlobKind) -> Result<Vec<T>>
where
    S: StorageBackend + ?Sized,
    T: DeserializeOwned,
{
    match storage.read_blob(kind)? {
        Some(data) if !data.trim().is_empty() => Ok(serde_json::from_str(&data)?),
        _ => Ok(Vec::new()),
    }
}

fn save_list<S, T>(storage: &S, kind: BlobKind, items: &[T]) -> Result<()>
where
    S: StorageBackend + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string_pretty(items)?;
    storage.write_blob(kind, &json)
}

impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    fn read_blob(&self, kind: BlobKind) -> Result<Option<String>> {
        (**self).read_blob(kind)
    }

    fn write_blob(&self, kind: BlobKind, data: &str) -> Result<()> {
        (**self).write_blob(kind, data)
    }
}
