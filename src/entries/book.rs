use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::FinanceError;

use super::center::CostCenter;
use super::entry::{EntryKind, FinancialEntry};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// In-memory store of cost centers and their financial entries. Callers hand
/// snapshots of its entry lists to the resolution helpers; the book itself
/// never reaches back into them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceBook {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub centers: Vec<CostCenter>,
    #[serde(default)]
    pub entries: Vec<FinancialEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "FinanceBook::schema_version_default")]
    pub schema_version: u8,
}

impl FinanceBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            centers: Vec::new(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_center(&mut self, center: CostCenter) -> Uuid {
        let id = center.id;
        self.centers.push(center);
        self.touch();
        id
    }

    pub fn add_entry(&mut self, entry: FinancialEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        self.touch();
        id
    }

    /// Replaces the stored entry carrying `updated.id`. The replacement is
    /// authoritative for the whole series when it is a template; membership
    /// is re-derived on the next resolution pass.
    pub fn update_entry(&mut self, mut updated: FinancialEntry) -> Result<(), FinanceError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == updated.id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("entry `{}` not found", updated.id)))?;
        updated.created_at = slot.created_at;
        updated.touch();
        *slot = updated;
        self.touch();
        Ok(())
    }

    pub fn remove_entry(&mut self, id: Uuid) -> Result<FinancialEntry, FinanceError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("entry `{}` not found", id)))?;
        let removed = self.entries.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn entry(&self, id: Uuid) -> Option<&FinancialEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn center(&self, id: Uuid) -> Option<&CostCenter> {
        self.centers.iter().find(|center| center.id == id)
    }

    /// Snapshot of all entries of one kind, across every center. This is the
    /// collection the installment resolver expects.
    pub fn entries_of_kind(&self, kind: EntryKind) -> Vec<FinancialEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .cloned()
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
