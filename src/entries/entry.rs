use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::parse_day_month_year;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Expense,
    Receipt,
}

/// A single expense or receipt record attached to a cost center.
///
/// The `date` field stays in its day/month/year textual form and is parsed
/// per-entry; an entry with a malformed date is still a valid record, it just
/// never participates in month-based classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    pub name: String,
    pub center: Uuid,
    pub date: String,
    pub value: f64,
    #[serde(default)]
    pub is_fixed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_duration_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialEntry {
    pub fn new(
        kind: EntryKind,
        name: impl Into<String>,
        center: Uuid,
        date: impl Into<String>,
        value: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            center,
            date: date.into(),
            value,
            is_fixed: false,
            fixed_duration_months: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks this entry as the template of a recurring series spanning
    /// `duration_months` monthly occurrences.
    pub fn fixed(mut self, duration_months: u32) -> Self {
        self.is_fixed = true;
        self.fixed_duration_months = Some(duration_months);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_day_month_year(&self.date)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
