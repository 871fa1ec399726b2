use chrono::Datelike;
use uuid::Uuid;

use super::entry::{EntryKind, FinancialEntry};

/// Multi-criteria filter for entry list views. Criteria combine with AND; an
/// empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub kind: Option<EntryKind>,
    pub center: Option<Uuid>,
    pub month: Option<(i32, u32)>,
    pub fixed_only: bool,
    pub search: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn center(mut self, center: Uuid) -> Self {
        self.center = Some(center);
        self
    }

    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    pub fn fixed_only(mut self) -> Self {
        self.fixed_only = true;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Entries whose date fails to parse never match a month criterion.
    pub fn matches(&self, entry: &FinancialEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(center) = self.center {
            if entry.center != center {
                return false;
            }
        }
        if self.fixed_only && !entry.is_fixed {
            return false;
        }
        if let Some((year, month)) = self.month {
            match entry.parsed_date() {
                Some(date) => {
                    if date.year() != year || date.month() != month {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(query) = &self.search {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !entry.name.to_lowercase().contains(&query) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, entries: &'a [FinancialEntry]) -> Vec<&'a FinancialEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, name: &str, center: Uuid, date: &str) -> FinancialEntry {
        FinancialEntry::new(kind, name, center, date, 50.0)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let center = Uuid::new_v4();
        let diesel = entry(EntryKind::Expense, "Diesel", center, "02/03/2024");
        assert!(EntryFilter::new().matches(&diesel));
    }

    #[test]
    fn criteria_combine_with_and() {
        let center = Uuid::new_v4();
        let other = Uuid::new_v4();
        let entries = vec![
            entry(EntryKind::Expense, "Diesel", center, "02/03/2024"),
            entry(EntryKind::Expense, "Diesel", other, "02/03/2024"),
            entry(EntryKind::Receipt, "Milk sale", center, "10/03/2024"),
            entry(EntryKind::Expense, "Diesel", center, "02/04/2024"),
        ];

        let filter = EntryFilter::new()
            .kind(EntryKind::Expense)
            .center(center)
            .month(2024, 3);
        let matched = filter.apply(&entries);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Diesel");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let center = Uuid::new_v4();
        let payroll = entry(EntryKind::Expense, "Payroll March", center, "05/03/2024");
        assert!(EntryFilter::new().search("payroll").matches(&payroll));
        assert!(EntryFilter::new().search("  MARCH ").matches(&payroll));
        assert!(!EntryFilter::new().search("april").matches(&payroll));
    }

    #[test]
    fn unparseable_date_never_matches_a_month() {
        let center = Uuid::new_v4();
        let broken = entry(EntryKind::Expense, "Diesel", center, "??/??/????");
        assert!(!EntryFilter::new().month(2024, 3).matches(&broken));
        assert!(EntryFilter::new().center(center).matches(&broken));
    }

    #[test]
    fn fixed_only_excludes_plain_entries() {
        let center = Uuid::new_v4();
        let plain = entry(EntryKind::Expense, "Diesel", center, "02/03/2024");
        let template = entry(EntryKind::Expense, "Lease", center, "01/01/2024").fixed(12);
        let filter = EntryFilter::new().fixed_only();
        assert!(!filter.matches(&plain));
        assert!(filter.matches(&template));
    }
}
