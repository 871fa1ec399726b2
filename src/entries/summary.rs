use chrono::Datelike;
use uuid::Uuid;

use super::book::FinanceBook;
use super::entry::EntryKind;

/// Per-center totals for one calendar month. `counted` is the number of
/// entries that contributed; entries with unparseable dates are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub center: Uuid,
    pub year: i32,
    pub month: u32,
    pub receipts: f64,
    pub expenses: f64,
    pub net: f64,
    pub counted: usize,
}

pub fn summarize_month(book: &FinanceBook, center: Uuid, year: i32, month: u32) -> MonthlySummary {
    let mut receipts = 0.0;
    let mut expenses = 0.0;
    let mut counted = 0usize;

    for entry in book.entries.iter().filter(|entry| entry.center == center) {
        let date = match entry.parsed_date() {
            Some(date) => date,
            None => continue,
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        match entry.kind {
            EntryKind::Receipt => receipts += entry.value,
            EntryKind::Expense => expenses += entry.value,
        }
        counted += 1;
    }

    MonthlySummary {
        center,
        year,
        month,
        receipts,
        expenses,
        net: receipts - expenses,
        counted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::center::CostCenter;
    use crate::entries::entry::FinancialEntry;

    #[test]
    fn totals_split_by_kind_and_skip_bad_dates() {
        let mut book = FinanceBook::new("Farm");
        let center = book.add_center(CostCenter::new("North field"));
        let other = book.add_center(CostCenter::new("South field"));

        book.add_entry(FinancialEntry::new(
            EntryKind::Expense,
            "Diesel",
            center,
            "02/03/2024",
            300.0,
        ));
        book.add_entry(FinancialEntry::new(
            EntryKind::Receipt,
            "Milk sale",
            center,
            "20/03/2024",
            1250.0,
        ));
        book.add_entry(FinancialEntry::new(
            EntryKind::Expense,
            "Seeds",
            center,
            "bad date",
            90.0,
        ));
        book.add_entry(FinancialEntry::new(
            EntryKind::Expense,
            "Diesel",
            other,
            "05/03/2024",
            120.0,
        ));
        book.add_entry(FinancialEntry::new(
            EntryKind::Expense,
            "Diesel",
            center,
            "02/04/2024",
            310.0,
        ));

        let summary = summarize_month(&book, center, 2024, 3);
        assert_eq!(summary.counted, 2);
        assert_eq!(summary.receipts, 1250.0);
        assert_eq!(summary.expenses, 300.0);
        assert_eq!(summary.net, 950.0);
    }
}
