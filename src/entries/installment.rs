use super::dates::{month_index, parse_day_month_year};
use super::entry::FinancialEntry;

/// Outcome of resolving an entry against its recurring series, if any.
///
/// `Fixed` carries the one-based occurrence number and the series length,
/// rendered for display via [`InstallmentResolution::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallmentResolution {
    NotFixed,
    Fixed { number: u32, total: u32 },
}

impl InstallmentResolution {
    pub fn is_fixed(&self) -> bool {
        matches!(self, InstallmentResolution::Fixed { .. })
    }

    /// The bare `"k/m"` installment label, or `None` outside a series.
    pub fn label(&self) -> Option<String> {
        match self {
            InstallmentResolution::Fixed { number, total } => Some(format!("{}/{}", number, total)),
            InstallmentResolution::NotFixed => None,
        }
    }
}

/// Determines whether `candidate` belongs to a recurring series and, if so,
/// which occurrence it is.
///
/// The series template is the entry sharing the candidate's `(name, center)`
/// pair that carries `is_fixed` and a duration. Membership is re-derived from
/// the template on every call; nothing is cached or persisted, so deleting
/// the template declassifies every occurrence on the next pass. Occurrences
/// are matched on calendar month only: any day within the Nth month after the
/// template's month counts as occurrence N+1, with the template's own month
/// being occurrence 1.
///
/// Every unclassifiable input (no template, missing or zero duration,
/// unparseable dates, month offset outside the series window) degrades to
/// `NotFixed`; this function never fails.
pub fn resolve_installment(
    candidate: &FinancialEntry,
    entries: &[FinancialEntry],
) -> InstallmentResolution {
    let template = match entries.iter().find(|entry| {
        entry.is_fixed && entry.name == candidate.name && entry.center == candidate.center
    }) {
        Some(template) => template,
        None => return InstallmentResolution::NotFixed,
    };
    let total = match template.fixed_duration_months {
        Some(total) if total > 0 => total,
        _ => return InstallmentResolution::NotFixed,
    };

    // The template is always displayed as occurrence 1, whatever its date.
    if candidate.id == template.id {
        return InstallmentResolution::Fixed { number: 1, total };
    }

    let template_date = match parse_day_month_year(&template.date) {
        Some(date) => date,
        None => return InstallmentResolution::NotFixed,
    };
    let candidate_date = match parse_day_month_year(&candidate.date) {
        Some(date) => date,
        None => return InstallmentResolution::NotFixed,
    };

    let months_diff = month_index(candidate_date) - month_index(template_date);
    let number = months_diff + 1;
    if number < 1 || number as u32 > total {
        return InstallmentResolution::NotFixed;
    }

    InstallmentResolution::Fixed {
        number: number as u32,
        total,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::entries::entry::EntryKind;

    fn expense(name: &str, center: Uuid, date: &str) -> FinancialEntry {
        FinancialEntry::new(EntryKind::Expense, name, center, date, 100.0)
    }

    #[test]
    fn label_renders_bare_fraction() {
        let fixed = InstallmentResolution::Fixed {
            number: 3,
            total: 12,
        };
        assert_eq!(fixed.label(), Some("3/12".into()));
        assert_eq!(InstallmentResolution::NotFixed.label(), None);
    }

    #[test]
    fn zero_duration_template_classifies_nothing() {
        let center = Uuid::new_v4();
        let template = expense("Lease", center, "15/01/2024").fixed(0);
        let entries = vec![template.clone()];
        assert_eq!(
            resolve_installment(&template, &entries),
            InstallmentResolution::NotFixed
        );
    }

    #[test]
    fn template_with_bad_date_still_labels_itself() {
        let center = Uuid::new_v4();
        let template = expense("Lease", center, "not a date").fixed(6);
        let entries = vec![template.clone()];
        // Step order: the self-reference check comes before date parsing.
        assert_eq!(
            resolve_installment(&template, &entries),
            InstallmentResolution::Fixed { number: 1, total: 6 }
        );
    }
}
