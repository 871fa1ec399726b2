//! Financial entry domain models, the in-memory book, and resolution helpers.

pub mod book;
pub mod center;
pub mod dates;
pub mod entry;
pub mod filter;
pub mod installment;
pub mod summary;

pub use book::FinanceBook;
pub use center::CostCenter;
pub use entry::{EntryKind, FinancialEntry};
pub use filter::EntryFilter;
pub use installment::{resolve_installment, InstallmentResolution};
pub use summary::{summarize_month, MonthlySummary};
