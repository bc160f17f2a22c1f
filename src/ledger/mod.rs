//! Transaction records, the static category taxonomy, and month selection.

pub mod category;
pub mod month;
pub mod transaction;

pub use category::{category_by_key, Category, CATEGORIES};
pub use month::MonthRef;
pub use transaction::{Transaction, TransactionKind};
