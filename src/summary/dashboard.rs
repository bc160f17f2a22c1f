use chrono::NaiveDate;
use uuid::Uuid;

use crate::currency::{format_brl, format_day_month, format_short_date};
use crate::errors::CoreError;
use crate::ledger::{Transaction, TransactionKind};

/// Shown when a bucket has no transaction to describe.
pub const NO_TRANSACTIONS: &str = "Não há transações";

/// One of the three dashboard buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub amount: f64,
    pub amount_formatted: String,
    pub last_transaction: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightData {
    pub entries: Highlight,
    pub expenses: Highlight,
    pub total: Highlight,
}

/// A transaction prepared for the listing: amount and date already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedTransaction {
    pub id: Uuid,
    pub name: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub highlights: HighlightData,
    pub listing: Vec<ListedTransaction>,
}

/// Latest date among transactions of the given kind, if any exists.
pub fn last_transaction_date(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Option<NaiveDate> {
    transactions
        .iter()
        .filter(|item| item.kind == kind)
        .map(|item| item.date)
        .max()
}

/// Builds the dashboard in a single pass: running totals per bucket, the
/// formatted listing, and the "last transaction" interval strings.
pub fn build_dashboard(transactions: &[Transaction]) -> Result<DashboardSummary, CoreError> {
    let mut entries_total = 0.0;
    let mut expenses_total = 0.0;
    let mut listing = Vec::with_capacity(transactions.len());

    for item in transactions {
        let value = item.amount_value()?;
        match item.kind {
            TransactionKind::Entry => entries_total += value,
            TransactionKind::Expense => expenses_total += value,
        }
        listing.push(ListedTransaction {
            id: item.id,
            name: item.name.clone(),
            amount: format_brl(value),
            kind: item.kind,
            category: item.category.clone(),
            date: format_short_date(item.date),
        });
    }

    let total = entries_total - expenses_total;
    let last_entry = last_transaction_date(transactions, TransactionKind::Entry);
    let last_expense = last_transaction_date(transactions, TransactionKind::Expense);

    // The total bucket spans the month start to the latest movement; expenses
    // win when both kinds exist.
    let total_interval = match (last_entry, last_expense) {
        (Some(entry), None) => format!("01 a {}", format_day_month(entry)),
        (None, None) => NO_TRANSACTIONS.to_string(),
        (_, Some(expense)) => format!("01 a {}", format_day_month(expense)),
    };

    let highlights = HighlightData {
        entries: Highlight {
            amount: entries_total,
            amount_formatted: format_brl(entries_total),
            last_transaction: last_entry
                .map(|date| format!("Última entrada dia {}", format_day_month(date)))
                .unwrap_or_else(|| NO_TRANSACTIONS.to_string()),
        },
        expenses: Highlight {
            amount: expenses_total,
            amount_formatted: format_brl(expenses_total),
            last_transaction: last_expense
                .map(|date| format!("Última saída dia {}", format_day_month(date)))
                .unwrap_or_else(|| NO_TRANSACTIONS.to_string()),
        },
        total: Highlight {
            amount: total,
            amount_formatted: format_brl(total),
            last_transaction: total_interval,
        },
    };

    Ok(DashboardSummary {
        highlights,
        listing,
    })
}
