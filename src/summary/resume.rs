use crate::currency::format_brl;
use crate::errors::CoreError;
use crate::ledger::{MonthRef, Transaction, TransactionKind, CATEGORIES};

/// Expense total for one taxonomy category within the selected month.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub total: f64,
    pub total_formatted: String,
    pub percent: u8,
    pub percent_formatted: String,
}

/// Sums the selected month's expenses per taxonomy category, in taxonomy
/// order, discarding categories with no spend. Percentages truncate toward
/// zero so they can never sum past 100. A month without expenses yields no
/// rows, which also rules out dividing by a zero total.
pub fn monthly_breakdown(
    transactions: &[Transaction],
    month: MonthRef,
) -> Result<Vec<CategoryTotal>, CoreError> {
    let mut expenses = Vec::new();
    for item in transactions
        .iter()
        .filter(|item| item.kind == TransactionKind::Expense && month.contains(item.date))
    {
        expenses.push((item.category.as_deref(), item.amount_value()?));
    }

    let month_total: f64 = expenses.iter().map(|(_, value)| value).sum();
    if month_total <= 0.0 {
        return Ok(Vec::new());
    }

    let mut totals = Vec::new();
    for category in CATEGORIES.iter() {
        let sum: f64 = expenses
            .iter()
            .filter(|(key, _)| *key == Some(category.key))
            .map(|(_, value)| value)
            .sum();
        if sum > 0.0 {
            let percent = (sum / month_total * 100.0) as u8;
            totals.push(CategoryTotal {
                key: category.key,
                name: category.name,
                color: category.color,
                total: sum,
                total_formatted: format_brl(sum),
                percent,
                percent_formatted: format!("{}%", percent),
            });
        }
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: &str, category: &str, year: i32, month: u32, day: u32) -> Transaction {
        Transaction::new(
            "Despesa",
            amount,
            TransactionKind::Expense,
            Some(category.into()),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        )
    }

    #[test]
    fn single_category_takes_the_whole_month() {
        let transactions = vec![expense("40", "food", 2023, 1, 10)];
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, "Alimentação");
        assert_eq!(totals[0].percent, 100);
        assert_eq!(totals[0].percent_formatted, "100%");
        assert_eq!(totals[0].total_formatted, "R$ 40,00");
    }

    #[test]
    fn other_months_and_entries_are_excluded() {
        let mut transactions = vec![
            expense("40", "food", 2023, 1, 10),
            expense("99", "car", 2023, 2, 3),
        ];
        transactions.push(Transaction::new(
            "Salário",
            "3500",
            TransactionKind::Entry,
            Some("salary".into()),
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        ));
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].key, "food");
    }

    #[test]
    fn empty_month_has_no_rows() {
        let transactions = vec![expense("40", "food", 2023, 1, 10)];
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 3).unwrap()).unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn rows_follow_taxonomy_order() {
        let transactions = vec![
            expense("10", "studies", 2023, 1, 2),
            expense("30", "food", 2023, 1, 8),
            expense("60", "purchases", 2023, 1, 15),
        ];
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).unwrap();
        let keys: Vec<_> = totals.iter().map(|row| row.key).collect();
        assert_eq!(keys, vec!["purchases", "food", "studies"]);
        assert_eq!(totals[0].percent, 60);
        assert_eq!(totals[1].percent, 30);
        assert_eq!(totals[2].percent, 10);
    }

    #[test]
    fn percents_stay_within_bounds() {
        let transactions = vec![
            expense("33.33", "food", 2023, 1, 1),
            expense("33.33", "car", 2023, 1, 2),
            expense("33.33", "leisure", 2023, 1, 3),
        ];
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).unwrap();
        let sum: u32 = totals.iter().map(|row| row.percent as u32).sum();
        assert!(sum <= 100, "percent sum {sum} exceeds 100");
        assert!(totals.iter().all(|row| row.percent <= 100));
    }

    #[test]
    fn unknown_category_widens_the_total_but_adds_no_row() {
        let transactions = vec![
            expense("50", "food", 2023, 1, 10),
            expense("50", "subscriptions", 2023, 1, 12),
        ];
        let totals = monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].percent, 50);
    }
}
