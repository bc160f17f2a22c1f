use carteira_core::ledger::{MonthRef, Transaction, TransactionKind};
use carteira_core::summary::monthly_breakdown;
use chrono::NaiveDate;

fn expense(name: &str, amount: &str, category: &str, month: u32, day: u32) -> Transaction {
    Transaction::new(
        name,
        amount,
        TransactionKind::Expense,
        Some(category.to_string()),
        NaiveDate::from_ymd_opt(2023, month, day).unwrap(),
    )
}

#[test]
fn single_expense_category_takes_the_full_share() {
    let transactions = vec![
        Transaction::new(
            "Salário",
            "100",
            TransactionKind::Entry,
            None,
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        ),
        expense("Mercado", "40", "food", 1, 10),
    ];

    let totals =
        monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).expect("breakdown");
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].name, "Alimentação");
    assert_eq!(totals[0].total_formatted, "R$ 40,00");
    assert_eq!(totals[0].percent_formatted, "100%");
}

#[test]
fn navigation_shifts_rows_one_month_at_a_time() {
    let transactions = vec![
        expense("Mercado", "40", "food", 1, 10),
        expense("Gasolina", "90", "car", 2, 3),
    ];
    let snapshot = transactions.clone();

    let mut month = MonthRef::new(2023, 1).unwrap();
    let january = monthly_breakdown(&transactions, month).expect("january");
    assert_eq!(january[0].key, "food");

    month = month.next();
    let february = monthly_breakdown(&transactions, month).expect("february");
    assert_eq!(february[0].key, "car");

    month = month.previous();
    let back = monthly_breakdown(&transactions, month).expect("back to january");
    assert_eq!(back[0].key, "food");

    // Aggregation never mutates the stored list.
    assert_eq!(transactions, snapshot);
}

#[test]
fn month_without_expenses_yields_no_rows() {
    let transactions = vec![Transaction::new(
        "Salário",
        "3500",
        TransactionKind::Entry,
        Some("salary".into()),
        NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
    )];

    let totals =
        monthly_breakdown(&transactions, MonthRef::new(2023, 3).unwrap()).expect("breakdown");
    assert!(totals.is_empty());
}

#[test]
fn uneven_split_keeps_percents_bounded() {
    let transactions = vec![
        expense("Mercado", "33.40", "food", 1, 2),
        expense("Gasolina", "33.30", "car", 1, 9),
        expense("Cinema", "33.30", "leisure", 1, 16),
        expense("Assinatura", "15.00", "streaming", 1, 20),
    ];

    let totals =
        monthly_breakdown(&transactions, MonthRef::new(2023, 1).unwrap()).expect("breakdown");

    // The unknown `streaming` key widens the month total without a row.
    assert_eq!(totals.len(), 3);
    let sum: u32 = totals.iter().map(|row| row.percent as u32).sum();
    assert!(sum <= 100, "percent sum {sum} exceeds 100");
    assert!(totals.iter().all(|row| row.percent <= 100));
}
