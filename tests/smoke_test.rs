use carteira_core::{
    init,
    ledger::{MonthRef, Transaction, TransactionKind},
    storage::{JsonKvStore, TransactionStore},
    summary,
};
use chrono::NaiveDate;
use tempfile::TempDir;

#[test]
fn store_to_screens_smoke() {
    init();

    let temp = TempDir::new().expect("temp dir");
    let kv = JsonKvStore::new(Some(temp.path().to_path_buf())).expect("kv store");
    let store = TransactionStore::new(kv, "@carteira");

    let transactions = vec![
        Transaction::new(
            "Salário",
            "3500",
            TransactionKind::Entry,
            Some("salary".into()),
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        ),
        Transaction::new(
            "Gasolina",
            "180.50",
            TransactionKind::Expense,
            Some("car".into()),
            NaiveDate::from_ymd_opt(2023, 1, 12).unwrap(),
        ),
    ];
    store.save("maria", &transactions).expect("save");

    let loaded = store.load("maria").expect("load");
    let dashboard = summary::build_dashboard(&loaded).expect("dashboard");
    assert_eq!(dashboard.highlights.total.amount_formatted, "R$ 3.319,50");

    let resume =
        summary::monthly_breakdown(&loaded, MonthRef::new(2023, 1).unwrap()).expect("resume");
    assert_eq!(resume.len(), 1);
    assert_eq!(resume[0].key, "car");
    assert_eq!(resume[0].percent, 100);
}
