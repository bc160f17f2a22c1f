use tracing::debug;

use crate::ledger::Transaction;

use super::{KeyValueStore, Result};

/// Namespaced access to the serialized per-user transaction list.
pub struct TransactionStore<S: KeyValueStore> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> TransactionStore<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// The store key for a user's list: `<namespace>:transactions_user:<userId>`.
    pub fn key_for(&self, user_id: &str) -> String {
        format!("{}:transactions_user:{}", self.namespace, user_id)
    }

    /// Loads the user's transactions. A missing value defaults to the empty list.
    pub fn load(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let key = self.key_for(user_id);
        let transactions = match self.store.get(&key)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        debug!(user_id, count = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    pub fn save(&self, user_id: &str, transactions: &[Transaction]) -> Result<()> {
        let key = self.key_for(user_id);
        let raw = serde_json::to_string_pretty(transactions)?;
        self.store.put(&key, &raw)?;
        debug!(user_id, count = transactions.len(), "saved transactions");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use crate::storage::JsonKvStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (TransactionStore<JsonKvStore>, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let kv = JsonKvStore::new(Some(temp.path().to_path_buf())).expect("kv store");
        (TransactionStore::new(kv, "@carteira"), temp)
    }

    fn sample_transaction() -> Transaction {
        Transaction::new(
            "Salário",
            "3500",
            TransactionKind::Entry,
            Some("salary".into()),
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
        )
    }

    #[test]
    fn key_embeds_namespace_and_user() {
        let (store, _guard) = store_with_temp_dir();
        assert_eq!(store.key_for("maria"), "@carteira:transactions_user:maria");
    }

    #[test]
    fn missing_user_loads_empty_list() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.load("maria").expect("load").is_empty());
    }

    #[test]
    fn save_and_load_roundtrip_per_user() {
        let (store, _guard) = store_with_temp_dir();
        let transactions = vec![sample_transaction()];
        store.save("maria", &transactions).expect("save");

        let loaded = store.load("maria").expect("load");
        assert_eq!(loaded, transactions);
        assert!(store.load("joao").expect("other user").is_empty());
    }
}
