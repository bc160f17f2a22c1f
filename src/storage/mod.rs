pub mod json_store;
pub mod transactions;

use crate::errors::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Abstraction over local key-value blob stores. Values are opaque
/// serialized strings; a missing key is not an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_store::JsonKvStore;
pub use transactions::TransactionStore;
