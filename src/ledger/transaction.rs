use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Direction of a transaction: money coming in or going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "positive")]
    Entry,
    #[serde(rename = "negative")]
    Expense,
}

/// A stored transaction record. Created outside this layer; immutable once stored.
///
/// `amount` stays a decimal string in the serialized form; parsing happens at
/// aggregation time through [`Transaction::amount_value`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionKind,
        category: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount: amount.into(),
            kind,
            category,
            date,
        }
    }

    /// Parses the stored decimal string, rejecting records that do not carry a number.
    pub fn amount_value(&self) -> Result<f64, CoreError> {
        self.amount
            .trim()
            .parse::<f64>()
            .map_err(|err| CoreError::MalformedRecord {
                id: self.id.to_string(),
                reason: err.to_string(),
            })
    }
}

/// Stored dates are ISO strings: a plain date, or a full RFC 3339 timestamp
/// written by older record producers. Serializes as the plain date.
mod iso_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|stamp| stamp.date_naive())
            .map_err(serde::de::Error::custom)
    }
}
