//! Container rental records as served by the rental spreadsheet API.
//!
//! The API returns one JSON object per spreadsheet row, keyed by the Hebrew
//! column headers. Those labels are fixed here, at the boundary, and mapped
//! onto named fields. Spreadsheet cells are loosely typed (a container number
//! may arrive as a JSON number, an empty cell as `null` or `""`), so the field
//! deserializers below accept any scalar.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::status::ContainerStatus;

/// A single container rental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Name of the renting customer.
    #[serde(rename = "שם לקוח", default, deserialize_with = "text")]
    pub customer_name: String,

    /// Container number, unique among active rentals.
    #[serde(rename = "מספר מכולה ירדה", default, deserialize_with = "text")]
    pub container_id: String,

    /// Drop-off address.
    #[serde(rename = "כתובת", default, deserialize_with = "text")]
    pub address: String,

    /// When the container was ordered. `None` if the cell is empty or not a
    /// recognizable date.
    #[serde(rename = "תאריך הזמנה", default, deserialize_with = "order_date")]
    pub order_date: Option<DateTime<Utc>>,

    /// Rental status.
    #[serde(rename = "סטטוס", default, deserialize_with = "status")]
    pub status: ContainerStatus,

    /// Free-text notes.
    #[serde(
        rename = "הערות",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl ContainerRecord {
    /// Returns `true` if the container is still out with the customer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// All container records returned for one customer.
///
/// A record set is never edited in place; a new lookup replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(Vec<ContainerRecord>);

impl RecordSet {
    /// Wrap the records of one lookup.
    #[must_use]
    pub const fn new(records: Vec<ContainerRecord>) -> Self {
        Self(records)
    }

    /// All records, in the order the API returned them.
    #[must_use]
    pub fn records(&self) -> &[ContainerRecord] {
        &self.0
    }

    /// Number of records, closed ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the lookup matched nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The customer the set belongs to, taken from the first record.
    #[must_use]
    pub fn customer_name(&self) -> Option<&str> {
        self.0.first().map(|r| r.customer_name.as_str())
    }

    /// Records whose container has not been returned.
    pub fn active(&self) -> impl Iterator<Item = &ContainerRecord> {
        self.0.iter().filter(|r| r.is_active())
    }

    /// Find a record by container number. Identifiers are assumed unique;
    /// the first match wins.
    #[must_use]
    pub fn find(&self, container_id: &str) -> Option<&ContainerRecord> {
        let container_id = container_id.trim();
        self.0.iter().find(|r| r.container_id == container_id)
    }
}

impl From<Vec<ContainerRecord>> for RecordSet {
    fn from(records: Vec<ContainerRecord>) -> Self {
        Self(records)
    }
}

impl IntoIterator for RecordSet {
    type Item = ContainerRecord;
    type IntoIter = std::vec::IntoIter<ContainerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parse an order date cell.
///
/// Accepts RFC 3339 timestamps (what the spreadsheet API emits for date
/// cells), `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` and `DD/MM/YYYY`. Dates without
/// a time are taken as midnight UTC.
#[must_use]
pub fn parse_order_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    ["%Y-%m-%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Render a scalar cell as text.
fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_text(value).unwrap_or_default())
}

fn status<'de, D>(deserializer: D) -> Result<ContainerStatus, D::Error>
where
    D: Deserializer<'de>,
{
    // Compared verbatim against the closed value, so never trimmed
    let value = Value::deserialize(deserializer)?;
    Ok(ContainerStatus::new(match value {
        Value::String(s) => s,
        other => scalar_to_text(other).unwrap_or_default(),
    }))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_text(value).filter(|s| !s.is_empty()))
}

fn order_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => parse_order_date(&s),
        _ => None,
    })
}
