//! Dashboard derivations over a customer's record set.
//!
//! Everything here is recomputed from scratch whenever the record set
//! changes. The current instant is always passed in explicitly.
//!
//! ```
//! use chrono::{Duration, Utc};
//! use container_portal_core::{ContainerRecord, ContainerStatus, Dashboard, RecordSet};
//!
//! let now = Utc::now();
//! let record = |id: &str, days: i64, status: &str| ContainerRecord {
//!     customer_name: "Dana".to_owned(),
//!     container_id: id.to_owned(),
//!     address: "1 Herzl St".to_owned(),
//!     order_date: Some(now - Duration::days(days)),
//!     status: ContainerStatus::new(status),
//!     notes: None,
//! };
//!
//! let records = RecordSet::new(vec![
//!     record("A", 15, "פעיל"),
//!     record("B", 30, ContainerStatus::CLOSED),
//! ]);
//! let dashboard = Dashboard::build(&records, now);
//!
//! assert_eq!(dashboard.active_count(), 1);
//! assert_eq!(dashboard.overdue_count(), 1);
//! ```

use chrono::{DateTime, Utc};

use crate::types::{ContainerRecord, ContainerStatus, RecordSet};

/// Days a container may stay out before it is overdue. A container is
/// overdue once the elapsed days strictly exceed this.
pub const OVERDUE_THRESHOLD_DAYS: i64 = 10;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole calendar days elapsed since the record's order date, rounded down.
///
/// Returns `None` when the record has no usable order date.
#[must_use]
pub fn days_passed(record: &ContainerRecord, now: DateTime<Utc>) -> Option<i64> {
    record
        .order_date
        .map(|ordered| (now - ordered).num_milliseconds().div_euclid(MILLIS_PER_DAY))
}

/// Returns `true` if the container is active and has been out for more than
/// [`OVERDUE_THRESHOLD_DAYS`] days.
#[must_use]
pub fn is_overdue(record: &ContainerRecord, now: DateTime<Utc>) -> bool {
    record.is_active() && days_passed(record, now).is_some_and(|d| d > OVERDUE_THRESHOLD_DAYS)
}

/// Badge shown next to a container in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowStatus {
    /// Out with the customer for at most the threshold.
    Active,
    /// Out for more than [`OVERDUE_THRESHOLD_DAYS`] days.
    Overdue,
}

/// One line of the containers table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow<'a> {
    /// The active rental this row shows.
    pub record: &'a ContainerRecord,
    /// Whole days since the order date. `None` without a usable date.
    pub days_passed: Option<i64>,
    /// Badge for the row.
    pub status: RowStatus,
}

impl ContainerRow<'_> {
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.status == RowStatus::Overdue
    }
}

/// Full field set of one container, for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDetails<'a> {
    /// Container number.
    pub container_id: &'a str,
    /// Name of the renting customer.
    pub customer_name: &'a str,
    /// Drop-off address.
    pub address: &'a str,
    /// Order date, if the cell held a recognizable date.
    pub order_date: Option<DateTime<Utc>>,
    /// Status exactly as stored.
    pub status: &'a ContainerStatus,
    /// `None` when the rental has no notes; callers render a fallback.
    pub notes: Option<&'a str>,
}

impl<'a> From<&'a ContainerRecord> for ContainerDetails<'a> {
    fn from(record: &'a ContainerRecord) -> Self {
        Self {
            container_id: &record.container_id,
            customer_name: &record.customer_name,
            address: &record.address,
            order_date: record.order_date,
            status: &record.status,
            notes: record.notes.as_deref(),
        }
    }
}

/// Derived view of a customer's record set.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    records: &'a RecordSet,
    rows: Vec<ContainerRow<'a>>,
    overdue_count: usize,
}

impl<'a> Dashboard<'a> {
    /// Derive the dashboard for `records` as of `now`.
    #[must_use]
    pub fn build(records: &'a RecordSet, now: DateTime<Utc>) -> Self {
        let rows: Vec<_> = records
            .active()
            .map(|record| {
                let days = days_passed(record, now);
                let status = if is_overdue(record, now) {
                    RowStatus::Overdue
                } else {
                    RowStatus::Active
                };
                ContainerRow {
                    record,
                    days_passed: days,
                    status,
                }
            })
            .collect();
        let overdue_count = rows.iter().filter(|row| row.is_overdue()).count();

        Self {
            records,
            rows,
            overdue_count,
        }
    }

    /// Name of the customer the record set belongs to.
    #[must_use]
    pub fn customer_name(&self) -> &'a str {
        self.records.customer_name().unwrap_or_default()
    }

    /// Rows for the active containers, in record order.
    #[must_use]
    pub fn rows(&self) -> &[ContainerRow<'a>] {
        &self.rows
    }

    /// Number of containers currently out with the customer.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of active containers past the threshold.
    #[must_use]
    pub const fn overdue_count(&self) -> usize {
        self.overdue_count
    }

    /// Value of the notification badge.
    #[must_use]
    pub const fn notification_badge(&self) -> usize {
        self.overdue_count
    }

    /// Look up a container by number for the detail view.
    ///
    /// Searches the whole record set, closed rentals included.
    #[must_use]
    pub fn details(&self, container_id: &str) -> Option<ContainerDetails<'a>> {
        self.records.find(container_id).map(ContainerDetails::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn record(id: &str, ordered: Option<DateTime<Utc>>, status: &str) -> ContainerRecord {
        ContainerRecord {
            customer_name: "ישראל ישראלי".to_owned(),
            container_id: id.to_owned(),
            address: "הרצל 1".to_owned(),
            order_date: ordered,
            status: ContainerStatus::new(status),
            notes: None,
        }
    }

    fn days_ago(days: i64) -> Option<DateTime<Utc>> {
        Some(now() - Duration::days(days))
    }

    #[test]
    fn test_days_passed_floors() {
        let r = record("1", Some(now() - Duration::hours(47)), "פעיל");
        assert_eq!(days_passed(&r, now()), Some(1));

        let r = record("1", Some(now() - Duration::hours(48)), "פעיל");
        assert_eq!(days_passed(&r, now()), Some(2));
    }

    #[test]
    fn test_days_passed_future_order_is_negative() {
        let r = record("1", Some(now() + Duration::hours(1)), "פעיל");
        assert_eq!(days_passed(&r, now()), Some(-1));
    }

    #[test]
    fn test_days_passed_without_date() {
        let r = record("1", None, "פעיל");
        assert_eq!(days_passed(&r, now()), None);
        assert!(!is_overdue(&r, now()));
    }

    #[test]
    fn test_overdue_boundary() {
        assert!(!is_overdue(&record("1", days_ago(10), "פעיל"), now()));
        assert!(is_overdue(&record("1", days_ago(11), "פעיל"), now()));
        assert!(!is_overdue(&record("1", days_ago(0), "פעיל"), now()));
    }

    #[test]
    fn test_closed_is_never_overdue() {
        let r = record("1", days_ago(400), ContainerStatus::CLOSED);
        assert!(!is_overdue(&r, now()));
    }

    #[test]
    fn test_counts_for_customer_scenario() {
        let records = RecordSet::new(vec![
            record("A", days_ago(15), "active"),
            record("B", days_ago(30), ContainerStatus::CLOSED),
        ]);

        let dashboard = Dashboard::build(&records, now());
        assert_eq!(dashboard.active_count(), 1);
        assert_eq!(dashboard.overdue_count(), 1);
        assert_eq!(dashboard.notification_badge(), 1);
        assert_eq!(dashboard.rows()[0].record.container_id, "A");
        assert_eq!(dashboard.rows()[0].days_passed, Some(15));
        assert_eq!(dashboard.rows()[0].status, RowStatus::Overdue);
    }

    #[test]
    fn test_active_count_is_total_minus_closed() {
        let statuses = ["פעיל", "סגור", "פעיל", "סגור", "סגור", "ממתין"];
        let records = RecordSet::new(
            statuses
                .iter()
                .enumerate()
                .map(|(i, s)| record(&i.to_string(), days_ago(1), s))
                .collect(),
        );

        let dashboard = Dashboard::build(&records, now());
        assert_eq!(dashboard.active_count(), statuses.len() - 3);
        assert_eq!(dashboard.overdue_count(), 0);
        assert!(
            dashboard
                .rows()
                .iter()
                .all(|row| !row.record.status.is_closed())
        );
    }

    #[test]
    fn test_rows_keep_record_order() {
        let records = RecordSet::new(vec![
            record("3", days_ago(2), "פעיל"),
            record("1", days_ago(20), "פעיל"),
            record("2", days_ago(5), "פעיל"),
        ]);

        let dashboard = Dashboard::build(&records, now());
        let ids: Vec<_> = dashboard
            .rows()
            .iter()
            .map(|row| row.record.container_id.as_str())
            .collect();
        assert_eq!(ids, ["3", "1", "2"]);
        assert_eq!(dashboard.overdue_count(), 1);
    }

    #[test]
    fn test_empty_record_set() {
        let records = RecordSet::default();
        let dashboard = Dashboard::build(&records, now());
        assert_eq!(dashboard.customer_name(), "");
        assert_eq!(dashboard.active_count(), 0);
        assert_eq!(dashboard.overdue_count(), 0);
    }

    #[test]
    fn test_details_lookup() {
        let mut with_notes = record("A", days_ago(3), "פעיל");
        with_notes.notes = Some("ליד השער".to_owned());
        let records = RecordSet::new(vec![
            with_notes,
            record("B", days_ago(30), ContainerStatus::CLOSED),
        ]);
        let dashboard = Dashboard::build(&records, now());

        let details = dashboard.details("A").unwrap();
        assert_eq!(details.container_id, "A");
        assert_eq!(details.customer_name, "ישראל ישראלי");
        assert_eq!(details.address, "הרצל 1");
        assert_eq!(details.order_date, days_ago(3));
        assert_eq!(details.notes, Some("ליד השער"));

        let closed = dashboard.details("B").unwrap();
        assert!(closed.status.is_closed());
        assert_eq!(closed.notes, None);

        assert!(dashboard.details("Z").is_none());
    }
}
