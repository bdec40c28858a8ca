//! Month/year bucketing of ordered entries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::MenuEntry;

/// A run of entries created in the same calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// Bucket label such as `"Mar-2023"`.
    pub label: String,
    pub entries: Vec<&'a MenuEntry>,
}

/// Formats the bucket label for a creation timestamp, e.g. `"Jan-2023"`.
///
/// Labels are computed in UTC.
#[must_use]
pub fn month_label(created_at: &DateTime<Utc>) -> String {
    created_at.format("%b-%Y").to_string()
}

/// Partitions `entries` into month buckets.
///
/// Buckets appear in the order their first entry appears; entries keep their
/// input order inside each bucket. Every entry lands in exactly one bucket.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use docindex::pipeline::grouping::group_by_month;
/// use docindex::pipeline::ordering::project;
/// use docindex::{Record, ViewState};
///
/// let records = vec![
///     Record::new("a", "A", Utc.with_ymd_and_hms(2023, 3, 2, 0, 0, 0).unwrap()),
///     Record::new("b", "B", Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()),
/// ];
/// let entries = project(&records, &ViewState::default());
/// let groups = group_by_month(&entries);
///
/// assert_eq!(groups[0].label, "Mar-2023");
/// assert_eq!(groups[1].label, "Mar-2024");
/// ```
#[must_use]
pub fn group_by_month(entries: &[MenuEntry]) -> Vec<MonthGroup<'_>> {
    let mut groups: Vec<MonthGroup<'_>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let label = month_label(&entry.created_at);
        if let Some(&position) = positions.get(&label) {
            groups[position].entries.push(entry);
        } else {
            positions.insert(label.clone(), groups.len());
            groups.push(MonthGroup {
                label,
                entries: vec![entry],
            });
        }
    }

    tracing::trace!(entries = entries.len(), groups = groups.len(), "grouped entries by month");
    groups
}
