//! Host record and menu entry models.
//!
//! [`Record`] is the host-owned data item, read-only to this crate. [`MenuEntry`]
//! is the lightweight projection the menu works with: it is rebuilt from the
//! records on every data refresh and only its `order` changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rank assigned to entries that have no persisted position.
pub const MIN_ORDER: i64 = 0;

/// A data record supplied by the host.
///
/// Field names follow the host's JSON shape (`createdAt`, `categoryId`), so a
/// host payload deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Host identifier, unique within a fetch.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Category the record belongs to.
    #[serde(default)]
    pub category_id: Option<String>,
}

impl Record {
    /// Creates a record without a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use docindex::Record;
    ///
    /// let record = Record::new("r1", "Apple Pie", Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap());
    /// assert_eq!(record.title, "Apple Pie");
    /// assert!(record.category_id.is_none());
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at,
            category_id: None,
        }
    }
}

/// Display-ready projection of a [`Record`].
///
/// `normalized_title` is the diacritic-stripped title used for indexing; it is
/// never displayed. `order` comes from the persisted view state, or
/// [`MIN_ORDER`] when the id has no persisted rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub title: String,
    pub normalized_title: String,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}
