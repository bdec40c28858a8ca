//! Inputs the host hands to the view on each render cycle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Record, ViewSettings, ViewState};

/// A category known to the host, used to title the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Snapshot of the host's view inputs.
///
/// Entries are only rebuilt when `fetch_marker` differs from the last one
/// seen; other fields are re-read on every update.
///
/// # JSON shape
///
/// ```json
/// {
///   "records": [{ "id": "r1", "title": "Apple Pie", "createdAt": "2023-03-01T00:00:00Z" }],
///   "viewState": { "instanceOrder": { "r1": 0 } },
///   "viewSettings": { "allowManualOrder": true, "allowGrouping": false },
///   "fetchMarker": "1",
///   "categoryId": "recipes",
///   "categoryContext": { "recipes": { "id": "recipes", "name": "Recipes" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProps {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub view_state: Option<ViewState>,
    #[serde(default)]
    pub view_settings: Option<ViewSettings>,
    /// Opaque value that changes whenever the host fetched new data.
    #[serde(default)]
    pub fetch_marker: String,
    /// Category the view is scoped to.
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_context: HashMap<String, Category>,
}

impl HostProps {
    /// Name of the view's category, looked up in the category context.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category_id
            .as_ref()
            .and_then(|id| self.category_context.get(id))
            .map(|category| category.name.as_str())
    }
}
