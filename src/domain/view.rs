//! Host-persisted view data: ordering state and display settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::record::MIN_ORDER;

/// Per-view ordering data persisted by the host.
///
/// Maps record ids to their manual rank. Ids missing from the mapping rank at
/// [`MIN_ORDER`]; ids that no longer match a record are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub instance_order: HashMap<String, i64>,
}

impl ViewState {
    /// Returns the persisted rank for `id`, or [`MIN_ORDER`] when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use docindex::ViewState;
    ///
    /// let mut state = ViewState::default();
    /// state.instance_order.insert("a".to_string(), 3);
    /// assert_eq!(state.order_of("a"), 3);
    /// assert_eq!(state.order_of("missing"), 0);
    /// ```
    #[must_use]
    pub fn order_of(&self, id: &str) -> i64 {
        self.instance_order.get(id).copied().unwrap_or(MIN_ORDER)
    }
}

/// Display toggles saved from the settings dialog.
///
/// The two toggles are mutually exclusive in practice: enabling manual order
/// forces grouping off (see [`ViewSettings::normalized`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    #[serde(default)]
    pub allow_manual_order: bool,
    #[serde(default)]
    pub allow_grouping: bool,
}

impl ViewSettings {
    /// Returns a copy with grouping switched off when manual order is on.
    #[must_use]
    pub const fn normalized(self) -> Self {
        Self {
            allow_manual_order: self.allow_manual_order,
            allow_grouping: self.allow_grouping && !self.allow_manual_order,
        }
    }

    /// Resolves the display mode these settings select.
    ///
    /// # Examples
    ///
    /// ```
    /// use docindex::{DisplayMode, ViewSettings};
    ///
    /// let both = ViewSettings { allow_manual_order: true, allow_grouping: true };
    /// assert_eq!(both.display_mode(), DisplayMode::Sortable);
    /// assert_eq!(ViewSettings::default().display_mode(), DisplayMode::Plain);
    /// ```
    #[must_use]
    pub const fn display_mode(self) -> DisplayMode {
        if self.allow_manual_order {
            DisplayMode::Sortable
        } else if self.allow_grouping {
            DisplayMode::Grouped
        } else {
            DisplayMode::Plain
        }
    }
}

/// How the menu lays out its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Entries in order, no drag handles, no headers.
    Plain,
    /// Entries in manual order with drag handles.
    Sortable,
    /// Entries bucketed under month headers.
    Grouped,
}

/// Mode in which the host renders a record's detail.
///
/// Only the inline panel is requested by this view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailMode {
    Inline,
}
