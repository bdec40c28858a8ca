//! Selection and settings-dialog state types.
//!
//! # State Machine
//!
//! The selection is either empty or holds one entry id:
//!
//! ```text
//! NoSelection ──(entries non-empty)──→ Selected(first id)
//! Selected(a) ──(user picks b)───────→ Selected(b)
//! Selected(a) ──(refresh, reorder)───→ Selected(a)
//! ```
//!
//! There is no terminal state; the selection lives as long as the view.

/// Currently active menu entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected yet (no entries seen so far).
    #[default]
    NoSelection,

    /// The entry with this id is selected and its detail is shown.
    ///
    /// The id survives refreshes even when the underlying record changed or
    /// disappeared.
    Selected(String),
}

impl Selection {
    /// Returns the selected id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::NoSelection => None,
            Self::Selected(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.id() == Some(id)
    }
}

/// Visibility of the settings dialog.
///
/// The dialog is also shown, regardless of this value, while the host has not
/// supplied any settings yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsDialog {
    #[default]
    Hidden,
    /// Open and editable.
    Open,
    /// Save submitted, waiting for the host to confirm persistence.
    Saving,
}
