//! View model types representing renderable menu state.
//!
//! View models are immutable snapshots computed by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: rows in final order, selection
//! flags, and per-character highlight masks.
//!
//! # Example
//!
//! ```rust
//! use docindex::ui::viewmodel::{MenuItemRow, MenuRow, MenuViewModel, SearchBarInfo};
//! use docindex::DisplayMode;
//!
//! let vm = MenuViewModel {
//!     mode: Some(DisplayMode::Plain),
//!     rows: vec![MenuRow::Item(MenuItemRow {
//!         id: "r1".to_string(),
//!         title: "Apple".to_string(),
//!         is_selected: true,
//!         draggable: false,
//!         highlight: vec![true, true, false, false, false],
//!     })],
//!     search_bar: SearchBarInfo { query: "ap".to_string() },
//!     settings_dialog: None,
//! };
//! assert_eq!(vm.item_rows().count(), 1);
//! ```

use crate::domain::{DisplayMode, ViewSettings};

/// Complete menu view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewModel {
    /// Active display mode, `None` while no settings exist (nothing listed).
    pub mode: Option<DisplayMode>,

    /// Menu rows in display order.
    pub rows: Vec<MenuRow>,

    pub search_bar: SearchBarInfo,

    /// Present while the settings dialog is visible.
    pub settings_dialog: Option<SettingsDialogInfo>,
}

impl MenuViewModel {
    /// Iterates over item rows, skipping group headers.
    pub fn item_rows(&self) -> impl Iterator<Item = &MenuItemRow> {
        self.rows.iter().filter_map(|row| match row {
            MenuRow::Item(item) => Some(item),
            MenuRow::Header(_) => None,
        })
    }

    /// The selected row, if it is currently listed.
    #[must_use]
    pub fn selected_row(&self) -> Option<&MenuItemRow> {
        self.item_rows().find(|item| item.is_selected)
    }
}

/// One line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
    /// Month header in grouped mode, e.g. `"Mar-2023"`.
    Header(String),
    Item(MenuItemRow),
}

/// Display information for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemRow {
    pub id: String,
    pub title: String,
    pub is_selected: bool,

    /// Shows a drag handle (sortable mode).
    pub draggable: bool,

    /// One flag per title character, `true` where a search match is highlighted.
    pub highlight: Vec<bool>,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query text as typed.
    pub query: String,
}

/// Settings dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDialogInfo {
    pub title: String,

    /// Current values of the toggles.
    pub settings: ViewSettings,

    /// Cancel is disabled until settings have been saved once.
    pub can_cancel: bool,

    /// A save was submitted and the host has not confirmed yet.
    pub saving: bool,
}
