//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of the menu's entry
//! collection, its search index, the active search, the selection and the
//! settings dialog. It is mutated only by the event handler.
//!
//! # Derived State
//!
//! Entries and the search index are a pure projection of the host's records
//! and view state. They are recomputed together whenever the host's fetch
//! marker changes, never lazily, so the index can never describe a different
//! collection than the one displayed. The reorder operation works on this
//! collection directly: position `i` in [`AppState::entries`] is entry `i` of
//! the sortable list.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use docindex::app::AppState;
//! use docindex::host::HostProps;
//! use docindex::{Record, Theme, ViewSettings};
//!
//! let mut state = AppState::new(Theme::default());
//! state.apply_props(&HostProps {
//!     records: vec![Record::new("r1", "Apple Pie", Utc::now())],
//!     view_settings: Some(ViewSettings::default()),
//!     fetch_marker: "1".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(state.entries.len(), 1);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use std::collections::HashMap;

use super::modes::{Selection, SettingsDialog};
use crate::domain::{DisplayMode, MenuEntry, Record, Result, ViewSettings, ViewState};
use crate::host::HostProps;
use crate::pipeline::{group_by_month, order_entries, reorder, HighlightRange, SearchIndex, SearchOutcome};
use crate::ui::helpers::highlight_mask;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MenuItemRow, MenuRow, MenuViewModel, SearchBarInfo, SettingsDialogInfo};

/// Central state container of the view.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Entries in display order, rebuilt on every refresh.
    pub entries: Vec<MenuEntry>,

    /// Search index over `entries`.
    pub index: SearchIndex,

    /// Last fetch marker received from the host.
    pub fetch_marker: Option<String>,

    /// Display settings, `None` until the host supplies them.
    pub settings: Option<ViewSettings>,

    pub selection: Selection,

    /// Raw search text as typed.
    pub search_query: String,

    /// Matching entries in relevance order, `None` when no filter is active.
    pub filtered: Option<Vec<MenuEntry>>,

    /// Highlight ranges per entry id for the active filter.
    pub highlights: HashMap<String, Vec<HighlightRange>>,

    pub settings_dialog: SettingsDialog,

    /// Category name shown in the settings dialog title.
    pub category_name: Option<String>,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state: no entries, no selection, no settings.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            entries: vec![],
            index: SearchIndex::default(),
            fetch_marker: None,
            settings: None,
            selection: Selection::NoSelection,
            search_query: String::new(),
            filtered: None,
            highlights: HashMap::new(),
            settings_dialog: SettingsDialog::Hidden,
            category_name: None,
            theme,
        }
    }

    /// Takes in a host props snapshot.
    ///
    /// Settings and category context are always re-read. Entries and the index
    /// are rebuilt only when settings are present and the fetch marker changed;
    /// a rebuild also clears the active search.
    ///
    /// Returns `true` if the entry collection was rebuilt.
    pub fn apply_props(&mut self, props: &HostProps) -> bool {
        self.settings = props.view_settings;
        self.category_name = props.category_name().map(String::from);

        let marker_changed = self.fetch_marker.as_deref() != Some(props.fetch_marker.as_str());
        let rebuilt = match self.settings {
            Some(settings) if marker_changed => {
                let empty = ViewState::default();
                let view_state = props.view_state.as_ref().unwrap_or(&empty);
                self.refresh(&props.records, view_state, settings.allow_manual_order);
                true
            }
            _ => false,
        };

        self.fetch_marker = Some(props.fetch_marker.clone());
        rebuilt
    }

    /// Rebuilds entries and search index from records and clears the search.
    pub fn refresh(&mut self, records: &[Record], view_state: &ViewState, manual_order: bool) {
        let _span = tracing::debug_span!("refresh", records = records.len(), manual_order).entered();

        self.entries = order_entries(records, view_state, manual_order);
        self.index = SearchIndex::build(&self.entries);
        self.search_query = String::new();
        self.filtered = None;
        self.highlights.clear();

        tracing::debug!(entries = self.entries.len(), "entries rebuilt");
    }

    /// Runs `query` against the index and stores the filter and highlights.
    pub fn apply_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.highlights.clear();

        match self.index.query(query) {
            SearchOutcome::Unfiltered => {
                self.filtered = None;
            }
            SearchOutcome::Filtered(hits) => {
                let by_id: HashMap<&str, &MenuEntry> =
                    self.entries.iter().map(|entry| (entry.id.as_str(), entry)).collect();

                let mut filtered = Vec::with_capacity(hits.len());
                for hit in hits {
                    if let Some(entry) = by_id.get(hit.id.as_str()) {
                        filtered.push((*entry).clone());
                        self.highlights.insert(hit.id, hit.ranges);
                    }
                }
                self.filtered = Some(filtered);
            }
        }

        tracing::debug!(
            query_len = self.search_query.len(),
            filtered = self.filtered.as_ref().map(Vec::len),
            "search applied"
        );
    }

    /// Entries currently listed: the filter result, or every entry.
    #[must_use]
    pub fn visible_entries(&self) -> &[MenuEntry] {
        self.filtered.as_deref().unwrap_or(&self.entries)
    }

    /// Display mode, `None` while the host has not supplied settings.
    #[must_use]
    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.settings.map(ViewSettings::display_mode)
    }

    /// Selects the first entry when nothing is selected yet.
    ///
    /// The first entry is taken from the ordered collection, ignoring any
    /// active search filter. Returns the newly selected id.
    pub fn ensure_selection(&mut self) -> Option<String> {
        if self.selection != Selection::NoSelection {
            return None;
        }

        let first = self.entries.first()?.id.clone();
        tracing::debug!(id = %first, "defaulting selection to first entry");
        self.selection = Selection::Selected(first.clone());
        Some(first)
    }

    /// Selects `id` if it is currently listed. Returns whether it was.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.visible_entries().iter().any(|entry| entry.id == id) {
            tracing::debug!(id = %id, "ignoring selection of an entry that is not listed");
            return false;
        }

        self.selection = Selection::Selected(id.to_string());
        true
    }

    /// Moves an entry within the sortable list and re-ranks every entry.
    ///
    /// Returns the new ordering state to persist, or `Ok(None)` when the list
    /// is not currently reorderable (not in sortable mode, or a search filter
    /// is active). The selection is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocIndexError::Reorder`] if either index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<Option<ViewState>> {
        if self.display_mode() != Some(DisplayMode::Sortable) {
            tracing::debug!(mode = ?self.display_mode(), "reorder ignored outside sortable mode");
            return Ok(None);
        }
        if self.filtered.is_some() {
            tracing::debug!("reorder ignored while a search filter is active");
            return Ok(None);
        }

        let state = reorder(&mut self.entries, from, to).map_err(|e| {
            tracing::debug!(error = %e, "rejected reorder");
            e
        })?;
        self.index = SearchIndex::build(&self.entries);

        tracing::debug!(from, to, "entries reordered");
        Ok(Some(state))
    }

    /// Whether the settings dialog is shown.
    ///
    /// Always `true` while no settings exist.
    #[must_use]
    pub fn is_settings_dialog_visible(&self) -> bool {
        self.settings.is_none() || self.settings_dialog != SettingsDialog::Hidden
    }

    /// Computes the renderable menu from the current state.
    ///
    /// Nothing is listed while settings are absent. Grouped mode interleaves
    /// month headers; sortable mode flags every row as draggable.
    #[must_use]
    pub fn compute_viewmodel(&self) -> MenuViewModel {
        let mode = self.display_mode();
        let visible = self.visible_entries();

        let rows = match mode {
            None => vec![],
            Some(DisplayMode::Grouped) => group_by_month(visible)
                .into_iter()
                .flat_map(|group| {
                    std::iter::once(MenuRow::Header(group.label))
                        .chain(group.entries.into_iter().map(|entry| MenuRow::Item(self.compute_item_row(entry, false))))
                })
                .collect(),
            Some(mode) => visible
                .iter()
                .map(|entry| MenuRow::Item(self.compute_item_row(entry, mode == DisplayMode::Sortable)))
                .collect(),
        };

        MenuViewModel {
            mode,
            rows,
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
            },
            settings_dialog: self.compute_settings_dialog(),
        }
    }

    fn compute_item_row(&self, entry: &MenuEntry, draggable: bool) -> MenuItemRow {
        let ranges = self.highlights.get(&entry.id).map_or(&[][..], Vec::as_slice);

        MenuItemRow {
            id: entry.id.clone(),
            title: entry.title.clone(),
            is_selected: self.selection.is_selected(&entry.id),
            draggable,
            highlight: highlight_mask(&entry.title, ranges),
        }
    }

    fn compute_settings_dialog(&self) -> Option<SettingsDialogInfo> {
        if !self.is_settings_dialog_visible() {
            return None;
        }

        let title = self
            .category_name
            .as_ref()
            .map_or_else(|| "View settings".to_string(), |name| format!("View settings: {name}"));

        Some(SettingsDialogInfo {
            title,
            settings: self.settings.unwrap_or_default(),
            can_cancel: self.settings.is_some(),
            saving: self.settings_dialog == SettingsDialog::Saving,
        })
    }
}
