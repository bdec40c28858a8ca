//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes host updates and
//! user input, translating them into state changes and host actions.
//!
//! # Architecture
//!
//! 1. Events arrive from the host's render cycle or from user input
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. The default selection is applied if nothing is selected yet
//! 5. Actions are collected and returned for execution
//!
//! Every event runs to completion synchronously; a refresh rebuilds entries and
//! index before any later event is looked at.
//!
//! # Event Types
//!
//! - **Host**: `HostUpdate`, `SettingsPersisted`
//! - **Menu**: `Select`, `Search`, `Reorder`
//! - **Settings dialog**: `ShowSettings`, `CancelSettings`, `SaveSettings`
//!
//! # Example
//!
//! ```rust
//! use docindex::app::{handle_event, AppState, Event};
//! use docindex::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ShowSettings)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), docindex::DocIndexError>(())
//! ```

use super::modes::SettingsDialog;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ViewSettings;
use crate::host::HostProps;

/// Events triggered by the host or by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New host props for this render cycle.
    ///
    /// Entries and the search index are rebuilt when the fetch marker changed
    /// and settings are present.
    HostUpdate(HostProps),

    /// The user clicked an entry.
    Select(String),

    /// The search text changed to this value.
    Search(String),

    /// A drag in the sortable list ended.
    Reorder {
        /// Position the entry was dragged from.
        from: usize,
        /// Position the entry was dropped at.
        to: usize,
    },

    /// Opens the settings dialog.
    ShowSettings,
    /// Closes the settings dialog without saving.
    CancelSettings,
    /// Submits the settings form.
    SaveSettings(ViewSettings),
    /// The host finished persisting submitted settings.
    SettingsPersisted,
}

/// Processes an event, mutates state, and returns whether to re-render plus
/// the host actions to execute.
///
/// # Errors
///
/// Returns [`crate::DocIndexError::Reorder`] for a reorder with out-of-range
/// indices. State is left unchanged in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    let (render, mut actions) = match event {
        Event::HostUpdate(props) => {
            let rebuilt = state.apply_props(props);
            tracing::debug!(
                rebuilt,
                fetch_marker = %props.fetch_marker,
                has_settings = props.view_settings.is_some(),
                "host props applied"
            );
            (true, vec![])
        }
        Event::Select(id) => {
            if state.select(id) {
                tracing::debug!(id = %id, "entry selected");
                (true, vec![Action::RequestDetailView { id: id.clone() }])
            } else {
                (false, vec![])
            }
        }
        Event::Search(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.apply_search(query);
            (true, vec![])
        }
        Event::Reorder { from, to } => match state.reorder(*from, *to)? {
            Some(view_state) => (true, vec![Action::PersistViewState(view_state)]),
            None => (false, vec![]),
        },
        Event::ShowSettings => {
            state.settings_dialog = SettingsDialog::Open;
            (true, vec![])
        }
        Event::CancelSettings => {
            if state.settings.is_none() {
                tracing::debug!("settings dialog cannot be dismissed before settings exist");
                (false, vec![])
            } else {
                state.settings_dialog = SettingsDialog::Hidden;
                (true, vec![])
            }
        }
        Event::SaveSettings(settings) => {
            let settings = settings.normalized();
            tracing::debug!(
                allow_manual_order = settings.allow_manual_order,
                allow_grouping = settings.allow_grouping,
                "saving view settings"
            );
            state.settings_dialog = SettingsDialog::Saving;
            (true, vec![Action::PersistViewSettings(settings)])
        }
        Event::SettingsPersisted => {
            state.settings_dialog = SettingsDialog::Hidden;
            (true, vec![])
        }
    };

    if let Some(id) = state.ensure_selection() {
        actions.push(Action::RequestDetailView { id });
        return Ok((true, actions));
    }

    Ok((render, actions))
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::HostUpdate(_) => "host_update",
        Event::Select(_) => "select",
        Event::Search(_) => "search",
        Event::Reorder { .. } => "reorder",
        Event::ShowSettings => "show_settings",
        Event::CancelSettings => "cancel_settings",
        Event::SaveSettings(_) => "save_settings",
        Event::SettingsPersisted => "settings_persisted",
    }
}
