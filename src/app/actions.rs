//! Actions representing calls to be made on the host.
//!
//! The event handler never talks to the host directly. It returns a
//! `Vec<Action>` and the plugin runtime ([`crate::host::DocIndexPlugin`])
//! executes them in order, synchronously, before the event returns.
//!
//! # Example
//!
//! ```rust
//! use docindex::app::Action;
//! use docindex::ViewState;
//!
//! let actions = vec![
//!     Action::RequestDetailView { id: "r1".to_string() },
//!     Action::PersistViewState(ViewState::default()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::{ViewSettings, ViewState};

/// Host calls emitted by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the inline detail view for an entry and cache it, replacing any
    /// previously cached view.
    RequestDetailView {
        /// Id of the entry to show.
        id: String,
    },

    /// Replace the host-persisted ordering state wholesale.
    ///
    /// Emitted after every reorder with the full id → rank mapping.
    PersistViewState(ViewState),

    /// Persist the settings submitted from the settings dialog.
    ///
    /// The host confirms with [`crate::app::Event::SettingsPersisted`].
    PersistViewSettings(ViewSettings),
}
