//! Host boundary abstraction.
//!
//! The [`Host`] trait is the only way this crate reaches the outside world. It
//! mirrors the narrow callback contract a host application offers to an
//! embedded view: pull a rendered detail view, and fire-and-forget
//! persistence of view state and settings.

use crate::domain::{DetailMode, ViewSettings, ViewState};

/// Callbacks the embedding application provides.
///
/// All calls are synchronous and made from within an event.
///
/// # Examples
///
/// ```
/// use docindex::host::Host;
/// use docindex::{DetailMode, ViewSettings, ViewState};
///
/// #[derive(Default)]
/// struct Recorder {
///     saved: Vec<ViewState>,
/// }
///
/// impl Host for Recorder {
///     type View = String;
///
///     fn request_detail_view(&mut self, _mode: DetailMode, id: &str) -> String {
///         format!("detail of {id}")
///     }
///
///     fn persist_view_state(&mut self, state: &ViewState) {
///         self.saved.push(state.clone());
///     }
///
///     fn persist_view_settings(&mut self, _settings: &ViewSettings) {}
/// }
/// ```
pub trait Host {
    /// Whatever the host renders for a record's detail.
    type View;

    /// Produces the detail view for `id`.
    fn request_detail_view(&mut self, mode: DetailMode, id: &str) -> Self::View;

    /// Replaces the persisted ordering state. Last writer wins.
    fn persist_view_state(&mut self, state: &ViewState);

    /// Persists settings submitted from the settings dialog.
    ///
    /// The host signals completion by delivering
    /// [`crate::app::Event::SettingsPersisted`].
    fn persist_view_settings(&mut self, settings: &ViewSettings);
}
