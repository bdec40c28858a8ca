//! Plugin runtime binding the controller to a [`Host`].
//!
//! [`DocIndexPlugin`] is the embeddable unit: the host feeds it [`Event`]s, it
//! runs the event handler, executes the resulting actions against the host,
//! and keeps the detail view of the selected entry cached.

use super::backend::Host;
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{DetailMode, Result};
use crate::ui::viewmodel::MenuViewModel;
use crate::Config;

/// Detail view cached for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<V> {
    pub id: String,
    pub view: V,
}

/// Document index view embedded in a host.
pub struct DocIndexPlugin<H: Host> {
    app: AppState,
    host: H,
    detail: Option<DetailView<H::View>>,
}

impl<H: Host> DocIndexPlugin<H> {
    /// Creates the plugin with state initialized from `config`.
    pub fn new(config: &Config, host: H) -> Self {
        Self {
            app: crate::initialize(config),
            host,
            detail: None,
        }
    }

    /// Handles one event and executes the actions it produced.
    ///
    /// Returns `true` when the view should re-render.
    ///
    /// # Errors
    ///
    /// Propagates handler errors (out-of-range reorder). No action is executed
    /// for a failed event.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use docindex::app::Event;
    /// use docindex::host::{DocIndexPlugin, Host, HostProps};
    /// use docindex::{Config, DetailMode, Record, ViewSettings, ViewState};
    ///
    /// struct Titles;
    ///
    /// impl Host for Titles {
    ///     type View = String;
    ///     fn request_detail_view(&mut self, _mode: DetailMode, id: &str) -> String {
    ///         id.to_uppercase()
    ///     }
    ///     fn persist_view_state(&mut self, _state: &ViewState) {}
    ///     fn persist_view_settings(&mut self, _settings: &ViewSettings) {}
    /// }
    ///
    /// let mut plugin = DocIndexPlugin::new(&Config::default(), Titles);
    /// plugin.update(&Event::HostUpdate(HostProps {
    ///     records: vec![Record::new("r1", "Apple Pie", Utc::now())],
    ///     view_settings: Some(ViewSettings::default()),
    ///     fetch_marker: "1".to_string(),
    ///     ..Default::default()
    /// }))?;
    ///
    /// assert_eq!(plugin.detail().map(String::as_str), Some("R1"));
    /// # Ok::<(), docindex::DocIndexError>(())
    /// ```
    pub fn update(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.app, event)?;

        for action in actions {
            self.execute(action);
        }

        Ok(render)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::RequestDetailView { id } => {
                tracing::debug!(id = %id, "requesting detail view");
                let view = self.host.request_detail_view(DetailMode::Inline, &id);
                self.detail = Some(DetailView { id, view });
            }
            Action::PersistViewState(state) => {
                tracing::debug!(entries = state.instance_order.len(), "persisting view state");
                self.host.persist_view_state(&state);
            }
            Action::PersistViewSettings(settings) => {
                tracing::debug!("persisting view settings");
                self.host.persist_view_settings(&settings);
            }
        }
    }

    /// Detail view of the selected entry, if one has been requested.
    #[must_use]
    pub fn detail(&self) -> Option<&H::View> {
        self.detail.as_ref().map(|detail| &detail.view)
    }

    /// Cached detail together with the id it belongs to.
    #[must_use]
    pub const fn cached_detail(&self) -> Option<&DetailView<H::View>> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn view_model(&self) -> MenuViewModel {
        self.app.compute_viewmodel()
    }

    #[must_use]
    pub const fn app(&self) -> &AppState {
        &self.app
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }
}

impl<H> std::fmt::Debug for DocIndexPlugin<H>
where
    H: Host + std::fmt::Debug,
    H::View: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocIndexPlugin")
            .field("app", &self.app)
            .field("host", &self.host)
            .field("detail", &self.detail)
            .finish()
    }
}
