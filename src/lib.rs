//! Docindex: an embeddable document index view.
//!
//! Docindex is a sidebar menu for a host application that lists data records
//! by title, next to an inline detail panel for the selected record. It
//! provides:
//! - Manual drag reordering persisted through the host
//! - Grouping by creation month
//! - Diacritic-insensitive token search with per-character highlighting
//! - A selection controller that keeps the detail panel in sync
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application                                   │  ← Records, view state,
//! └─────────────────────────────────────────────────────┘    settings, callbacks
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Boundary (host/)                              │  ← Host trait, props,
//! │  - DocIndexPlugin executes actions                  │    detail view cache
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Selection/view
//! │  - Event handling                                   │    controller
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Pipeline (pipeline/)  │   │ UI Layer (ui/)          │
//! │ - Normalize           │   │ - View models           │
//! │ - Order / reorder     │   │ - Highlight masks       │
//! │ - Group by month      │   │ - ANSI rendering        │
//! │ - Search index        │   │ - Themes                │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Record, MenuEntry, ViewState, ViewSettings       │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selection/view controller with event/action model
//! - [`domain`]: Core data types and errors
//! - [`host`]: Host callback trait, props, and plugin runtime
//! - [`pipeline`]: Normalization, ordering, grouping, and search
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! The host passes string key/value configuration:
//!
//! | key           | meaning                                        |
//! |---------------|------------------------------------------------|
//! | `theme`       | built-in theme name (`light`, `dark`)          |
//! | `theme_file`  | TOML theme file, takes precedence over `theme` |
//! | `trace_level` | log filter, e.g. `debug` (default `info`)      |
//! | `log_file`    | log to this file instead of stderr             |
//!
//! # Lifecycle
//!
//! 1. **Load**: parse [`Config`], initialize tracing, create the plugin
//! 2. **Host update**: every render cycle delivers [`host::HostProps`]; a changed
//!    fetch marker rebuilds entries and the search index together
//! 3. **Default selection**: with nothing selected, the first ordered entry is
//!    selected and its detail requested
//! 4. **User input**: select, search, reorder, settings dialog
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use docindex::app::{handle_event, Action, Event};
//! use docindex::host::HostProps;
//! use docindex::{initialize, Config, Record, ViewSettings};
//!
//! let mut state = initialize(&Config::default());
//! let props = HostProps {
//!     records: vec![Record::new("r1", "Apple Pie", Utc::now())],
//!     view_settings: Some(ViewSettings::default()),
//!     fetch_marker: "1".to_string(),
//!     ..Default::default()
//! };
//!
//! let (_render, actions) = handle_event(&mut state, &Event::HostUpdate(props))?;
//! assert_eq!(actions, vec![Action::RequestDetailView { id: "r1".to_string() }]);
//! # Ok::<(), docindex::DocIndexError>(())
//! ```

pub mod app;
pub mod domain;
pub mod host;
pub mod observability;
pub mod pipeline;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Selection};
pub use domain::{
    DetailMode, DisplayMode, DocIndexError, MenuEntry, Record, Result, ViewSettings, ViewState, MIN_ORDER,
};
pub use host::{DocIndexPlugin, Host, HostProps};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Log file path; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parses the host's string configuration map.
    ///
    /// Unknown keys are ignored; blank values count as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docindex::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("trace_level".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_host(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dark"));
    /// assert!(config.trace_level.is_none());
    /// ```
    #[must_use]
    pub fn from_host(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            log_file: value("log_file").map(PathBuf::from),
        }
    }
}

/// Creates the initial application state for `config`.
///
/// The theme is taken from `theme_file`, then `theme_name`, then the default;
/// a theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing document index view");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
