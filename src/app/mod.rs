//! Application layer: the selection and view controller.
//!
//! This module sits between the host boundary ([`crate::host`]) and the data
//! pipeline ([`crate::pipeline`]). It owns the entry collection and search
//! index, reacts to host updates and user input, and tells the host what to do
//! through [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! Host props / user input → Events → handle_event → State mutations → Actions → Host calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Host calls emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Selection and settings dialog state types
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Selection, SettingsDialog};
pub use state::AppState;
