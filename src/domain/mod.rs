//! Domain layer for the document index view.
//!
//! Core data types shared by the pipeline, the controller and the host
//! boundary, free of any rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Host records and projected menu entries
//! - [`view`]: Persisted view state and display settings

pub mod error;
pub mod record;
pub mod view;

pub use error::{DocIndexError, Result};
pub use record::{MenuEntry, Record, MIN_ORDER};
pub use view::{DetailMode, DisplayMode, ViewSettings, ViewState};
