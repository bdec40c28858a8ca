//! Menu rendering layer.
//!
//! Transforms view models into ANSI-styled text through small composable
//! components. Rendering of the detail panel itself belongs to the host.
//!
//! ```text
//! AppState → compute_viewmodel → MenuViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable menu state
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Search bar, menu rows, settings dialog
//! - [`helpers`]: Per-character highlight masks and segments
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string, MENU_WIDTH};
pub use theme::Theme;
pub use viewmodel::{MenuItemRow, MenuRow, MenuViewModel, SearchBarInfo, SettingsDialogInfo};
