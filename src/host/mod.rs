//! Host boundary: inputs, callbacks, and the plugin runtime.
//!
//! # Modules
//!
//! - [`backend`]: The [`Host`] callback trait
//! - [`props`]: Host inputs delivered on each render cycle
//! - [`plugin`]: [`DocIndexPlugin`], executing actions against a host

pub mod backend;
pub mod plugin;
pub mod props;

pub use backend::Host;
pub use plugin::{DetailView, DocIndexPlugin};
pub use props::{Category, HostProps};
