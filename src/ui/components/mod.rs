//! Composable menu component renderers.
//!
//! Each component appends ANSI-styled lines to a `String` buffer.
//!
//! # Components
//!
//! - `search`: Search input line
//! - `menu`: Group headers and entry rows
//! - `settings`: Settings dialog block
//!
//! # Layout
//!
//! ```text
//! [Search bar]
//! [Separator]
//! [Rows]
//! [Separator]          (dialog only)
//! [Settings dialog]    (dialog only)
//! ```

mod menu;
mod search;
mod settings;

pub use menu::{DRAG_HANDLE, SELECTED_MARKER};

use crate::ui::theme::Theme;
use crate::ui::viewmodel::MenuViewModel;

use menu::render_rows;
use search::render_search_bar;
use settings::render_settings_dialog;

fn render_separator(out: &mut String, theme: &Theme, width: usize) {
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push_str(&"\u{2500}".repeat(width));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the whole menu panel into `out`.
pub fn render_menu(out: &mut String, vm: &MenuViewModel, theme: &Theme, width: usize) {
    render_search_bar(out, &vm.search_bar, theme, width);
    render_separator(out, theme, width);
    render_rows(out, &vm.rows, theme);

    if let Some(dialog) = &vm.settings_dialog {
        render_separator(out, theme, width);
        render_settings_dialog(out, dialog, theme);
    }
}
