//! Top-level rendering entry points.
//!
//! ```text
//! AppState → compute_viewmodel → MenuViewModel → render_to_string → ANSI text
//! ```

use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MenuViewModel;

/// Width of the menu panel in columns.
pub const MENU_WIDTH: usize = 32;

/// Renders the menu panel as ANSI-styled text.
///
/// # Example
///
/// ```rust
/// use docindex::app::AppState;
/// use docindex::ui::render_to_string;
/// use docindex::Theme;
///
/// let state = AppState::new(Theme::default());
/// let text = render_to_string(&state.compute_viewmodel(), &state.theme);
/// assert!(text.contains("search"));
/// ```
#[must_use]
pub fn render_to_string(vm: &MenuViewModel, theme: &Theme) -> String {
    let mut out = String::new();
    components::render_menu(&mut out, vm, theme, MENU_WIDTH);
    out
}

/// Renders the menu panel to stdout.
pub fn render(vm: &MenuViewModel, theme: &Theme) {
    print!("{}", render_to_string(vm, theme));
}
