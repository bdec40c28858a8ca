//! Menu list renderer: group headers and entry rows.

use crate::ui::helpers::highlight_segments;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MenuItemRow, MenuRow};

/// Drag handle glyph shown in sortable mode.
pub const DRAG_HANDLE: &str = "\u{2261}";

/// Marker drawn at the right edge of the selected row.
pub const SELECTED_MARKER: &str = "\u{258c}";

/// Renders every menu row, one per line.
pub fn render_rows(out: &mut String, rows: &[MenuRow], theme: &Theme) {
    for row in rows {
        match row {
            MenuRow::Header(label) => render_header(out, label, theme),
            MenuRow::Item(item) => render_item(out, item, theme),
        }
    }
}

/// Month headers are upper-cased and dimmed.
fn render_header(out: &mut String, label: &str, theme: &Theme) {
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&label.to_uppercase());
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders one entry.
///
/// Styling precedence: highlight colors for matched characters, then the
/// selection color, then normal text.
fn render_item(out: &mut String, item: &MenuItemRow, theme: &Theme) {
    let base = item_style(item, theme);

    if item.draggable {
        out.push_str(&Theme::fg(&theme.colors.drag_handle_fg));
        out.push_str(DRAG_HANDLE);
        out.push_str(Theme::reset());
    }
    out.push(' ');

    out.push_str(&base);
    for (text, highlighted) in highlight_segments(&item.title, &item.highlight) {
        if highlighted {
            out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
            out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
            out.push_str(&text);
            out.push_str(Theme::reset());
            out.push_str(&base);
        } else {
            out.push_str(&text);
        }
    }

    if item.is_selected {
        out.push(' ');
        out.push_str(SELECTED_MARKER);
    }

    out.push_str(Theme::reset());
    out.push('\n');
}

fn item_style(item: &MenuItemRow, theme: &Theme) -> String {
    if !item.is_selected {
        return Theme::fg(&theme.colors.text_normal);
    }

    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg));
    if let Some(bg) = &theme.colors.selection_bg {
        style.push_str(&Theme::bg(bg));
    }
    style
}
