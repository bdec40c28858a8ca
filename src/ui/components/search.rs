//! Search input renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Placeholder shown while the query is empty.
const PLACEHOLDER: &str = "search";

/// Renders the search input as a single bordered line with a settings marker.
///
/// ```text
/// [ query______________ ⚙ ]
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, width: usize) {
    let inner = width.saturating_sub(6);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&border);
    out.push_str("[ ");

    let shown = search.query.chars().count();
    if search.query.is_empty() {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(PLACEHOLDER);
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&search.query);
    }

    let used = if search.query.is_empty() { PLACEHOLDER.len() } else { shown };
    out.push_str(&" ".repeat(inner.saturating_sub(used)));

    out.push_str(&border);
    out.push_str(" \u{2699} ]");
    out.push_str(Theme::reset());
    out.push('\n');
}
