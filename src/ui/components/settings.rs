//! Settings dialog renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsDialogInfo;

fn toggle(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the dialog as a titled block with both toggles and its buttons.
///
/// Grouping is shown disabled while manual order is on.
pub fn render_settings_dialog(out: &mut String, dialog: &SettingsDialogInfo, theme: &Theme) {
    let dim = Theme::fg(&theme.colors.text_dim);
    let normal = Theme::fg(&theme.colors.text_normal);
    let settings = dialog.settings.normalized();

    out.push_str(Theme::bold());
    out.push_str(&normal);
    out.push_str(&dialog.title);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&normal);
    out.push_str(&format!("{} Manual order", toggle(settings.allow_manual_order)));
    out.push_str(&dim);
    out.push_str("  By default the view keeps the data order\n");

    out.push_str(if settings.allow_manual_order { &dim } else { &normal });
    out.push_str(&format!("{} Allow grouping", toggle(settings.allow_grouping)));
    out.push_str(&dim);
    out.push_str("  Group the data by month\n");

    out.push_str(if dialog.can_cancel { &normal } else { &dim });
    out.push_str("(Cancel) ");
    out.push_str(&normal);
    out.push_str(if dialog.saving { "(Saving...)" } else { "(Save)" });
    out.push_str(Theme::reset());
    out.push('\n');
}
