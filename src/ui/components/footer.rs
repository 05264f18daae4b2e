//! Footer component renderer.

use crate::ui::theme::Theme;

/// Renders the command help line.
pub fn render_footer(theme: &Theme) {
    println!(
        " {}add  edit <id>  toggle <id>  delete <id>  search [q]  tab  quit{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    );
}
