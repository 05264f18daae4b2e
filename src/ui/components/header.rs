//! Header component renderer.

use super::SURFACE_WIDTH;
use crate::ui::theme::Theme;

/// Renders the centered title bar.
pub fn render_header(theme: &Theme) {
    let title = " Bookrack ";
    let padding = SURFACE_WIDTH.saturating_sub(title.len()) / 2;

    println!(
        "{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.title_fg),
        " ".repeat(padding),
        title,
        Theme::reset()
    );
}
