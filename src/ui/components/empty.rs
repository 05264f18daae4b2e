//! Empty shelf component renderer.

use crate::ui::tabs::Tab;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShelfViewModel;

/// Renders the message shown when the expanded shelf has no books.
pub fn render_empty_shelf(vm: &ShelfViewModel, theme: &Theme) {
    let message = match vm.active_tab {
        Tab::Unread => "No unread books",
        Tab::Completed => "No completed books",
    };
    let hint = match vm.active_tab {
        Tab::Unread => "add <title> | <author> | <year> to get started",
        Tab::Completed => "toggle <id> moves a finished book here",
    };

    println!();
    println!(
        "   {}{}{}",
        Theme::fg(&theme.colors.text_normal),
        message,
        Theme::reset()
    );
    println!(
        "   {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        hint,
        Theme::reset()
    );
    println!();
}
