//! Tab bar component renderer.

use crate::ui::tabs::Tab;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShelfViewModel;

/// Renders the two shelf tabs with their counts, highlighting the expanded
/// one.
pub fn render_tabbar(vm: &ShelfViewModel, theme: &Theme) {
    print!(" ");
    render_tab(Tab::Unread, vm.unread.len(), vm.active_tab, theme);
    print!("  ");
    render_tab(Tab::Completed, vm.completed.len(), vm.active_tab, theme);
    println!();
}

fn render_tab(tab: Tab, count: usize, active: Tab, theme: &Theme) {
    let text = format!(" {} ({count}) ", tab.label());
    if tab == active {
        print!(
            "{}{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.tab_active_fg),
            Theme::bg(&theme.colors.tab_active_bg),
            text,
            Theme::reset()
        );
    } else {
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            text,
            Theme::reset()
        );
    }
}
