//! Banner component renderer.
//!
//! Two banners can appear above the shelves: the active search query and the
//! one-time storage degradation notice.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShelfViewModel;

/// Renders the search and storage banners, when present.
pub fn render_banners(vm: &ShelfViewModel, theme: &Theme) {
    if let Some(query) = &vm.search_query {
        if vm.showing_filtered {
            println!(
                " {}search: \"{}\"{}",
                Theme::fg(&theme.colors.text_dim),
                query,
                Theme::reset()
            );
        } else {
            // The cached result is empty, so the full shelf is on display.
            println!(
                " {}search: \"{}\" matched nothing, showing all books{}",
                Theme::fg(&theme.colors.text_dim),
                query,
                Theme::reset()
            );
        }
    }

    if let Some(notice) = &vm.notice {
        println!(
            " {}{}{}",
            Theme::fg(&theme.colors.notice_fg),
            notice,
            Theme::reset()
        );
    }
}
