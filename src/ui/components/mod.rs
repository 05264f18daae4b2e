//! Composable shelf renderers.
//!
//! Each component renders one part of the surface; [`render_shelves`] is the
//! layout that strings them together. All components print sequentially to
//! stdout — the caller owns clearing the surface first.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`tabbar`]: Shelf tabs with counts
//! - [`notice`]: Search and storage banners
//! - [`shelf`]: Book card list for the expanded shelf
//! - [`empty`]: Empty shelf message
//! - [`footer`]: Command help line

mod empty;
mod footer;
mod header;
mod notice;
mod shelf;
mod tabbar;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShelfViewModel;

/// Fixed rendering width, in character cells.
pub const SURFACE_WIDTH: usize = 72;

/// Renders a horizontal separator line.
fn render_border(theme: &Theme) {
    println!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(SURFACE_WIDTH),
        Theme::reset()
    );
}

/// Renders the full surface for one view model.
///
/// Layout:
///
/// ```text
/// [Header]
/// [Border]
/// [Tab bar]
/// [Banners: search / storage notice]
/// [Shelf cards | empty message]
/// [Border]
/// [Footer]
/// ```
pub fn render_shelves(vm: &ShelfViewModel, theme: &Theme) {
    header::render_header(theme);
    render_border(theme);
    tabbar::render_tabbar(vm, theme);
    notice::render_banners(vm, theme);

    let cards = vm.active_cards();
    if cards.is_empty() {
        empty::render_empty_shelf(vm, theme);
    } else {
        shelf::render_cards(cards, theme);
    }

    render_border(theme);
    footer::render_footer(theme);
}
