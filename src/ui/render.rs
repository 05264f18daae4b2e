//! Top-level rendering coordinator.
//!
//! One render pass per store notification: compute the view model, clear the
//! surface, repaint everything. Clearing first makes the pass idempotent —
//! rapid successive dispatches (a keystroke-per-search front end, say) can
//! re-invoke it back to back and the last pass simply wins; nothing from an
//! earlier paint survives.

use crate::app::BookshelfState;
use crate::ui::components;
use crate::ui::tabs::Tab;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShelfViewModel;

/// Renders the shelves to stdout.
///
/// # Parameters
///
/// * `state` - Current store state
/// * `active_tab` - Which shelf the view has expanded
/// * `search_query` - Last submitted query, for the banner
/// * `notice` - Storage degradation notice, if raised
/// * `theme` - Active color theme
pub fn render(
    state: &BookshelfState,
    active_tab: Tab,
    search_query: Option<&str>,
    notice: Option<String>,
    theme: &Theme,
) {
    let vm = ShelfViewModel::compute(state, active_tab, search_query, notice);

    clear_surface();
    components::render_shelves(&vm, theme);
}

/// Clears the terminal and homes the cursor.
fn clear_surface() {
    print!("\u{001b}[2J\u{001b}[H");
}
