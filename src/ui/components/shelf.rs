//! Shelf card list component renderer.

use super::SURFACE_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookCard;

/// Widest title column before truncation.
const TITLE_WIDTH: usize = 34;

/// Renders one card per book on the expanded shelf.
///
/// Layout per card:
///
/// ```text
///  ✓ TITLE (truncated, padded)  author, year                [id]
/// ```
pub fn render_cards(cards: &[BookCard], theme: &Theme) {
    println!();
    for card in cards {
        render_card(card, theme);
    }
    println!();
}

fn render_card(card: &BookCard, theme: &Theme) {
    let title = truncate(&card.title, TITLE_WIDTH);
    let byline = format!("{}, {}", card.author, card.year);
    let id_tag = format!("[{}]", card.id);

    print!(" ");
    if card.is_complete {
        print!(
            "{}✓{}",
            Theme::fg(&theme.colors.complete_fg),
            Theme::reset()
        );
    } else {
        print!(" ");
    }

    print!(" {}", Theme::fg(&theme.colors.text_normal));
    print!("{title}");
    print!("{}", " ".repeat(TITLE_WIDTH.saturating_sub(title.chars().count())));
    print!("{}", Theme::reset());

    print!("  {}{}{}", Theme::fg(&theme.colors.text_dim), byline, Theme::reset());

    let used = 3 + TITLE_WIDTH + 2 + byline.chars().count() + id_tag.len();
    print!("{}", " ".repeat(SURFACE_WIDTH.saturating_sub(used)));
    println!("{}{}{}", Theme::fg(&theme.colors.text_dim), id_tag, Theme::reset());
}

/// Truncates to `max` characters with a trailing ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(truncate("Dune", 10), "Dune");
    }

    #[test]
    fn long_titles_get_an_ellipsis() {
        let truncated = truncate("A Very Long Title Indeed", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }
}
