//! Plain-text board rendering.

use klondike::{Card, GameView};

/// Face-down card, or a deck that still has cards.
pub const BACK: &str = "...";
/// An empty drawn pile or deck.
pub const EMPTY: &str = "EEE";
const BLANK: &str = "   ";

fn cell(card: Option<Card>) -> String {
    match card {
        Some(card) => card.to_string(),
        None => EMPTY.to_string(),
    }
}

/// Render the board as text.
///
/// The first line holds the four foundations, the top of the drawn pile and
/// the deck. Below it sit the column numbers and the tableau, one row per
/// depth, with hidden cards drawn as `...`. Every cell is three characters
/// wide.
pub fn render_board(view: &GameView) -> String {
    let foundations: Vec<String> = view
        .foundations
        .iter()
        .map(|f| match f.top {
            Some(card) => card.to_string(),
            None => format!(".{}.", f.suit),
        })
        .collect();
    let deck = if view.deck_len > 0 { BACK } else { EMPTY };

    let mut lines = vec![
        format!(
            "{}    {} {}",
            foundations.join(" "),
            cell(view.waste_top),
            deck
        ),
        String::new(),
    ];

    let header: Vec<String> = (1..=view.columns.len()).map(|n| format!(" {n} ")).collect();
    lines.push(header.join(" "));

    let depth = view
        .columns
        .iter()
        .map(|c| c.hidden + c.visible.len())
        .max()
        .unwrap_or(0);
    for row in 0..depth {
        let cells: Vec<String> = view
            .columns
            .iter()
            .map(|c| {
                if row < c.hidden {
                    BACK.to_string()
                } else if let Some(card) = c.visible.get(row - c.hidden) {
                    card.to_string()
                } else {
                    BLANK.to_string()
                }
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
