//! Layout calculations for the UI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the card every screen is drawn in
pub const CARD_WIDTH: u16 = 52;

/// Rows taken by the bordered help bar at the bottom of every screen
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Screen layout areas
pub struct ScreenLayout {
    pub card: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Card centered above a help bar
pub fn calculate_screen_layout(area: Rect, card_height: u16) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(HELP_BAR_HEIGHT)])
        .split(area);

    ScreenLayout {
        card: centered_popup(chunks[0], CARD_WIDTH, card_height),
        help: chunks[1],
    }
}

/// Highlighted key followed by what it does, e.g. ` Esc ` Back
pub fn key_hint(key: &str, label: &str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}  ", label)),
    ]
}

/// Bordered, centered row of key hints
pub fn help_bar(hints: Vec<Vec<Span<'static>>>) -> Paragraph<'static> {
    Paragraph::new(Line::from(hints.concat()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Trailing part of `text` that fits in `max_width` terminal columns
///
/// Inputs scroll horizontally, so the end of the text (where typing happens)
/// stays visible.
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 50, 20);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));

        let small = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(small, 50, 20);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_screen_layout_reserves_help_bar() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 80, 24), 10);
        assert_eq!(layout.help, Rect::new(0, 21, 80, HELP_BAR_HEIGHT));
        assert_eq!(layout.card.width, CARD_WIDTH);
        assert!(layout.card.bottom() <= layout.help.y);
    }

    #[test]
    fn test_key_hint_pads_key_and_label() {
        let spans = key_hint("Esc", "Back", Color::Yellow);
        let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, " Esc Back  ");
    }

    #[test]
    fn test_visible_tail_short_text_unchanged() {
        assert_eq!(visible_tail("ana@x.com", 20), "ana@x.com");
    }

    #[test]
    fn test_visible_tail_keeps_end() {
        assert_eq!(visible_tail("abcdefghij", 4), "ghij");
    }

    #[test]
    fn test_visible_tail_respects_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(visible_tail("名前名前", 5), "名前");
    }
}
