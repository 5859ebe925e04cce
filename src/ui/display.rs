//! Display panel and status bar rendering

use crate::app::AppState;
use crate::components::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keep the rightmost `width` characters of `text`, marking cut text with `…`.
///
/// The least significant digits are the ones being typed, so they stay visible.
pub fn visible_tail(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{}", tail)
}

/// Render the bordered number display with the pending expression above it
pub fn render_display(f: &mut Frame, area: Rect, state: &AppState) {
    let calculator = &state.calculator;
    let inner_width = usize::from(area.width.saturating_sub(2));

    let expression = calculator.pending_expression().unwrap_or_default();
    let display_style = if calculator.is_error() {
        Styles::display_error()
    } else {
        Styles::display()
    };

    let lines = vec![
        Line::from(Span::styled(
            visible_tail(&expression, inner_width),
            Styles::expression(),
        )),
        Line::from(Span::styled(
            visible_tail(calculator.display(), inner_width),
            display_style,
        )),
    ];

    let block = Block::default()
        .title(Span::styled(" calctui ", Styles::title()))
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Style::default().bg(Colors::BG_PRIMARY));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    f.render_widget(paragraph, area);
}

/// Render the one-line status bar: status message, then key hints
pub fn render_status_bar(f: &mut Frame, area: Rect, status: &str, hints: &[NavBarItem]) {
    let mut spans = vec![Span::styled(format!(" {} ", status), Styles::text())];
    for item in hints {
        spans.push(Span::styled(" │ ", Styles::text_muted()));
        spans.push(Span::styled(item.key_display.clone(), Styles::nav_hint()));
        spans.push(Span::styled(
            format!(" {}", item.action_label),
            Styles::text_muted(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
