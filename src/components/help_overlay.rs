//! Help overlay component
//!
//! Displays the key bindings in a centred floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    const WIDTH_PERCENT: u16 = 60;
    const MIN_WIDTH: u16 = 36;
    const MAX_WIDTH: u16 = 60;

    /// Create a new help overlay listing the calculator bindings
    pub fn new(keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(&AppMode::Calculator);
        Self {
            content: Self::build_content(&sections),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Calculator Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Mouse: click the keypad buttons",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of lines the overlay needs, borders included
    pub fn height(&self) -> u16 {
        self.content.len() as u16 + 2
    }

    /// Centred rect for the overlay inside `parent`
    pub fn area(&self, parent: Rect) -> Rect {
        let width = ((u32::from(parent.width) * u32::from(Self::WIDTH_PERCENT) / 100) as u16)
            .clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
            .min(parent.width);
        let height = self.height().min(parent.height);
        Rect::new(
            parent.x + (parent.width - width) / 2,
            parent.y + (parent.height - height) / 2,
            width,
            height,
        )
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = self.area(parent);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help ")
            .title_bottom(" Press ? or Esc to close ")
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Style::default().bg(Colors::BG_PRIMARY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}
