//! On-screen keypad
//!
//! A fixed 5×4 grid of buttons. Geometry is computed from the keypad area
//! alone, so rendering and mouse hit-testing always agree.

use crate::theme::{ButtonKind, Styles, Theme};
use crate::types::{Digit, InputEvent, Operator};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button layout, top row first
pub const LAYOUT: [[InputEvent; Keypad::COLUMNS]; Keypad::ROWS] = [
    [
        InputEvent::Percent,
        InputEvent::ClearEntry,
        InputEvent::Clear,
        InputEvent::Backspace,
    ],
    [
        InputEvent::Digit(Digit::ALL[7]),
        InputEvent::Digit(Digit::ALL[8]),
        InputEvent::Digit(Digit::ALL[9]),
        InputEvent::Operator(Operator::Divide),
    ],
    [
        InputEvent::Digit(Digit::ALL[4]),
        InputEvent::Digit(Digit::ALL[5]),
        InputEvent::Digit(Digit::ALL[6]),
        InputEvent::Operator(Operator::Multiply),
    ],
    [
        InputEvent::Digit(Digit::ALL[1]),
        InputEvent::Digit(Digit::ALL[2]),
        InputEvent::Digit(Digit::ALL[3]),
        InputEvent::Operator(Operator::Subtract),
    ],
    [
        InputEvent::Digit(Digit::ALL[0]),
        InputEvent::DecimalPoint,
        InputEvent::Equals,
        InputEvent::Operator(Operator::Add),
    ],
];

/// Visual category of the button that produces `event`
pub fn button_kind(event: InputEvent) -> ButtonKind {
    match event {
        InputEvent::Digit(_) | InputEvent::DecimalPoint => ButtonKind::Digit,
        InputEvent::Operator(_) => ButtonKind::Operator,
        InputEvent::Equals => ButtonKind::Equals,
        InputEvent::Clear
        | InputEvent::ClearEntry
        | InputEvent::Backspace
        | InputEvent::Percent => ButtonKind::Control,
    }
}

/// Keypad geometry and rendering
pub struct Keypad;

impl Keypad {
    pub const ROWS: usize = 5;
    pub const COLUMNS: usize = 4;

    /// Smallest area that still fits a bordered label in every cell
    pub const MIN_WIDTH: u16 = 4 * 5;
    pub const MIN_HEIGHT: u16 = 5 * 3;

    /// Split `area` into one rect per button.
    ///
    /// Column and row boundaries are spread evenly, so the cells tile the
    /// whole area without gaps.
    pub fn cells(area: Rect) -> Vec<(Rect, InputEvent)> {
        let mut cells = Vec::with_capacity(Self::ROWS * Self::COLUMNS);
        for (row, buttons) in LAYOUT.iter().enumerate() {
            let top = Self::boundary(area.y, area.height, row, Self::ROWS);
            let bottom = Self::boundary(area.y, area.height, row + 1, Self::ROWS);
            for (col, event) in buttons.iter().enumerate() {
                let left = Self::boundary(area.x, area.width, col, Self::COLUMNS);
                let right = Self::boundary(area.x, area.width, col + 1, Self::COLUMNS);
                cells.push((Rect::new(left, top, right - left, bottom - top), *event));
            }
        }
        cells
    }

    fn boundary(origin: u16, length: u16, index: usize, count: usize) -> u16 {
        origin + (usize::from(length) * index / count) as u16
    }

    /// The button under the terminal cell (`column`, `row`), if any
    pub fn button_at(area: Rect, column: u16, row: u16) -> Option<InputEvent> {
        Self::cells(area)
            .into_iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, event)| event)
    }

    /// Render the keypad, highlighting the last pressed button
    pub fn render(f: &mut Frame, area: Rect, last_pressed: Option<InputEvent>) {
        if area.width < Self::MIN_WIDTH || area.height < Self::MIN_HEIGHT {
            let hint = Paragraph::new("Terminal too small for keypad")
                .style(Styles::text_muted())
                .alignment(Alignment::Center);
            f.render_widget(hint, area);
            return;
        }

        for (rect, event) in Self::cells(area) {
            let style = Theme::button_style(button_kind(event), last_pressed == Some(event));
            let button = Paragraph::new(event.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(button, rect);
        }
    }
}
