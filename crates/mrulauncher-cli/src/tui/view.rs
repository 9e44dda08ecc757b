//! Bar rendering.
//!
//! The bar's buffer is drawn verbatim on the top row; no zone boundaries are
//! needed here.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use mru_engine::Bar;

/// Colors of the bar row.
#[derive(Debug, Clone, Copy)]
pub struct BarTheme {
    pub fg: Color,
    pub bg: Color,
}

impl Default for BarTheme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
        }
    }
}

impl BarTheme {
    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

/// The bar's full buffer as text.
pub fn bar_text(bar: &Bar) -> String {
    String::from_utf8_lossy(bar.data()).into_owned()
}

/// Draw the bar across the top row of `area` and place the cursor after the
/// typed text.
pub fn draw_bar(f: &mut Frame, bar: &Bar, theme: &BarTheme, area: Rect) {
    let row = Rect {
        height: area.height.min(1),
        ..area
    };

    let line = Line::from(bar_text(bar)).style(theme.style());
    f.render_widget(Paragraph::new(line).style(theme.style()), row);

    let column = u16::try_from(bar.cursor()).unwrap_or(u16::MAX);
    if column < row.width {
        f.set_cursor_position(Position::new(row.x + column, row.y));
    }
}
