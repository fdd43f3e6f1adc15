//! Reusable UI widgets
//!
//! Common pieces used across panels: the status bar, the flash message,
//! labeled form fields, link rows, and layout helpers.

use crate::ui::theme::{self, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the status bar at the bottom of the given area
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.accent());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Render a flash message just above the status bar
///
/// The backdrop follows the process-wide dark-mode flag rather than the
/// passed-down theme: the flash floats over whatever is on screen, so it
/// keys off the same global the rest of the presentation layer reads.
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let backdrop = if theme::dark_mode_active() {
        Color::Rgb(9, 9, 11)
    } else {
        Color::Rgb(228, 228, 231)
    };
    let style = if is_error {
        theme.error().bg(backdrop)
    } else {
        theme.success().bg(backdrop)
    };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));
    frame.render_widget(flash, flash_area);
}

/// Render a labeled single-line form field
pub fn render_form_field(
    frame: &mut Frame,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    let border_style = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused { theme.title() } else { theme.text_dim() })
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.panel());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Trailing cursor marker while the field is focused
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).style(theme.panel());
    frame.render_widget(field, inner);
}

/// Render a hotkey-labeled link row, e.g. "[h] GitHub  github.com/yourname"
pub fn link_row<'a>(hotkey: char, label: &'a str, url: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("[{hotkey}] "), theme.accent()),
        Span::styled(
            format!("{label:<10}"),
            theme.text().add_modifier(Modifier::BOLD),
        ),
        Span::styled(url, theme.text_dim()),
    ])
}

/// Render a thin horizontal separator
pub fn render_separator(frame: &mut Frame, theme: &Theme, area: Rect) {
    let line = "─".repeat(area.width as usize);
    let widget = Paragraph::new(line)
        .style(theme.separator())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_link_row_shows_hotkey_and_label() {
        let theme = Theme::dark();
        let line = link_row('h', "GitHub", "https://github.com/yourname", &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("[h] "));
        assert!(text.contains("GitHub"));
        assert!(text.contains("github.com"));
    }

    #[test]
    fn test_form_field_draws_cursor_when_focused() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_form_field(frame, "Name", "Jane", true, &theme, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Jane_"));
    }
}
