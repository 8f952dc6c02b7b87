use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render the delete confirmation for the swatch named `label`
pub fn render_confirm_dialog(frame: &mut Frame, label: &str, area: Rect) {
    let dialog_area = centered_rect(50, 30, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Delete Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ERROR));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [message_area, _, button_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines = vec![
        Line::from("Remove this swatch from the palette?"),
        Line::from(""),
        Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(colors::PENDING)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), message_area);

    let buttons = Line::from(vec![
        Span::styled(
            " [y] Yes ",
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            " [n] No ",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), button_area);
}
