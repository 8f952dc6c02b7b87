use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::HexEditor;
use crate::palette::ColorRecord;
use crate::tui::colors;
use crate::tui::ui::centered_rect;

/// Render the hex editor with a live preview of the edited swatch
pub fn render_hex_editor(
    frame: &mut Frame,
    editor: &HexEditor,
    record: Option<&ColorRecord>,
    area: Rect,
) {
    let dialog_area = centered_rect(40, 40, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Edit Color ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [input_area, separator_area, preview_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    // Telescope-style prompt: "> #{hex}│"
    let input_line = Line::from(vec![
        Span::styled("> #", Style::default().fg(colors::PRIMARY)),
        Span::raw(editor.input.as_str()),
        Span::styled("│", Style::default().fg(colors::PRIMARY)),
        Span::styled(
            format!(" {}/6", editor.input.len()),
            Style::default().fg(colors::MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER_FOCUS));
    frame.render_widget(separator, separator_area);

    let Some(record) = record else {
        return;
    };

    let rgb = record.rgb();
    let preview = Paragraph::new(Line::from(Span::styled(
        format!(" {}  rgb({})", record.hex.display(), rgb),
        Style::default()
            .fg(colors::text_on(rgb))
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::swatch(rgb)));
    frame.render_widget(preview, preview_area);
}
