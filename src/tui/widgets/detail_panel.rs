use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::palette::EffectSink;
use crate::tui::colors;

/// Render the selected swatch at full size with its fields
pub fn render_detail_panel<S: EffectSink>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default().title(" Swatch ").borders(Borders::ALL);

    let Some(record) = app.selected_color() else {
        let empty = Paragraph::new("Empty palette. Press 'a' to add a color.")
            .block(block)
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(empty, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [swatch_area, fields_area] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Fill(1)]).areas(inner);

    let rgb = record.rgb();
    let label = record.name.label().unwrap_or("");
    let swatch = Paragraph::new(Line::from(Span::styled(
        format!(" {}", label),
        Style::default()
            .fg(colors::text_on(rgb))
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::swatch(rgb)));
    frame.render_widget(swatch, swatch_area);

    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(name, Style::default().fg(colors::MUTED)),
            Span::raw(value),
        ])
    };

    let rgb_text = match record.rgb {
        Some(rgb) => format!("rgb({})", rgb),
        None => "(not computed)".to_string(),
    };

    let lines = vec![
        Line::from(""),
        field("Name:  ", label.to_string()),
        field("Hex:   ", record.hex.display()),
        field("RGB:   ", rgb_text),
        field("Order: ", format!("{} of {}", record.order, app.palette.len())),
        field("ID:    ", record.id.to_string()),
    ];

    frame.render_widget(Paragraph::new(lines), fields_area);
}
