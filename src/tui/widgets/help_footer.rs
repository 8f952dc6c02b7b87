use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Mode;
use crate::tui::colors;

/// Render the key hints for the current mode
pub fn render_help_footer(frame: &mut Frame, mode: Mode, area: Rect) {
    let spans: Vec<Span> = help_for(mode)
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(*desc, Style::default().fg(colors::MUTED)),
                Span::raw("  "),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(paragraph, area);
}

fn help_for(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Normal => &[
            ("j/k", "Move"),
            ("a", "Add"),
            ("e", "Edit"),
            ("m", "Move Swatch"),
            ("d", "Delete"),
            ("r", "Reload"),
            ("q", "Quit"),
        ],
        Mode::Insert => &[("0-9a-f", "Hex"), ("Enter/Esc", "Done")],
        Mode::Grab => &[("j/k", "Target"), ("Enter", "Drop"), ("Esc", "Cancel")],
        Mode::Dialog => &[("y", "Yes"), ("n", "No"), ("Esc", "Cancel")],
    }
}
