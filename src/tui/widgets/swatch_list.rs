use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::palette::{ColorName, ColorRecord, EffectSink};
use crate::tui::colors;

/// Render the palette, one swatch per item in order
pub fn render_swatch_list<S: EffectSink>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let title = format!(" Palette ({}) ", app.palette.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    let grabbed = app.grab.map(|g| g.id);

    let items: Vec<ListItem> = app
        .palette
        .records()
        .iter()
        .map(|record| swatch_item(record, grabbed == Some(record.id)))
        .collect();

    let highlight = if grabbed.is_some() {
        Style::default().bg(colors::SELECTION_BG).fg(colors::GRAB)
    } else {
        Style::default().bg(colors::SELECTION_BG)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight.add_modifier(Modifier::BOLD))
        .highlight_symbol(if grabbed.is_some() { "=> " } else { ">> " });

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn name_span(name: &ColorName) -> Span<'static> {
    let style = match name {
        ColorName::Named(_) => Style::default().add_modifier(Modifier::BOLD),
        ColorName::Pending => Style::default().fg(colors::PENDING),
        ColorName::Unnamed => Style::default().fg(colors::MUTED),
    };
    Span::styled(name.label().unwrap_or("(unnamed)").to_string(), style)
}

fn swatch_item(record: &ColorRecord, grabbed: bool) -> ListItem<'static> {
    let rgb = record.rgb();

    let name = name_span(&record.name);

    let title_line = Line::from(vec![
        Span::styled(format!("{:>2} ", record.order), Style::default().fg(colors::MUTED)),
        Span::styled("      ", Style::default().bg(colors::swatch(rgb))),
        Span::raw(" "),
        name,
        if grabbed {
            Span::styled(" (moving)", Style::default().fg(colors::GRAB))
        } else {
            Span::raw("")
        },
    ]);

    let detail_line = Line::from(vec![
        Span::raw("   "),
        Span::styled("      ", Style::default().bg(colors::swatch(rgb))),
        Span::styled(
            format!(" {}  rgb({})", record.hex.display(), rgb),
            Style::default().fg(colors::MUTED),
        ),
    ]);

    ListItem::new(vec![title_line, detail_line])
}
