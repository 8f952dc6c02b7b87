use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, DialogKind, NotificationLevel};
use crate::palette::EffectSink;

use super::colors;
use super::widgets::{
    render_confirm_dialog, render_detail_panel, render_help_footer, render_hex_editor,
    render_swatch_list,
};

/// Main render function
pub fn render<S: EffectSink>(frame: &mut Frame, app: &mut App<S>) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);

    // Body layout: swatch list, detail panel
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(body_area);

    render_swatch_list(frame, app, list_area);
    render_detail_panel(frame, app, detail_area);
    render_help_footer(frame, app.mode, footer_area);

    match &app.dialog {
        DialogKind::None => {}
        DialogKind::ConfirmDelete { label, .. } => render_confirm_dialog(frame, label, area),
        DialogKind::EditHex(editor) => {
            render_hex_editor(frame, editor, app.palette.get(editor.id), area)
        }
    }

    // Notifications (stacked popups in bottom-right)
    if !app.notifications.is_empty() {
        render_notifications(frame, app, area);
    }
}

/// Render header bar
fn render_header<S: EffectSink>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mode_str = format!("[{}]", app.mode);
    let title = "swatchbook";

    let header_text = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(
            " ".repeat(
                area.width
                    .saturating_sub(title.len() as u16 + mode_str.len() as u16)
                    as usize,
            ),
        ),
        Span::styled(mode_str, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(header, area);
}

/// Render notifications as stacked popups in bottom-right
/// Oldest at top, newest at bottom
fn render_notifications<S: EffectSink>(frame: &mut Frame, app: &App<S>, area: Rect) {
    const POPUP_WIDTH: u16 = 40;
    const POPUP_HEIGHT: u16 = 3;
    const MAX_VISIBLE: usize = 5;

    let start_idx = app.notifications.len().saturating_sub(MAX_VISIBLE);
    let visible = &app.notifications[start_idx..];
    let count = visible.len();

    for (i, notification) in visible.iter().enumerate() {
        let (label, border_color) = match notification.level {
            NotificationLevel::Info => ("INFO", colors::PRIMARY),
            NotificationLevel::Error => ("ERROR", colors::ERROR),
        };

        let slide_offset = notification.slide_offset(POPUP_WIDTH + 2);

        // i=0 is oldest (top), i=count-1 is newest (bottom)
        let y_offset = (count - 1 - i) as u16 * POPUP_HEIGHT;
        let popup_x = area.width.saturating_sub(POPUP_WIDTH + 1) + slide_offset;
        let popup_y = area.height.saturating_sub(POPUP_HEIGHT + 1 + y_offset);

        if popup_x >= area.width {
            continue;
        }

        let visible_width = area.width.saturating_sub(popup_x).min(POPUP_WIDTH);
        if visible_width == 0 {
            continue;
        }

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: visible_width,
            height: POPUP_HEIGHT,
        };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", label))
            .title_style(
                Style::default()
                    .fg(border_color)
                    .add_modifier(Modifier::BOLD),
            );

        let msg = truncate(&notification.message, visible_width.saturating_sub(4) as usize);
        frame.render_widget(Paragraph::new(msg).block(block), popup_area);
    }
}

/// Cut `text` to at most `max_width` columns, marking the cut with "..."
pub fn truncate(text: &str, max_width: usize) -> String {
    let width = |s: &str| s.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>();

    if width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }

    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center);

    center
}
