use ratatui::{
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::core::app::App;
use crate::core::constants::{FOOTER_TEXT, INPUT_PLACEHOLDER};
use crate::ui::layout::ChatAreas;

const TITLE: &str = "DSA Sage ✦";
const SUBTITLE: &str = "ALGORITHM SPECIALIST";
const KEY_HINTS: &str = "Enter send • Ctrl+L clear • Ctrl+C quit";

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let areas = ChatAreas::split(f.area());
    render_header(f, app, areas.header);
    render_transcript(f, app, areas.transcript);
    render_input(f, app, areas.input);

    let footer = Paragraph::new(FOOTER_TEXT)
        .style(theme.footer_style)
        .alignment(Alignment::Center);
    f.render_widget(footer, areas.footer);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let lines = vec![
        Line::from(vec![
            Span::styled(TITLE, theme.title_style),
            Span::raw("  "),
            Span::styled(SUBTITLE, theme.subtitle_style),
        ]),
        Line::from(vec![
            Span::styled(app.session.model.clone(), theme.timestamp_style),
            Span::styled(format!("  •  {KEY_HINTS}"), theme.subtitle_style),
        ]),
    ];
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.header_border_style),
    );
    f.render_widget(header, area);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let layout = app.layout_transcript(area.width);
    let offset = app.effective_scroll_offset(layout.lines.len(), area.height);
    let transcript = Paragraph::new(layout.lines).scroll((offset, 0));
    f.render_widget(transcript, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let loading = app.is_loading();

    let (border_style, title) = if loading {
        (theme.input_disabled_border_style, " Sage is thinking... ")
    } else if app.can_send() {
        (theme.input_border_style, " Enter to send ")
    } else {
        (theme.input_disabled_border_style, " Ask away ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, theme.input_title_style));
    let inner = block.inner(area);

    let input = app.ui.input();
    let (content, cursor_col) = if input.is_empty() {
        (
            Line::from(Span::styled(INPUT_PLACEHOLDER, theme.input_placeholder_style)),
            0,
        )
    } else {
        let (visible, col) = visible_tail(input, inner.width);
        (Line::from(Span::styled(visible, theme.input_text_style)), col)
    };

    f.render_widget(Paragraph::new(content).block(block), area);

    if !loading && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(inner.x + cursor_col, inner.y));
    }
}

/// The end of `input` that fits in `width` columns with room for the cursor,
/// plus the column the cursor lands on.
fn visible_tail(input: &str, width: u16) -> (String, u16) {
    let budget = usize::from(width.saturating_sub(1));
    let mut used = 0usize;
    let mut start = input.len();

    for (idx, ch) in input.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    (input[start..].to_string(), used as u16)
}
