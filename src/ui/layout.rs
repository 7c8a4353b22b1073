use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};
use ratatui::text::{Line, Span};

use super::theme::Theme;
use crate::core::message::{Message, Role};
use crate::utils::scroll::ScrollCalculator;

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen regions, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatAreas {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub footer: Rect,
}

impl ChatAreas {
    pub fn split(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        Self {
            header: chunks[0],
            transcript: chunks[1],
            input: chunks[2],
            footer: chunks[3],
        }
    }

    /// Transcript pane size for a terminal of the given size.
    pub fn transcript_size(term_width: u16, term_height: u16) -> (u16, u16) {
        let areas = Self::split(Rect::new(0, 0, term_width, term_height));
        (areas.transcript.width, areas.transcript.height)
    }
}

/// Result of a layout pass: the transcript as wrapped, styled lines.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    pub lines: Vec<Line<'static>>,
}

pub struct LayoutEngine;

impl LayoutEngine {
    /// Lay out the transcript at `width`, appending the typing indicator when
    /// `typing_frame` is set. The output is already wrapped.
    pub fn layout_transcript(
        messages: &[Message],
        theme: &Theme,
        width: u16,
        typing_frame: Option<usize>,
    ) -> Layout {
        let mut lines: Vec<Line<'static>> = Vec::new();
        for message in messages {
            let base = Self::message_lines(message, theme);
            lines.extend(ScrollCalculator::prewrap_lines(&base, width));
        }

        if let Some(frame) = typing_frame {
            lines.extend(ScrollCalculator::prewrap_lines(
                &[Self::typing_line(theme, frame)],
                width,
            ));
        }

        Layout { lines }
    }

    fn message_lines(message: &Message, theme: &Theme) -> Vec<Line<'static>> {
        let (prefix_style, text_style) = match message.role {
            Role::User => (theme.user_prefix_style, theme.user_text_style),
            Role::Model => (theme.model_prefix_style, theme.model_text_style),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(message.role.display_name().to_string(), prefix_style),
            Span::raw("  "),
            Span::styled(message.time_label(), theme.timestamp_style),
        ])];
        for text_line in message.text.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), text_style)));
        }
        lines.push(Line::from(""));
        lines
    }

    fn typing_line(theme: &Theme, frame: usize) -> Line<'static> {
        let lit = frame % 3;
        let mut spans = vec![
            Span::styled(Role::Model.display_name().to_string(), theme.model_prefix_style),
            Span::raw("  "),
        ];
        for dot in 0..3 {
            let style = if dot == lit {
                theme.model_text_style
            } else {
                theme.typing_indicator_style
            };
            spans.push(Span::styled("●", style));
            if dot < 2 {
                spans.push(Span::raw(" "));
            }
        }
        Line::from(spans)
    }
}
