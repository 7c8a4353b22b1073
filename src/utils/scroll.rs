use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Handles all scroll-related calculations and line wrapping
pub struct ScrollCalculator;

impl ScrollCalculator {
    /// Pre-wrap the given lines to a specific width, preserving styles and wrapping at word
    /// boundaries (long tokens are broken when no boundary fits). Rendering the result without
    /// ratatui's own wrapping keeps line counts and output in agreement.
    pub fn prewrap_lines(lines: &[Line], width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut out: Vec<Line<'static>> = Vec::with_capacity(lines.len());
        for line in lines {
            let cells: Vec<(char, Style)> = line
                .spans
                .iter()
                .flat_map(|span| span.content.chars().map(move |ch| (ch, span.style)))
                .collect();

            if width == 0 || display_width(&cells) <= width {
                out.push(cells_to_line(&cells));
                continue;
            }

            let mut start = 0;
            let mut first_row = true;
            while start < cells.len() {
                if !first_row {
                    while start < cells.len() && cells[start].0 == ' ' {
                        start += 1;
                    }
                    if start >= cells.len() {
                        break;
                    }
                }
                first_row = false;

                let mut used = 0;
                let mut end = start;
                let mut last_space = None;
                while end < cells.len() {
                    let ch_width = cells[end].0.width().unwrap_or(0);
                    if used + ch_width > width {
                        break;
                    }
                    if cells[end].0 == ' ' {
                        last_space = Some(end);
                    }
                    used += ch_width;
                    end += 1;
                }

                if end < cells.len() {
                    if let Some(space) = last_space.filter(|space| *space > start) {
                        end = space;
                    }
                }
                if end == start {
                    end = start + 1;
                }

                out.push(cells_to_line(&cells[start..end]));
                start = end;
            }
        }
        out
    }

    /// Largest top offset that still fills the viewport.
    pub fn max_scroll_offset(total_lines: usize, available_height: u16) -> u16 {
        let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
        total.saturating_sub(available_height)
    }

    /// Clamp a requested offset into `0..=max`.
    pub fn clamp_offset(offset: u16, total_lines: usize, available_height: u16) -> u16 {
        offset.min(Self::max_scroll_offset(total_lines, available_height))
    }
}

fn display_width(cells: &[(char, Style)]) -> usize {
    cells.iter().map(|(ch, _)| ch.width().unwrap_or(0)).sum()
}

fn cells_to_line(cells: &[(char, Style)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style: Option<Style> = None;
    for (ch, style) in cells {
        if current_style != Some(*style) {
            if let Some(prev) = current_style {
                spans.push(Span::styled(std::mem::take(&mut current), prev));
            }
            current_style = Some(*style);
        }
        current.push(*ch);
    }
    if let Some(style) = current_style {
        spans.push(Span::styled(current, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn short_lines_pass_through() {
        let lines = vec![Line::from("a binary heap"), Line::from("")];
        let wrapped = ScrollCalculator::prewrap_lines(&lines, 40);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(text_of(&wrapped[0]), "a binary heap");
        assert_eq!(text_of(&wrapped[1]), "");
    }

    #[test]
    fn wraps_at_word_boundaries_and_drops_leading_spaces() {
        let lines = vec![Line::from("merge sort splits the array in half")];
        let wrapped = ScrollCalculator::prewrap_lines(&lines, 12);
        let rows: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(rows, vec!["merge sort", "splits the", "array in", "half"]);
    }

    #[test]
    fn breaks_tokens_longer_than_width() {
        let lines = vec![Line::from("abcdefghij")];
        let wrapped = ScrollCalculator::prewrap_lines(&lines, 4);
        let rows: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn preserves_span_styles_across_rows() {
        let bold = Style::default().fg(Color::Green);
        let plain = Style::default();
        let lines = vec![Line::from(vec![
            Span::styled("You", bold),
            Span::styled(" said something long", plain),
        ])];
        let wrapped = ScrollCalculator::prewrap_lines(&lines, 10);
        assert_eq!(wrapped[0].spans[0].content, "You");
        assert_eq!(wrapped[0].spans[0].style, bold);
        assert!(wrapped[1..]
            .iter()
            .all(|line| line.spans.iter().all(|s| s.style == plain)));
    }

    #[test]
    fn wide_characters_count_double() {
        let lines = vec![Line::from("排序算法")];
        let wrapped = ScrollCalculator::prewrap_lines(&lines, 4);
        let rows: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(rows, vec!["排序", "算法"]);
    }

    #[test]
    fn max_offset_saturates() {
        assert_eq!(ScrollCalculator::max_scroll_offset(5, 10), 0);
        assert_eq!(ScrollCalculator::max_scroll_offset(25, 10), 15);
        assert_eq!(ScrollCalculator::clamp_offset(40, 25, 10), 15);
        assert_eq!(ScrollCalculator::clamp_offset(3, 25, 10), 3);
    }
}
