use std::time::Instant;

use crate::ui::theme::Theme;

/// Presentation state owned by the event loop: input buffer, scroll
/// position, and loading animation clock.
pub struct UiState {
    pub theme: Theme,
    input: String,
    /// Top line of the transcript viewport when not pinned to the bottom.
    pub scroll_offset: u16,
    /// When set, the viewport follows the newest line.
    pub auto_scroll: bool,
    pub exit_requested: bool,
    loading_started: Option<Instant>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            input: String::new(),
            scroll_offset: 0,
            auto_scroll: true,
            exit_requested: false,
            loading_started: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Take the buffer, leaving it empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            self.input.push(' ');
        } else if !ch.is_control() {
            self.input.push(ch);
        }
    }

    /// The input is a single line: pasted line breaks become spaces and
    /// other control characters are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n");
        for ch in normalized.chars() {
            self.insert_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn input_is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    pub fn start_loading(&mut self) {
        self.loading_started = Some(Instant::now());
    }

    pub fn stop_loading(&mut self) {
        self.loading_started = None;
    }

    pub fn loading_started(&self) -> Option<Instant> {
        self.loading_started
    }

    pub fn pin_to_bottom(&mut self) {
        self.auto_scroll = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_text_flattens_line_breaks() {
        let mut ui = UiState::new(Theme::dark_default());
        ui.insert_text("line one\r\nline two\nthree\tx");
        assert_eq!(ui.input(), "line one line two threex");
    }

    #[test]
    fn take_input_leaves_buffer_empty() {
        let mut ui = UiState::new(Theme::dark_default());
        ui.set_input_text("dijkstra");
        assert_eq!(ui.take_input(), "dijkstra");
        assert_eq!(ui.input(), "");
        assert!(ui.input_is_blank());
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut ui = UiState::new(Theme::dark_default());
        ui.insert_text("héap");
        ui.backspace();
        assert_eq!(ui.input(), "héa");
    }
}
