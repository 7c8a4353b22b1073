use std::sync::Arc;
use std::time::Instant;

use crate::api::client::ModelClient;
use crate::core::transcript::Transcript;
use crate::ui::layout::{ChatAreas, Layout, LayoutEngine};
use crate::ui::theme::Theme;
use crate::utils::scroll::ScrollCalculator;

pub mod actions;
pub mod conversation;
pub mod session;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AppAction, AppActionContext, AppCommand};
pub use conversation::ConversationController;
pub use session::SessionContext;
pub use ui_state::UiState;

/// Milliseconds per typing-indicator frame.
const TYPING_FRAME_MS: u128 = 350;

/// Configuration parameters for initializing an App
pub struct AppInitConfig {
    pub client: Arc<dyn ModelClient>,
    pub model: String,
    pub system_instruction: String,
    pub theme: Theme,
}

pub struct App {
    pub transcript: Transcript,
    pub session: SessionContext,
    pub ui: UiState,
}

impl App {
    pub fn new(init: AppInitConfig) -> Self {
        Self {
            transcript: Transcript::new(),
            session: SessionContext::new(init.client, init.model, init.system_instruction),
            ui: UiState::new(init.theme),
        }
    }

    /// Returns a controller for conversation operations.
    pub fn conversation(&mut self) -> ConversationController<'_> {
        ConversationController::new(&mut self.transcript, &mut self.session, &mut self.ui)
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_request_in_flight()
    }

    /// Whether pressing Enter would send anything.
    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.ui.input_is_blank()
    }

    pub fn typing_frame(&self) -> Option<usize> {
        if !self.is_loading() {
            return None;
        }
        let elapsed = self
            .ui
            .loading_started()
            .map(|start| Instant::now().duration_since(start).as_millis())
            .unwrap_or(0);
        Some((elapsed / TYPING_FRAME_MS) as usize)
    }

    pub fn layout_transcript(&self, width: u16) -> Layout {
        LayoutEngine::layout_transcript(
            self.transcript.messages(),
            &self.ui.theme,
            width,
            self.typing_frame(),
        )
    }

    /// Top line to render for a transcript of `total_lines` in a viewport of
    /// `available_height`.
    pub fn effective_scroll_offset(&self, total_lines: usize, available_height: u16) -> u16 {
        if self.ui.auto_scroll {
            ScrollCalculator::max_scroll_offset(total_lines, available_height)
        } else {
            ScrollCalculator::clamp_offset(self.ui.scroll_offset, total_lines, available_height)
        }
    }

    fn transcript_metrics(&self, ctx: AppActionContext) -> (usize, u16) {
        let (width, height) = ChatAreas::transcript_size(ctx.term_width, ctx.term_height);
        (self.layout_transcript(width).lines.len(), height)
    }

    fn set_scroll(&mut self, offset: u16, total_lines: usize, height: u16) {
        let max = ScrollCalculator::max_scroll_offset(total_lines, height);
        self.ui.scroll_offset = offset.min(max);
        self.ui.auto_scroll = self.ui.scroll_offset >= max;
    }

    pub fn scroll_up(&mut self, lines: u16, ctx: AppActionContext) {
        let (total, height) = self.transcript_metrics(ctx);
        let current = self.effective_scroll_offset(total, height);
        self.set_scroll(current.saturating_sub(lines), total, height);
    }

    pub fn scroll_down(&mut self, lines: u16, ctx: AppActionContext) {
        let (total, height) = self.transcript_metrics(ctx);
        let current = self.effective_scroll_offset(total, height);
        self.set_scroll(current.saturating_add(lines), total, height);
    }

    pub fn scroll_to_top(&mut self, ctx: AppActionContext) {
        let (total, height) = self.transcript_metrics(ctx);
        self.set_scroll(0, total, height);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.ui.pin_to_bottom();
    }

    #[cfg(test)]
    pub fn new_test_app(client: Arc<dyn ModelClient>) -> Self {
        Self::new(AppInitConfig {
            client,
            model: "test-model".into(),
            system_instruction: "test instruction".into(),
            theme: Theme::dark_default(),
        })
    }
}
