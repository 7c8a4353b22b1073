use tracing::{debug, warn};

use super::{session::SessionContext, ui_state::UiState};
use crate::api::client::ReplyRequest;
use crate::core::reply::ReplyParams;
use crate::core::transcript::Transcript;

pub struct ConversationController<'a> {
    transcript: &'a mut Transcript,
    session: &'a mut SessionContext,
    ui: &'a mut UiState,
}

impl<'a> ConversationController<'a> {
    pub fn new(
        transcript: &'a mut Transcript,
        session: &'a mut SessionContext,
        ui: &'a mut UiState,
    ) -> Self {
        Self {
            transcript,
            session,
            ui,
        }
    }

    /// Send the current input. Does nothing when the input is blank or a
    /// request is already outstanding; otherwise appends the user message
    /// and returns the request to spawn.
    pub fn submit_input(&mut self) -> Option<ReplyParams> {
        if self.ui.input_is_blank() {
            return None;
        }
        let request_id = self.session.begin_request()?;

        // History is captured before the new message joins the transcript.
        let history = self.transcript.history();
        let message = self.ui.take_input();
        self.transcript.push_user(message.clone());
        self.ui.start_loading();
        self.ui.pin_to_bottom();
        debug!(request_id, history = history.len(), "submitting message");

        Some(ReplyParams {
            client: self.session.client.clone(),
            request: ReplyRequest {
                model: self.session.model.clone(),
                system_instruction: self.session.system_instruction.clone(),
                history,
                message,
            },
            request_id,
        })
    }

    /// Append the model's reply if it answers the outstanding request.
    pub fn receive_reply(&mut self, request_id: u64, text: String) -> bool {
        if !self.session.finish_request(request_id) {
            warn!(
                request_id,
                in_flight = ?self.session.in_flight_request(),
                "dropping reply for a request that is not in flight"
            );
            return false;
        }
        self.transcript.push_model(text);
        self.ui.stop_loading();
        self.ui.pin_to_bottom();
        true
    }

    /// Replace the transcript with the reset message. An outstanding request
    /// is left alone and its reply lands in the fresh transcript.
    pub fn clear(&mut self) {
        self.transcript.reset();
        self.ui.pin_to_bottom();
    }
}
