use std::sync::Arc;

use crate::api::client::ModelClient;

/// Backend-facing state: which model to call, and the one request that may
/// be outstanding.
pub struct SessionContext {
    pub client: Arc<dyn ModelClient>,
    pub model: String,
    pub system_instruction: String,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl SessionContext {
    pub fn new(client: Arc<dyn ModelClient>, model: String, system_instruction: String) -> Self {
        Self {
            client,
            model,
            system_instruction,
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_request(&self) -> Option<u64> {
        self.in_flight
    }

    /// Reserve a new request id and mark it outstanding. Returns `None`
    /// while another request is still in flight.
    pub fn begin_request(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);
        Some(id)
    }

    /// Clear the outstanding request if `request_id` is the one in flight.
    pub fn finish_request(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
