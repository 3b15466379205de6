use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tokio::sync::Notify;

use crate::{
    relay::{ContactSubmission, FormRelay, RelayResponse},
    RelayError, RelayResult,
};

/// Result for a mocked relay submission.
pub enum MockRelayResult {
    Response(RelayResponse),
    Error(RelayError),
}

impl MockRelayResult {
    pub fn success() -> Self {
        Self::Response(RelayResponse {
            success: true,
            message: Some("Email sent successfully!".to_string()),
        })
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Response(RelayResponse {
            success: false,
            message: Some(message.into()),
        })
    }

    pub fn error(error: RelayError) -> Self {
        Self::Error(error)
    }
}

#[derive(Default)]
struct MockFormRelayState {
    mocked_results: VecDeque<MockRelayResult>,
    tracked_submissions: Vec<ContactSubmission>,
}

/// A mock relay that records submissions and answers with predefined results.
#[derive(Default)]
pub struct MockFormRelay {
    gate: Option<Arc<Notify>>,
    state: Mutex<MockFormRelayState>,
}

impl MockFormRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every submission until the returned gate is notified once per call.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn enqueue(&self, result: MockRelayResult) -> &Self {
        self.state
            .lock()
            .expect("mock state poisoned")
            .mocked_results
            .push_back(result);
        self
    }

    pub fn tracked_submissions(&self) -> Vec<ContactSubmission> {
        self.state
            .lock()
            .expect("mock state poisoned")
            .tracked_submissions
            .clone()
    }
}

#[async_trait::async_trait]
impl FormRelay for MockFormRelay {
    fn provider(&self) -> &'static str {
        "mock"
    }

    async fn submit(&self, submission: &ContactSubmission) -> RelayResult<RelayResponse> {
        self.state
            .lock()
            .expect("mock state poisoned")
            .tracked_submissions
            .push(submission.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let result = self
            .state
            .lock()
            .expect("mock state poisoned")
            .mocked_results
            .pop_front()
            .ok_or_else(|| {
                RelayError::InvalidResponse("mock", "no mocked relay results available".into())
            })?;

        match result {
            MockRelayResult::Response(response) => Ok(response),
            MockRelayResult::Error(error) => Err(error),
        }
    }
}
