//! In-memory doubles for the HTTP seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::net::http::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};
use crate::net::middleware::{Navigator, session_client};
use crate::state::session::Session;

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, message: &str) {
        self.responses.lock().unwrap().push_back(Err(ApiError::Transport(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no mock response queued".to_owned())))
    }
}

/// Records navigation targets instead of reloading a page.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn reload_to(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// A session-wired client with every seam observable.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub session: Session,
    pub client: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        let transport = MockTransport::new();
        let navigator = RecordingNavigator::new();
        let session = Session::in_memory();
        let client = session_client(transport.clone(), &session, navigator.clone());
        Self { transport, navigator, session, client }
    }
}
