//! Scripted transport and client fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::http::{ApiClient, HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;
use crate::state::credential_store::{CredentialStore, MemoryStorage};
use crate::state::session::{Session, SessionContext};

/// Replays queued responses in order and records every request it receives.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, _base: &str, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(204, "")))
    }
}

/// Client wired to a mock transport, in-memory storage and a redirect log.
pub struct Fixture {
    pub client: ApiClient<MockTransport>,
    pub transport: MockTransport,
    pub storage: MemoryStorage,
    pub redirects: Arc<Mutex<Vec<String>>>,
}

impl Fixture {
    pub fn signed_out() -> Self {
        let storage = MemoryStorage::new();
        let session = SessionContext::restore(CredentialStore::new(Arc::new(storage.clone())));
        let transport = MockTransport::default();
        let redirects = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&redirects);
        let client = ApiClient::new(
            ClientConfig::with_api_base("http://backend.test"),
            session,
            transport.clone(),
            Arc::new(move |path: &str| sink.lock().unwrap().push(path.to_owned())),
        );
        Self { client, transport, storage, redirects }
    }

    pub fn signed_in(roles: &[&str]) -> Self {
        let fixture = Self::signed_out();
        let roles = roles.iter().map(|r| (*r).to_owned()).collect();
        fixture.client.session().sign_in(&Session::signed_in("T", "a@b.com", roles, 7));
        fixture
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}
