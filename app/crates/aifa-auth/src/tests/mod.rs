//! Unit tests for the auth crate, with in-process doubles for the remote services.

mod verification_session;

use aifa_api::{ApiError, ApiResult, AuthParams, IdentityService, ServiceResponse, SessionService};
use aifa_store::{KeyValueStore, MemoryStore, Result as StoreResult, StoreError};

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

pub(crate) fn response(code: i64, msg: &str, data: Option<Value>) -> ServiceResponse {
    ServiceResponse {
        code,
        msg: msg.to_string(),
        data,
    }
}

pub(crate) fn transport_error() -> ApiError {
    ApiError::status(503, "http://identity.test/auth/ClientCheck")
}

// =============================================================================
// Identity service double
// =============================================================================

/// Answers every check with a fixed outcome and records the candidates it saw.
pub(crate) struct MockIdentityService {
    outcome: Mutex<Outcome>,
    pub(crate) candidates: Mutex<Vec<String>>,
}

#[derive(Clone)]
pub(crate) enum Outcome {
    Code(i64),
    TransportFailure,
}

impl MockIdentityService {
    pub(crate) fn answering(code: i64) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Outcome::Code(code)),
            candidates: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Outcome::TransportFailure),
            candidates: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub(crate) fn calls(&self) -> usize {
        self.candidates.lock().unwrap().len()
    }

    pub(crate) fn candidates(&self) -> Vec<String> {
        self.candidates.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityService for MockIdentityService {
    async fn check_client(&self, client_identifier: &str) -> ApiResult<ServiceResponse> {
        self.candidates
            .lock()
            .unwrap()
            .push(client_identifier.to_string());

        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            Outcome::Code(code) => Ok(response(code, "client check", Some(json!({})))),
            Outcome::TransportFailure => Err(transport_error()),
        }
    }
}

/// Blocks inside `check_client` until released, to observe an in-flight bootstrap.
pub(crate) struct GatedIdentityService {
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
}

impl GatedIdentityService {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            entered: Notify::new(),
            release: Notify::new(),
        })
    }
}

#[async_trait]
impl IdentityService for GatedIdentityService {
    async fn check_client(&self, _client_identifier: &str) -> ApiResult<ServiceResponse> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(response(1000, "ok", None))
    }
}

// =============================================================================
// Session service double
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoginCall {
    pub(crate) phone: String,
    pub(crate) code: String,
    pub(crate) iv: String,
    pub(crate) params: AuthParams,
}

pub(crate) struct MockSessionService {
    send_code_response: Mutex<ApiResult<ServiceResponse>>,
    phone_login_response: Mutex<ApiResult<ServiceResponse>>,
    pub(crate) send_calls: Mutex<Vec<(String, AuthParams)>>,
    pub(crate) login_calls: Mutex<Vec<LoginCall>>,
}

impl MockSessionService {
    pub(crate) fn new(send_code: ServiceResponse, phone_login: ServiceResponse) -> Arc<Self> {
        Arc::new(Self {
            send_code_response: Mutex::new(Ok(send_code)),
            phone_login_response: Mutex::new(Ok(phone_login)),
            send_calls: Mutex::new(Vec::new()),
            login_calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn set_send_code(&self, result: ApiResult<ServiceResponse>) {
        *self.send_code_response.lock().unwrap() = result;
    }

    pub(crate) fn set_phone_login(&self, result: ApiResult<ServiceResponse>) {
        *self.phone_login_response.lock().unwrap() = result;
    }

    pub(crate) fn send_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }

    fn replay(slot: &Mutex<ApiResult<ServiceResponse>>) -> ApiResult<ServiceResponse> {
        match &*slot.lock().unwrap() {
            Ok(response) => Ok(response.clone()),
            Err(_) => Err(transport_error()),
        }
    }
}

#[async_trait]
impl SessionService for MockSessionService {
    async fn send_code(&self, phone: &str, params: &AuthParams) -> ApiResult<ServiceResponse> {
        self.send_calls
            .lock()
            .unwrap()
            .push((phone.to_string(), params.clone()));
        // Give an overlapping request the chance to run while this one is pending
        tokio::task::yield_now().await;
        Self::replay(&self.send_code_response)
    }

    async fn phone_login(
        &self,
        phone: &str,
        code: &str,
        iv: &str,
        params: &AuthParams,
    ) -> ApiResult<ServiceResponse> {
        self.login_calls.lock().unwrap().push(LoginCall {
            phone: phone.to_string(),
            code: code.to_string(),
            iv: iv.to_string(),
            params: params.clone(),
        });
        Self::replay(&self.phone_login_response)
    }
}

// =============================================================================
// Store double
// =============================================================================

/// Memory store with switchable read and write failures.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub(crate) inner: MemoryStore,
    pub(crate) fail_reads: AtomicBool,
    pub(crate) fail_writes: AtomicBool,
}

impl FlakyStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn io_failure() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only")
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::file_read(PathBuf::from("/flaky"), Self::io_failure()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::file_write(PathBuf::from("/flaky"), Self::io_failure()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::file_write(PathBuf::from("/flaky"), Self::io_failure()));
        }
        self.inner.remove(key).await
    }
}
