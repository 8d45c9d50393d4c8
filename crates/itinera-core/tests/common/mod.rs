#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use itinera_core::{
    client::ApiResult,
    models::{
        BudgetTier, GeneratedPlan, HealthStatus, Hotel, HotelSearch, PlanId, PlanRequest,
        PlanRequestDraft, PlanResponse,
    },
    ApiError, PlanningApi,
};
use jiff::civil::{date, Date};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// The date every test treats as today.
pub fn today() -> Date {
    date(2025, 5, 1)
}

/// The Paris draft: three days from June 1st, medium budget, Art and Food.
pub fn paris_draft() -> PlanRequestDraft {
    PlanRequestDraft::new()
        .with_location("Paris")
        .with_start_date(date(2025, 6, 1))
        .with_days(3)
        .with_budget(BudgetTier::Medium)
        .toggle_interest("Art")
        .toggle_interest("Food")
}

/// In-memory planning service that records every generate-plan request.
pub struct RecordingApi {
    calls: AtomicUsize,
    requests: Mutex<Vec<PlanRequest>>,
    response: Result<PlanId, ApiError>,
    delay: Option<Duration>,
}

impl RecordingApi {
    /// Answers every request with the given plan ID.
    pub fn succeeding(plan_id: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: Ok(PlanId::new(plan_id)),
            delay: None,
        }
    }

    /// Fails every request with an HTTP error.
    pub fn failing(status: u16, detail: Option<&str>) -> Self {
        Self {
            response: Err(ApiError::Http {
                status,
                detail: detail.map(str::to_string),
            }),
            ..Self::succeeding("unused")
        }
    }

    /// Fails every request with a timeout.
    pub fn timing_out() -> Self {
        Self {
            response: Err(ApiError::Timeout),
            ..Self::succeeding("unused")
        }
    }

    /// Waits before answering, keeping the submission in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<PlanRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanningApi for RecordingApi {
    async fn generate_plan(&self, request: &PlanRequest) -> ApiResult<GeneratedPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            Ok(plan_id) => Ok(GeneratedPlan {
                plan_id: plan_id.clone(),
                extra: Default::default(),
            }),
            Err(ApiError::Http { status, detail }) => Err(ApiError::Http {
                status: *status,
                detail: detail.clone(),
            }),
            Err(_) => Err(ApiError::Timeout),
        }
    }

    async fn get_plan(&self, _plan_id: &PlanId) -> ApiResult<PlanResponse> {
        Ok(PlanResponse::default())
    }

    async fn edit_plan(&self, _plan_id: &PlanId, _request: &PlanRequest) -> ApiResult<PlanResponse> {
        Ok(PlanResponse::default())
    }

    async fn search_hotels(&self, _search: &HotelSearch) -> ApiResult<Vec<Hotel>> {
        Ok(Vec::new())
    }

    async fn check_health(&self) -> ApiResult<HealthStatus> {
        Err(ApiError::Timeout)
    }
}

/// Serves one canned HTTP response on a local port and returns the base URL
/// along with a handle yielding the raw request that was received.
///
/// Panics when no local port can be bound.
pub async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|err| panic!("failed to bind test server: {err}"));
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

/// Reads one HTTP request, headers and body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
