//! Health endpoints: liveness and readiness probes.
//!
//! Readiness reflects whether the startup store connection succeeded; the
//! process keeps serving either way.

use actix_web::{HttpResponse, get, http::header, web};

/// Shared health state for readiness and liveness checks.
#[derive(Debug, Clone, Copy)]
pub struct HealthState {
    ready: bool,
}

impl HealthState {
    /// Create a state that reports `store_ready` on the readiness probe.
    pub const fn new(store_ready: bool) -> Self {
        Self { ready: store_ready }
    }

    /// Return readiness state.
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. Returns 200 when the store connection is up and 503
/// otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Store connection established"),
        (status = 503, description = "Store connection unavailable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process can answer requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HealthState::probe_response(true)
}
