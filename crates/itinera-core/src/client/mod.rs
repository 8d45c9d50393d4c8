//! Planning API client.
//!
//! The [`PlanningApi`] trait is the seam between the submission controller
//! and the network. [`HttpPlanningClient`] implements it over JSON/HTTP with
//! reqwest; tests substitute their own implementations.
//!
//! ```text
//! POST /generate-plan                 PlanRequest -> GeneratedPlan
//! GET  /get-plan?plan_id=…            -> PlanResponse
//! POST /edit-plan?plan_id=…           PlanRequest -> PlanResponse
//! GET  /hotels/search?location=…&checkin=…&checkout=…  -> [Hotel]
//! GET  /health                        -> HealthStatus
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    GeneratedPlan, HealthStatus, Hotel, HotelSearch, PlanId, PlanRequest, PlanResponse,
};

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpPlanningClient, PlanningClientBuilder};

/// Result of a single planning service call.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Endpoint paths relative to the service base URL.
pub mod endpoints {
    pub const GENERATE_PLAN: &str = "/generate-plan";
    pub const GET_PLAN: &str = "/get-plan";
    pub const EDIT_PLAN: &str = "/edit-plan";
    pub const SEARCH_HOTELS: &str = "/hotels/search";
    pub const HEALTH: &str = "/health";
}

/// Operations exposed by the remote planning service.
#[async_trait]
pub trait PlanningApi: Send + Sync {
    /// Requests a new plan; returns its identifier.
    async fn generate_plan(&self, request: &PlanRequest) -> ApiResult<GeneratedPlan>;

    /// Fetches a previously generated plan.
    async fn get_plan(&self, plan_id: &PlanId) -> ApiResult<PlanResponse>;

    /// Regenerates an existing plan from a new request.
    async fn edit_plan(&self, plan_id: &PlanId, request: &PlanRequest) -> ApiResult<PlanResponse>;

    /// Searches hotels for a stay.
    async fn search_hotels(&self, search: &HotelSearch) -> ApiResult<Vec<Hotel>>;

    /// Reports service liveness.
    async fn check_health(&self) -> ApiResult<HealthStatus>;
}

#[async_trait]
impl<T: PlanningApi + ?Sized> PlanningApi for Arc<T> {
    async fn generate_plan(&self, request: &PlanRequest) -> ApiResult<GeneratedPlan> {
        (**self).generate_plan(request).await
    }

    async fn get_plan(&self, plan_id: &PlanId) -> ApiResult<PlanResponse> {
        (**self).get_plan(plan_id).await
    }

    async fn edit_plan(&self, plan_id: &PlanId, request: &PlanRequest) -> ApiResult<PlanResponse> {
        (**self).edit_plan(plan_id, request).await
    }

    async fn search_hotels(&self, search: &HotelSearch) -> ApiResult<Vec<Hotel>> {
        (**self).search_hotels(search).await
    }

    async fn check_health(&self) -> ApiResult<HealthStatus> {
        (**self).check_health().await
    }
}
