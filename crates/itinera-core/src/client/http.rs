//! reqwest-backed implementation of [`PlanningApi`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::{
    config::ClientConfig,
    endpoints,
    error::{extract_detail, ApiError},
    ApiResult, PlanningApi,
};
use crate::{
    error::{ConfigResultExt, Result},
    models::{GeneratedPlan, HealthStatus, Hotel, HotelSearch, PlanId, PlanRequest, PlanResponse},
};

/// Builder for creating and configuring [`HttpPlanningClient`] instances.
#[derive(Debug, Clone, Default)]
pub struct PlanningClientBuilder {
    config: ClientConfig,
}

impl PlanningClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every setting with the given configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the service base URL, e.g. `http://localhost:8000`.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(url) = base_url {
            self.config.base_url = url.into();
        }
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.config.timeout = timeout;
        }
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ItineraError::Configuration` if the base URL or timeout is
    /// invalid, or if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<HttpPlanningClient> {
        let config = self.config.validated()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .config_context("Failed to initialize HTTP client")?;
        debug!(
            "Planning client targets {} with a {:?} timeout",
            config.base_url, config.timeout
        );
        Ok(HttpPlanningClient { http, config })
    }
}

/// JSON-over-HTTP client for the planning service.
///
/// Each method issues exactly one request. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpPlanningClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpPlanningClient {
    pub fn builder() -> PlanningClientBuilder {
        PlanningClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        operation: &str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let detail = extract_detail(&body);
            warn!(
                "{operation} failed with status {}: {}",
                status.as_u16(),
                detail.as_deref().unwrap_or("no detail")
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                detail,
            });
        }
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { source })
    }
}

#[async_trait]
impl PlanningApi for HttpPlanningClient {
    async fn generate_plan(&self, request: &PlanRequest) -> ApiResult<GeneratedPlan> {
        info!(
            "Generating a {}-day plan for {}",
            request.days(),
            request.location()
        );
        let response = self
            .http
            .post(self.url(endpoints::GENERATE_PLAN))
            .json(request)
            .send()
            .await?;
        let plan: GeneratedPlan = Self::read_json("generate-plan", response).await?;
        info!("Generated plan {}", plan.plan_id);
        Ok(plan)
    }

    async fn get_plan(&self, plan_id: &PlanId) -> ApiResult<PlanResponse> {
        debug!("Fetching plan {plan_id}");
        let response = self
            .http
            .get(self.url(endpoints::GET_PLAN))
            .query(&[("plan_id", plan_id.as_str())])
            .send()
            .await?;
        Self::read_json("get-plan", response).await
    }

    async fn edit_plan(&self, plan_id: &PlanId, request: &PlanRequest) -> ApiResult<PlanResponse> {
        info!("Editing plan {plan_id}");
        let response = self
            .http
            .post(self.url(endpoints::EDIT_PLAN))
            .query(&[("plan_id", plan_id.as_str())])
            .json(request)
            .send()
            .await?;
        Self::read_json("edit-plan", response).await
    }

    async fn search_hotels(&self, search: &HotelSearch) -> ApiResult<Vec<Hotel>> {
        debug!(
            "Searching hotels in {} from {} to {}",
            search.location(),
            search.checkin(),
            search.checkout()
        );
        let response = self
            .http
            .get(self.url(endpoints::SEARCH_HOTELS))
            .query(&search.query())
            .send()
            .await?;
        let hotels: Vec<Hotel> = Self::read_json("hotels/search", response).await?;
        info!("Found {} hotels in {}", hotels.len(), search.location());
        Ok(hotels)
    }

    async fn check_health(&self) -> ApiResult<HealthStatus> {
        let response = self.http.get(self.url(endpoints::HEALTH)).send().await?;
        Self::read_json("health", response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = HttpPlanningClient::builder()
            .with_base_url(Some("http://localhost:8000/"))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(endpoints::HEALTH), "http://localhost:8000/health");
    }

    #[test]
    fn test_builder_defaults() {
        let client = PlanningClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_ignores_missing_overrides() {
        let client = PlanningClientBuilder::new()
            .with_base_url(None::<String>)
            .with_timeout(None)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = PlanningClientBuilder::new()
            .with_timeout(Some(Duration::ZERO))
            .build();
        assert!(result.is_err());
    }
}
