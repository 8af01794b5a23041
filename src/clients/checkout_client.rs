use crate::domain::checkout::{CheckoutStatusDto, CheckoutTimelineEventDto};
use crate::http::client::{ApiError, HttpClient};
use std::collections::HashMap;

#[async_trait::async_trait]
pub trait CheckoutApi: Send + Sync {
    /// Latest-known checkout status per order id. Orders the checkout service
    /// has not seen yet are simply absent from the map.
    async fn statuses(
        &self,
        order_ids: &[String],
    ) -> Result<HashMap<String, CheckoutStatusDto>, ApiError>;

    async fn timeline(&self, order_id: &str) -> Result<Vec<CheckoutTimelineEventDto>, ApiError>;
}

#[derive(Clone)]
pub struct CheckoutClient {
    pub http: HttpClient,
}

#[async_trait::async_trait]
impl CheckoutApi for CheckoutClient {
    async fn statuses(
        &self,
        order_ids: &[String],
    ) -> Result<HashMap<String, CheckoutStatusDto>, ApiError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let list: Vec<CheckoutStatusDto> = self
            .http
            .get_json_with_query("/checkouts/status", &[("orderIds", order_ids.join(","))])
            .await?;
        Ok(list
            .into_iter()
            .filter(|dto| !dto.order_id.is_empty())
            .map(|dto| (dto.order_id.clone(), dto))
            .collect())
    }

    async fn timeline(&self, order_id: &str) -> Result<Vec<CheckoutTimelineEventDto>, ApiError> {
        self.http
            .get_json(&format!("/checkouts/{order_id}/timeline"))
            .await
    }
}
