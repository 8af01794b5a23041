use crate::domain::payment::{PaymentStatusDto, PaymentTimelineEventDto};
use crate::http::client::{ApiError, HttpClient};
use std::collections::HashMap;

#[async_trait::async_trait]
pub trait PaymentApi: Send + Sync {
    async fn statuses(
        &self,
        order_ids: &[String],
    ) -> Result<HashMap<String, PaymentStatusDto>, ApiError>;

    async fn timeline(&self, order_id: &str) -> Result<Vec<PaymentTimelineEventDto>, ApiError>;
}

#[derive(Clone)]
pub struct PaymentClient {
    pub http: HttpClient,
}

#[async_trait::async_trait]
impl PaymentApi for PaymentClient {
    async fn statuses(
        &self,
        order_ids: &[String],
    ) -> Result<HashMap<String, PaymentStatusDto>, ApiError> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let list: Vec<PaymentStatusDto> = self
            .http
            .get_json_with_query("/payments/status", &[("orderIds", order_ids.join(","))])
            .await?;
        Ok(list
            .into_iter()
            .filter(|dto| !dto.order_id.is_empty())
            .map(|dto| (dto.order_id.clone(), dto))
            .collect())
    }

    async fn timeline(&self, order_id: &str) -> Result<Vec<PaymentTimelineEventDto>, ApiError> {
        self.http
            .get_json(&format!("/payments/{order_id}/timeline"))
            .await
    }
}
