use crate::domain::order::{
    CreateOrderRequest, CreateOrderResponse, ListOrdersParams, OrderSummary,
};
use crate::http::client::{ApiError, HttpClient};

#[async_trait::async_trait]
pub trait OrderApi: Send + Sync {
    async fn list_orders(&self, params: &ListOrdersParams) -> Result<Vec<OrderSummary>, ApiError>;
    async fn get_order(&self, order_id: &str) -> Result<OrderSummary, ApiError>;
    async fn create_order(&self, req: &CreateOrderRequest)
        -> Result<CreateOrderResponse, ApiError>;
}

#[derive(Clone)]
pub struct OrderClient {
    pub http: HttpClient,
}

#[async_trait::async_trait]
impl OrderApi for OrderClient {
    async fn list_orders(&self, params: &ListOrdersParams) -> Result<Vec<OrderSummary>, ApiError> {
        self.http
            .get_json_with_query("/orders", &params.to_query())
            .await
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderSummary, ApiError> {
        self.http.get_json(&format!("/orders/{order_id}")).await
    }

    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        self.http.post_json("/orders", req).await
    }
}
