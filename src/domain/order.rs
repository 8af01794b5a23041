use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub customer_id: String,
    pub status: String,
    pub total_amount: f64,
    pub currency: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub total_amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub status: String,
    pub correlation_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListOrdersParams {
    pub customer_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ListOrdersParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut qs = Vec::new();
        if let Some(v) = self.customer_id.as_deref().map(str::trim) {
            if !v.is_empty() {
                qs.push(("customerId", v.to_string()));
            }
        }
        if let Some(v) = self.from_date.as_deref().map(str::trim) {
            if !v.is_empty() {
                qs.push(("fromDate", v.to_string()));
            }
        }
        if let Some(v) = self.to_date.as_deref().map(str::trim) {
            if !v.is_empty() {
                qs.push(("toDate", v.to_string()));
            }
        }
        if let Some(limit) = self.limit {
            qs.push(("limit", limit.to_string()));
        }
        if let Some(v) = self.cursor.as_deref().map(str::trim) {
            if !v.is_empty() {
                qs.push(("cursor", v.to_string()));
            }
        }
        qs
    }
}
