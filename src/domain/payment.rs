use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusDto {
    pub order_id: String,
    pub status: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTimelineEventDto {
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub at: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
}
