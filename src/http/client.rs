use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {message} (correlation {correlation_id})")]
    Network {
        message: String,
        correlation_id: String,
    },
    #[error("HTTP {status} {code}: {message} (correlation {correlation_id})")]
    Http {
        status: u16,
        code: String,
        message: String,
        correlation_id: String,
    },
}

impl ApiError {
    pub fn correlation_id(&self) -> &str {
        match self {
            ApiError::Network { correlation_id, .. } => correlation_id,
            ApiError::Http { correlation_id, .. } => correlation_id,
        }
    }
}

/// Backend error body shape: `{ "code": ..., "message": ... }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Thin JSON wrapper over reqwest: per-request correlation id, error
/// classification, and an injected 401 callback for the auth collaborator
/// (no process-wide event bus).
#[derive(Clone)]
pub struct HttpClient {
    pub base_url: String,
    pub client: reqwest::Client,
    pub timeout: Duration,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.request_json(self.client.get(url)).await
    }

    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.request_json(self.client.get(url).query(query)).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.request_json(self.client.post(url).json(body)).await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let correlation_id = Uuid::new_v4().to_string();

        let resp = request
            .header(CORRELATION_ID_HEADER, &correlation_id)
            .timeout(self.timeout)
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                let correlation_id = echoed_correlation_id(&r, correlation_id);
                r.json::<T>().await.map_err(|e| ApiError::Network {
                    message: format!("invalid response body: {e}"),
                    correlation_id,
                })
            }
            Ok(r) => {
                let status = r.status().as_u16();
                if status == 401 {
                    if let Some(hook) = &self.on_unauthorized {
                        hook();
                    }
                }
                let correlation_id = echoed_correlation_id(&r, correlation_id);
                let envelope: ErrorEnvelope = r.json().await.unwrap_or_default();
                Err(ApiError::Http {
                    status,
                    code: envelope.code.unwrap_or_else(|| format!("HTTP_{status}")),
                    message: envelope
                        .message
                        .unwrap_or_else(|| "request failed".to_string()),
                    correlation_id,
                })
            }
            Err(e) => Err(ApiError::Network {
                message: e.to_string(),
                correlation_id,
            }),
        }
    }
}

/// The backend echoes the correlation id back; prefer its value so logs line
/// up with server-side traces.
fn echoed_correlation_id(resp: &reqwest::Response, sent: String) -> String {
    resp.headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
        .unwrap_or(sent)
}
