use super::{
    ADD_APPLIANCE_PATH, ApiError, ApiResult, CHATBOT_PATH, EnergyBackend, PREDICT_BILL_PATH,
};
use crate::config::AppConfig;
use crate::types::{ApplianceInput, ChatQuestion, ChatReply, PredictionInput, PredictionResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Client for the energy backend endpoints.
#[derive(Clone, Debug)]
pub struct EnergyClient {
    client: reqwest::Client,
    base_url: String,
}

// Backend answers "not enough data" as a 200 with an error object.
#[derive(Deserialize)]
struct RejectedShape {
    error: String,
}

impl EnergyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST `body` as JSON and return the response text of a 2xx reply.
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ApiResult<String> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "sending request");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Interpret a `/predict_bill` success body.
pub fn parse_predict_body(body: &str) -> ApiResult<PredictionResult> {
    if let Ok(parsed) = serde_json::from_str::<PredictionResult>(body) {
        return Ok(parsed);
    }

    if let Ok(parsed) = serde_json::from_str::<RejectedShape>(body) {
        return Err(ApiError::Rejected(parsed.error));
    }

    Err(ApiError::Malformed(
        "missing numeric predicted_bill".to_string(),
    ))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EnergyBackend for EnergyClient {
    async fn add_appliance(&self, input: &ApplianceInput) -> ApiResult<()> {
        self.post_json(ADD_APPLIANCE_PATH, input).await?;
        Ok(())
    }

    async fn predict_bill(&self, input: &PredictionInput) -> ApiResult<PredictionResult> {
        let body = self.post_json(PREDICT_BILL_PATH, input).await?;
        parse_predict_body(&body)
    }

    async fn ask(&self, question: &ChatQuestion) -> ApiResult<ChatReply> {
        let body = self.post_json(CHATBOT_PATH, question).await?;

        if let Ok(reply) = serde_json::from_str::<ChatReply>(&body) {
            return Ok(reply);
        }

        if let Ok(parsed) = serde_json::from_str::<RejectedShape>(&body) {
            return Err(ApiError::Rejected(parsed.error));
        }

        Err(ApiError::Malformed("missing response text".to_string()))
    }
}
