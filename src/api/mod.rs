/// HTTP layer for the energy backend
///
/// The backend exposes three JSON endpoints:
///
/// - `POST /add_appliance` registers an appliance and its daily hours
/// - `POST /predict_bill` forecasts the next bill from three prior ones
/// - `POST /chatbot` answers a canned energy-saving question
///
/// Handlers depend on the [`EnergyBackend`] trait rather than on
/// [`EnergyClient`] directly, so they can be driven by an in-memory fake.
///
/// # Usage
///
/// ```rust,no_run
/// use wattwise::api::{EnergyBackend, EnergyClient};
/// use wattwise::types::PredictionInput;
///
/// # async fn example() -> Result<(), wattwise::api::ApiError> {
/// let client = EnergyClient::new("http://127.0.0.1:5000");
/// let input = PredictionInput {
///     prev_bill1: "100".into(),
///     prev_bill2: "120".into(),
///     prev_bill3: "110".into(),
/// };
/// let result = client.predict_bill(&input).await?;
/// println!("{}", result.display_text());
/// # Ok(())
/// # }
/// ```
mod client;
mod error;

pub use client::{EnergyClient, parse_predict_body};
pub use error::{ApiError, ApiResult};

use crate::types::{ApplianceInput, ChatQuestion, ChatReply, PredictionInput, PredictionResult};
use async_trait::async_trait;

pub const ADD_APPLIANCE_PATH: &str = "/add_appliance";
pub const PREDICT_BILL_PATH: &str = "/predict_bill";
pub const CHATBOT_PATH: &str = "/chatbot";

/// Request/response contract of the backend.
///
/// Browser futures are not `Send`, so the bound is dropped on wasm.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EnergyBackend {
    /// Succeeds on any 2xx status; the response body is not inspected.
    async fn add_appliance(&self, input: &ApplianceInput) -> ApiResult<()>;

    async fn predict_bill(&self, input: &PredictionInput) -> ApiResult<PredictionResult>;

    async fn ask(&self, question: &ChatQuestion) -> ApiResult<ChatReply>;
}
