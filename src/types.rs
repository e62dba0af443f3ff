use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Body of `POST /add_appliance`. Values are sent exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplianceInput {
    pub appliance: String,
    pub hours: String,
}

/// Body of `POST /predict_bill`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub prev_bill1: String,
    pub prev_bill2: String,
    pub prev_bill3: String,
}

impl PredictionInput {
    pub fn bills(&self) -> [(&'static str, &str); 3] {
        [
            ("prev_bill1", &self.prev_bill1),
            ("prev_bill2", &self.prev_bill2),
            ("prev_bill3", &self.prev_bill3),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_bill: f64,
}

impl PredictionResult {
    /// Text written into the results element.
    ///
    /// Ties round away from zero and negative zero prints as `0.00`.
    pub fn display_text(&self) -> String {
        let rounded = (self.predicted_bill * 100.0).round() / 100.0 + 0.0;
        format!("Predicted Bill: ₹{rounded:.2}")
    }
}

/// Body of `POST /chatbot`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatQuestion {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
    pub asked_at: Option<OffsetDateTime>,
}

/// Non-fatal, per-form error shown under the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
