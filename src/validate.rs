use crate::types::{ApplianceInput, ChatQuestion, PredictionInput};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Enter valid values: appliance name is empty")]
    MissingAppliance,

    #[error("Enter valid values: hours '{0}' is not a number of hours")]
    InvalidHours(String),

    #[error("Enter valid bill amounts: {field} is '{value}'")]
    InvalidBill { field: &'static str, value: String },

    #[error("Type a question first")]
    EmptyQuestion,
}

/// Checks run on submitted values before any request is made. Values are
/// never rewritten.
pub trait Validate {
    fn validate(&self) -> Result<(), InputError>;
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Validate for ApplianceInput {
    fn validate(&self) -> Result<(), InputError> {
        if self.appliance.trim().is_empty() {
            return Err(InputError::MissingAppliance);
        }
        match parse_finite(&self.hours) {
            Some(hours) if hours >= 0.0 => Ok(()),
            _ => Err(InputError::InvalidHours(self.hours.clone())),
        }
    }
}

impl Validate for PredictionInput {
    fn validate(&self) -> Result<(), InputError> {
        for (field, value) in self.bills() {
            if parse_finite(value).is_none() {
                return Err(InputError::InvalidBill {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for ChatQuestion {
    fn validate(&self) -> Result<(), InputError> {
        if self.message.trim().is_empty() {
            return Err(InputError::EmptyQuestion);
        }
        Ok(())
    }
}
