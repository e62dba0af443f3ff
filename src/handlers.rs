//! Event handlers for the energy page.
//!
//! Form submissions are split in two. [`begin_submission`] runs
//! synchronously inside the event dispatch: it suppresses navigation, reads
//! the fields and marks the form pending. The returned values are then
//! handed to one of the `send_*` futures, which performs the request and
//! applies the outcome to the widgets.

use crate::api::{ApiResult, EnergyBackend};
use crate::theme::theme_definition;
use crate::types::{
    ApplianceInput, ChatExchange, ChatQuestion, ChatReply, PredictionInput, PredictionResult,
    StatusMessage, ThemeMode,
};
use crate::validate::{InputError, Validate};
use crate::widgets::{
    FormWidget, PageControl, ResultDisplay, SubmitEvent, ThemeSurface, Transcript,
};
use time::OffsetDateTime;

pub fn toggle_theme(surface: &mut impl ThemeSurface) -> ThemeMode {
    let next = surface.current_theme().toggled();
    let definition = theme_definition(next);
    tracing::debug!(
        container = definition.container_class,
        trigger = definition.trigger_class,
        "theme toggled"
    );
    surface.apply_theme(next);
    next
}

#[derive(Debug, PartialEq)]
pub enum Submission<V> {
    Ready(V),
    /// A request from this form is still in flight.
    Pending,
    Invalid(InputError),
}

impl<V> Submission<V> {
    pub fn into_ready(self) -> Option<V> {
        match self {
            Submission::Ready(values) => Some(values),
            _ => None,
        }
    }
}

/// Intercept a form submission.
///
/// Navigation is always suppressed, even when the submission is dropped.
pub fn begin_submission<F>(event: &impl SubmitEvent, form: &mut F) -> Submission<F::Values>
where
    F: FormWidget,
    F::Values: Validate,
{
    event.prevent_default();

    if form.is_pending() {
        tracing::debug!("submission ignored while a request is pending");
        return Submission::Pending;
    }

    let values = form.read_values();
    if let Err(err) = values.validate() {
        form.set_status(Some(StatusMessage::error(err.to_string())));
        return Submission::Invalid(err);
    }

    form.set_status(None);
    form.set_pending(true);
    Submission::Ready(values)
}

/// Post an appliance record and reload the page once it is stored.
pub async fn send_appliance<B, F>(
    input: ApplianceInput,
    backend: &B,
    form: &mut F,
    page: &mut impl PageControl,
) -> ApiResult<()>
where
    B: EnergyBackend + ?Sized,
    F: FormWidget<Values = ApplianceInput>,
{
    let outcome = backend.add_appliance(&input).await;
    form.set_pending(false);

    match outcome {
        Ok(()) => {
            tracing::info!(appliance = %input.appliance, "appliance added");
            page.reload();
            Ok(())
        }
        Err(err) => {
            tracing::warn!("add appliance failed: {err}");
            form.set_status(Some(StatusMessage::error(format!(
                "Could not add appliance. {err}"
            ))));
            Err(err)
        }
    }
}

/// Request a prediction and render it, replacing any earlier result.
pub async fn send_prediction<B, F>(
    input: PredictionInput,
    backend: &B,
    form: &mut F,
    display: &mut impl ResultDisplay,
) -> ApiResult<PredictionResult>
where
    B: EnergyBackend + ?Sized,
    F: FormWidget<Values = PredictionInput>,
{
    let outcome = backend.predict_bill(&input).await;
    form.set_pending(false);

    match outcome {
        Ok(result) => {
            tracing::info!(predicted_bill = result.predicted_bill, "prediction received");
            display.set_result_text(result.display_text());
            Ok(result)
        }
        Err(err) => {
            // Previous result stays on screen.
            tracing::warn!("bill prediction failed: {err}");
            form.set_status(Some(StatusMessage::error(format!(
                "Could not predict bill. {err}"
            ))));
            Err(err)
        }
    }
}

pub async fn send_question<B, F>(
    question: ChatQuestion,
    backend: &B,
    form: &mut F,
    transcript: &mut impl Transcript,
) -> ApiResult<ChatReply>
where
    B: EnergyBackend + ?Sized,
    F: FormWidget<Values = ChatQuestion>,
{
    let asked_at = Some(OffsetDateTime::now_utc());
    let outcome = backend.ask(&question).await;
    form.set_pending(false);

    match outcome {
        Ok(reply) => {
            transcript.push_exchange(ChatExchange {
                question: question.message,
                answer: reply.response.clone(),
                asked_at,
            });
            Ok(reply)
        }
        Err(err) => {
            tracing::warn!("assistant request failed: {err}");
            form.set_status(Some(StatusMessage::error(format!(
                "The assistant is unavailable. {err}"
            ))));
            Err(err)
        }
    }
}
