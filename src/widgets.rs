//! Interfaces over the page widgets the handlers touch.
//!
//! The Dioxus views implement these over signals; tests implement them with
//! plain structs.

use crate::types::{ChatExchange, StatusMessage, ThemeMode};

/// A submit event whose browser default (full-page navigation) can be
/// suppressed.
pub trait SubmitEvent {
    fn prevent_default(&self);
}

/// Container plus toggle control sharing one theme.
pub trait ThemeSurface {
    fn current_theme(&self) -> ThemeMode;
    fn apply_theme(&mut self, mode: ThemeMode);
}

/// A form that posts its values to the backend.
pub trait FormWidget {
    type Values;

    /// Current field values, read at call time.
    fn read_values(&self) -> Self::Values;
    fn is_pending(&self) -> bool;
    fn set_pending(&mut self, pending: bool);
    fn set_status(&mut self, status: Option<StatusMessage>);
}

pub trait ResultDisplay {
    /// Replace the displayed text.
    fn set_result_text(&mut self, text: String);
}

pub trait PageControl {
    fn reload(&mut self);
}

pub trait Transcript {
    fn push_exchange(&mut self, exchange: ChatExchange);
}
