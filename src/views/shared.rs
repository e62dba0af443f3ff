use crate::types::{ChatExchange, StatusMessage, ThemeMode};
use crate::widgets::{PageControl, ResultDisplay, SubmitEvent, ThemeSurface, Transcript};
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

impl SubmitEvent for Event<FormData> {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

impl ThemeSurface for Signal<ThemeMode> {
    fn current_theme(&self) -> ThemeMode {
        *self.read()
    }

    fn apply_theme(&mut self, mode: ThemeMode) {
        self.set(mode);
    }
}

impl ResultDisplay for Signal<String> {
    fn set_result_text(&mut self, text: String) {
        self.set(text);
    }
}

impl Transcript for Signal<Vec<ChatExchange>> {
    fn push_exchange(&mut self, exchange: ChatExchange) {
        self.with_mut(|exchanges| exchanges.push(exchange));
    }
}

/// Reloads the current document so server-side state is re-read.
pub struct BrowserPage;

impl PageControl for BrowserPage {
    fn reload(&mut self) {
        let _ = document::eval("window.location.reload();");
    }
}

/// Pending flag and status line owned by one form.
#[derive(Clone, Copy, PartialEq)]
pub struct FormState {
    pub pending: Signal<bool>,
    pub status: Signal<Option<StatusMessage>>,
}

impl FormState {
    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending.set(pending);
    }

    pub fn set_status(&mut self, status: Option<StatusMessage>) {
        self.status.set(status);
    }
}

pub fn use_form_state() -> FormState {
    FormState {
        pending: use_signal(|| false),
        status: use_signal(|| None),
    }
}

#[component]
pub fn StatusLine(status: Signal<Option<StatusMessage>>) -> Element {
    let Some(message) = status() else {
        return rsx! {};
    };
    rsx! {
        p { class: "status error", "{message.text}" }
    }
}

#[component]
pub fn SubmitButton(pending: Signal<bool>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "btn btn-primary",
            r#type: "submit",
            disabled: pending(),
            if pending() { "Sending…" } else { "{label}" }
        }
    }
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}
