use crate::api::EnergyClient;
use crate::handlers::{begin_submission, send_question};
use crate::types::{ChatExchange, ChatQuestion, StatusMessage};
use crate::views::shared::{
    FormState, StatusLine, SubmitButton, format_message_timestamp, use_form_state,
};
use crate::widgets::FormWidget;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct QuestionForm {
    question: Signal<String>,
    state: FormState,
}

impl FormWidget for QuestionForm {
    type Values = ChatQuestion;

    fn read_values(&self) -> ChatQuestion {
        ChatQuestion {
            message: self.question.read().clone(),
        }
    }

    fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    fn set_pending(&mut self, pending: bool) {
        self.state.set_pending(pending);
    }

    fn set_status(&mut self, status: Option<StatusMessage>) {
        self.state.set_status(status);
    }
}

#[component]
pub fn AssistantView() -> Element {
    let client = use_context::<EnergyClient>();
    let mut question = use_signal(String::new);
    let exchanges = use_signal(Vec::<ChatExchange>::new);
    let state = use_form_state();
    let form = QuestionForm { question, state };

    let on_submit = move |event: Event<FormData>| {
        let mut form = form;
        let Some(input) = begin_submission(&event, &mut form).into_ready() else {
            return;
        };
        let client = client.clone();
        let mut transcript = exchanges;
        spawn(async move {
            if send_question(input, &client, &mut form, &mut transcript)
                .await
                .is_ok()
            {
                form.question.set(String::new());
            }
        });
    };

    let exchanges_snapshot = exchanges();

    rsx! {
        section { class: "panel",
            h3 { class: "section-title", "Ask the Energy Assistant" }
            div { class: "transcript",
                for (i, exchange) in exchanges_snapshot.iter().enumerate() {
                    div { key: "{i}", class: "exchange",
                        p { class: "bubble user", "You: {exchange.question}" }
                        p { class: "bubble assistant", "Bot: {exchange.answer}" }
                        if let Some(stamp) = format_message_timestamp(exchange.asked_at) {
                            span { class: "timestamp", "{stamp}" }
                        }
                    }
                }
            }
            form { id: "chatbot-form", onsubmit: on_submit,
                input {
                    id: "chatbot-message",
                    name: "message",
                    r#type: "text",
                    placeholder: "How to reduce electricity bill?",
                    value: "{question}",
                    oninput: move |e| question.set(e.value()),
                }
                SubmitButton { pending: state.pending, label: "Ask" }
                StatusLine { status: state.status }
            }
        }
    }
}
