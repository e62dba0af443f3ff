use crate::api::EnergyClient;
use crate::handlers::{begin_submission, send_prediction};
use crate::types::{PredictionInput, StatusMessage};
use crate::views::shared::{FormState, StatusLine, SubmitButton, use_form_state};
use crate::widgets::FormWidget;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct PredictForm {
    bills: [Signal<String>; 3],
    state: FormState,
}

impl FormWidget for PredictForm {
    type Values = PredictionInput;

    fn read_values(&self) -> PredictionInput {
        let [first, second, third] = self.bills;
        PredictionInput {
            prev_bill1: first.read().clone(),
            prev_bill2: second.read().clone(),
            prev_bill3: third.read().clone(),
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
pub fn PredictView() -> Element {
    let client = use_context::<EnergyClient>();
    let bills = [
        use_signal(String::new),
        use_signal(String::new),
        use_signal(String::new),
    ];
    let result = use_signal(String::new);
    let state = use_form_state();
    let form = PredictForm { bills, state };

    let on_submit = move |event: Event<FormData>| {
        let mut form = form;
        let Some(input) = begin_submission(&event, &mut form).into_ready() else {
            return;
        };
        let client = client.clone();
        let mut display = result;
        spawn(async move {
            let _ = send_prediction(input, &client, &mut form, &mut display).await;
        });
    };

    let [first, second, third] = bills;

    rsx! {
        section { class: "panel",
            h3 { class: "section-title", "Enter Last 3 Months' Bills (₹)" }
            form { id: "predict-form", onsubmit: on_submit,
                BillField { id: "prev_bill1", label: "Three months ago", value: first }
                BillField { id: "prev_bill2", label: "Two months ago", value: second }
                BillField { id: "prev_bill3", label: "Last month", value: third }
                SubmitButton { pending: state.pending, label: "Predict Bill" }
                StatusLine { status: state.status }
            }
            p { id: "prediction-result", class: "prediction-result", "{result}" }
        }
    }
}

#[component]
fn BillField(id: &'static str, label: &'static str, value: Signal<String>) -> Element {
    let mut value = value;
    rsx! {
        label { r#for: id, "{label}" }
        input {
            id: id,
            name: id,
            r#type: "text",
            value: "{value}",
            oninput: move |e| value.set(e.value()),
        }
    }
}
