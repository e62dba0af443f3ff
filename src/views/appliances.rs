use crate::api::EnergyClient;
use crate::handlers::{begin_submission, send_appliance};
use crate::types::{ApplianceInput, StatusMessage};
use crate::views::shared::{BrowserPage, FormState, StatusLine, SubmitButton, use_form_state};
use crate::widgets::FormWidget;
use dioxus::prelude::*;

const SUGGESTED_APPLIANCES: &[&str] = &[
    "Fan",
    "Air Conditioner",
    "Refrigerator",
    "TV",
    "Washing Machine",
];

#[derive(Clone, Copy)]
struct ApplianceForm {
    appliance: Signal<String>,
    hours: Signal<String>,
    state: FormState,
}

impl FormWidget for ApplianceForm {
    type Values = ApplianceInput;

    fn read_values(&self) -> ApplianceInput {
        ApplianceInput {
            appliance: self.appliance.read().clone(),
            hours: self.hours.read().clone(),
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
pub fn ApplianceView() -> Element {
    let client = use_context::<EnergyClient>();
    let mut appliance = use_signal(String::new);
    let mut hours = use_signal(String::new);
    let state = use_form_state();
    let form = ApplianceForm {
        appliance,
        hours,
        state,
    };

    let on_submit = move |event: Event<FormData>| {
        let mut form = form;
        let Some(input) = begin_submission(&event, &mut form).into_ready() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let _ = send_appliance(input, &client, &mut form, &mut BrowserPage).await;
        });
    };

    rsx! {
        section { class: "panel",
            h3 { class: "section-title", "Add an Appliance" }
            form { id: "add-appliance-form", onsubmit: on_submit,
                label { r#for: "appliance", "Appliance" }
                input {
                    id: "appliance",
                    name: "appliance",
                    r#type: "text",
                    list: "appliance-suggestions",
                    value: "{appliance}",
                    oninput: move |e| appliance.set(e.value()),
                }
                datalist { id: "appliance-suggestions",
                    for name in SUGGESTED_APPLIANCES {
                        option { value: *name }
                    }
                }
                label { r#for: "hours", "Hours per day" }
                input {
                    id: "hours",
                    name: "hours",
                    r#type: "text",
                    value: "{hours}",
                    oninput: move |e| hours.set(e.value()),
                }
                SubmitButton { pending: state.pending, label: "Add Appliance" }
                StatusLine { status: state.status }
            }
        }
    }
}
