use crate::api::EnergyClient;
use crate::config::AppConfig;
use crate::handlers::toggle_theme;
use crate::theme::{THEME_CSS, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ApplianceView, AssistantView, PredictView};
use dioxus::prelude::*;

const WATTWISE_CSS: Asset = asset!("/assets/wattwise.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load);
    use_context_provider({
        let config = config.clone();
        move || EnergyClient::from_config(&config)
    });
    let theme = use_signal(|| config.initial_theme);
    let definition = theme_definition(theme());

    rsx! {
        ThemeStyles {}
        div { id: "page", class: "page {definition.container_class}",
            AppHeader { theme }
            main { class: "panels",
                ApplianceView {}
                PredictView {}
                AssistantView {}
            }
        }
    }
}

#[component]
fn ThemeStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: WATTWISE_CSS }
        style { dangerous_inner_html: "{THEME_CSS}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-title", "Energy Bill Predictor" }
                ThemeToggle { theme }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let mut surface = theme;
    let definition = theme_definition(theme());
    let label = match theme() {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    rsx! {
        button {
            id: "toggle-theme",
            class: "btn {definition.trigger_class}",
            r#type: "button",
            onclick: move |_| {
                toggle_theme(&mut surface);
            },
            "{label}"
        }
    }
}
