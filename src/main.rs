#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

// Dioxus installs its own console logger on the web.
#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    dioxus::launch(wattwise::ui::App);
}
