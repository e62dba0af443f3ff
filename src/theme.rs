use crate::types::ThemeMode;

/// Class pair applied for one theme: one on the page container, one on the
/// toggle control itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub container_class: &'static str,
    pub trigger_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            container_class: "bg-dark",
            trigger_class: "btn-light",
        },
        ThemeMode::Light => ThemeDefinition {
            container_class: "bg-light",
            trigger_class: "btn-dark",
        },
    }
}

pub const THEME_CSS: &str = r#"
.bg-light { background: #ecf0f1; color: #2c3e50; }
.bg-dark { background: #17202a; color: #ffffff; }
.btn-dark { background: #2c3e50; color: #ffffff; border: 1px solid #2c3e50; }
.btn-light { background: #ffffff; color: #17202a; border: 1px solid #ffffff; }
.bg-dark input { background: #1f2b38; color: #ffffff; border-color: #3d4f63; }
.bg-dark .status.error { color: #ff8a80; }
"#;
