use crate::config;
use crate::types::ThemeMode;
use dioxus::prelude::*;

#[component]
pub fn SettingsView(theme: Signal<ThemeMode>) -> Element {
    let has_credential = config::credential().is_some();
    let credential_var = config::CREDENTIAL_VAR;

    rsx! {
        div { class: "main-container",
            div { class: "settings-section",
                h3 { class: "section-title", "Display" }
                div { class: "theme-toggle",
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Dark) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Dark),
                        "Dark"
                    }
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Light) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Light),
                        "Light"
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "API Key" }
                if has_credential {
                    p { class: "text-muted", "An API key is configured." }
                } else {
                    p { class: "text-muted",
                        "No API key found. Set {credential_var} in your config and restart the app."
                    }
                }
            }
        }
    }
}
