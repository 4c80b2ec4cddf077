use crate::theme::{BASE_STYLES, theme_definition};
use crate::types::ThemeMode;
use crate::views::{SettingsView, StudyView};
use dioxus::prelude::*;
use std::time::Duration;

const SPLASH_HIDE_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Study,
    Settings,
}

#[component]
pub fn App() -> Element {
    let active_tab = use_signal(|| AppTab::Study);
    let theme = use_signal(|| ThemeMode::Dark);
    let show_splash = use_signal(|| true);

    use_splash_dismiss(show_splash);

    rsx! {
        ThemeStyles { theme }
        if show_splash() {
            SplashScreen {}
        }
        AppHeader { active_tab }
        TabPanels { active_tab, theme }
    }
}

fn use_splash_dismiss(show_splash: Signal<bool>) {
    use_effect(move || {
        if show_splash() {
            let mut control = show_splash;
            spawn(async move {
                tokio::time::sleep(SPLASH_HIDE_DELAY).await;
                control.set(false);
            });
        }
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{BASE_STYLES}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-wordmark", "Selah" }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>, theme: Signal<ThemeMode>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Study,
                children: rsx!( StudyView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( SettingsView { theme } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Study, label: "Study" }
            TabButton { active_tab, tab: AppTab::Settings, label: "Settings" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h2 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[component]
fn SplashScreen() -> Element {
    rsx! {
        div { class: "splash-overlay", aria_hidden: "true",
            span { class: "splash-wordmark", "Selah" }
        }
    }
}
