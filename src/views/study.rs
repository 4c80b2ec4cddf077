use crate::analysis::{
    AnalysisClient, AnalysisRecord, issue_query_ticket, newest_query_ticket,
};
use crate::views::shared::{copy_to_clipboard, markdown_to_html, record_as_text};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const FALLBACK_REFERENCE: &str = "Unknown Reference";
pub const FALLBACK_VERSE_TEXT: &str = "No verse text available.";
pub const FALLBACK_CONTEXT: &str = "No context provided.";
pub const FALLBACK_EXEGESIS: &str = "No exegesis provided.";
pub const FALLBACK_THEMES: &str = "No themes provided.";
pub const FALLBACK_CROSS_REFS: &str = "No cross references provided.";

/// One query's lifecycle, matched exhaustively by the view.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState {
    Idle,
    Loading,
    Ready(AnalysisRecord),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AnalysisSection {
    Verse,
    Context,
    Exegesis,
    Themes,
    CrossReferences,
}

impl AnalysisSection {
    const ALL: [AnalysisSection; 5] = [
        AnalysisSection::Verse,
        AnalysisSection::Context,
        AnalysisSection::Exegesis,
        AnalysisSection::Themes,
        AnalysisSection::CrossReferences,
    ];

    fn label(self) -> &'static str {
        match self {
            AnalysisSection::Verse => "Verse",
            AnalysisSection::Context => "Context",
            AnalysisSection::Exegesis => "Exegesis",
            AnalysisSection::Themes => "Themes",
            AnalysisSection::CrossReferences => "Cross Refs",
        }
    }
}

const ANALYZED_AT_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_analyzed_at(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(ANALYZED_AT_FORMAT).ok()
}

fn display_reference(record: &AnalysisRecord) -> String {
    section_text(&record.verse_reference, FALLBACK_REFERENCE)
}

/// Pick the shown text for an optional section. Absent and blank both fall
/// back to the section's fixed notice.
fn section_text(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

#[component]
pub fn StudyView() -> Element {
    let mut input = use_signal(String::new);
    let state = use_signal(|| QueryState::Idle);
    let last_reference = use_signal(String::new);
    let analyzed_at = use_signal(|| Option::<OffsetDateTime>::None);

    let mut submit_query = {
        let mut state = state;
        let mut last_reference = last_reference;
        let mut analyzed_at = analyzed_at;
        move |reference: String| {
            let trimmed = reference.trim().to_string();
            if trimmed.is_empty() || matches!(state(), QueryState::Loading) {
                return;
            }

            last_reference.set(trimmed.clone());
            state.set(QueryState::Loading);
            let ticket = issue_query_ticket();

            spawn(async move {
                let outcome = match AnalysisClient::from_config() {
                    Ok(client) => client.analyze(&trimmed).await,
                    Err(err) => Err(err),
                };

                // A newer submission owns the result slot; drop this reply.
                if ticket != newest_query_ticket() {
                    return;
                }

                match outcome {
                    Ok(record) => {
                        analyzed_at.set(Some(OffsetDateTime::now_utc()));
                        state.set(QueryState::Ready(record));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "analysis query failed");
                        state.set(QueryState::Failed(err.user_message()));
                    }
                }
            });
        }
    };

    let pending = matches!(state(), QueryState::Loading);

    let body = match state() {
        QueryState::Idle => rsx! {
            p { class: "idle-hint", "Enter a reference above to begin your study." }
        },
        QueryState::Loading => rsx! {
            div { class: "shimmer-line",
                span { class: "shimmer-text", "Consulting the commentary…" }
            }
        },
        QueryState::Ready(record) => rsx! {
            AnalysisResult {
                record,
                analyzed_at: format_analyzed_at(analyzed_at()),
            }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "error-banner",
                p { "{message}" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| {
                        let reference = last_reference();
                        submit_query(reference);
                    },
                    "Retry"
                }
            }
        },
    };

    rsx! {
        div { class: "main-container",
            form { class: "composer",
                input {
                    r#type: "text",
                    placeholder: "Enter a verse reference, e.g. John 3:16",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            let text = input();
                            submit_query(text);
                        }
                    },
                    disabled: pending,
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: pending || input().trim().is_empty(),
                    onclick: move |_| {
                        let text = input();
                        submit_query(text);
                    },
                    "Analyze"
                }
            }
            {body}
        }
    }
}

#[component]
fn AnalysisResult(record: AnalysisRecord, analyzed_at: Option<String>) -> Element {
    let active_section = use_signal(|| AnalysisSection::Verse);

    let heading = display_reference(&record);
    let copy_payload = record.clone();
    let on_copy = move |_| {
        let text = record_as_text(&copy_payload);
        if let Err(err) = copy_to_clipboard(text) {
            tracing::warn!(error = %err, "clipboard copy failed");
        }
    };

    rsx! {
        div { class: "result-header",
            h2 { class: "result-reference", "{heading}" }
            button { class: "action-btn", title: "Copy analysis", onclick: on_copy, "Copy" }
        }
        if let Some(ts) = analyzed_at {
            div { class: "result-meta", "Analyzed at {ts}" }
        }
        SectionTabs { active_section }
        SectionPanel { record, section: active_section() }
    }
}

#[component]
fn SectionTabs(active_section: Signal<AnalysisSection>) -> Element {
    rsx! {
        div { class: "section-tabs",
            for section in AnalysisSection::ALL {
                SectionTabButton { active_section, section }
            }
        }
    }
}

#[component]
fn SectionTabButton(
    active_section: Signal<AnalysisSection>,
    section: AnalysisSection,
) -> Element {
    let mut active_section = active_section;
    let class = if active_section() == section {
        "section-tab active"
    } else {
        "section-tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_section.set(section),
            "{section.label()}"
        }
    }
}

#[component]
fn SectionPanel(record: AnalysisRecord, section: AnalysisSection) -> Element {
    match section {
        AnalysisSection::Verse => {
            let html = markdown_to_html(&section_text(&record.verse_text, FALLBACK_VERSE_TEXT));
            rsx! {
                div { class: "section-panel", dangerous_inner_html: "{html}" }
            }
        }
        AnalysisSection::Context => {
            let html = markdown_to_html(&section_text(&record.context, FALLBACK_CONTEXT));
            rsx! {
                div { class: "section-panel", dangerous_inner_html: "{html}" }
            }
        }
        AnalysisSection::Exegesis => {
            let html = markdown_to_html(&section_text(&record.exegesis, FALLBACK_EXEGESIS));
            rsx! {
                div { class: "section-panel", dangerous_inner_html: "{html}" }
            }
        }
        AnalysisSection::Themes => {
            let html = markdown_to_html(&section_text(&record.themes, FALLBACK_THEMES));
            rsx! {
                div { class: "section-panel", dangerous_inner_html: "{html}" }
            }
        }
        AnalysisSection::CrossReferences => rsx! {
            CrossReferenceList { record }
        },
    }
}

#[component]
fn CrossReferenceList(record: AnalysisRecord) -> Element {
    let refs = record.cross_references.clone().unwrap_or_default();
    if refs.is_empty() {
        return rsx! {
            div { class: "section-panel",
                span { class: "empty-notice", "{FALLBACK_CROSS_REFS}" }
            }
        };
    }
    rsx! {
        div {
            for xref in refs.iter() {
                div { class: "crossref-card", key: "{xref.id()}",
                    p { class: "crossref-reference",
                        "{xref.reference.as_deref().unwrap_or(FALLBACK_REFERENCE)}"
                    }
                    if let Some(text) = xref.text.as_deref() {
                        p { class: "crossref-text", "{text}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_text_falls_back_when_absent_or_blank() {
        assert_eq!(section_text(&None, FALLBACK_CONTEXT), FALLBACK_CONTEXT);
        assert_eq!(
            section_text(&Some("   ".to_string()), FALLBACK_CONTEXT),
            FALLBACK_CONTEXT
        );
        assert_eq!(
            section_text(&Some("In the beginning".to_string()), FALLBACK_CONTEXT),
            "In the beginning"
        );
    }

    #[test]
    fn display_reference_uses_fixed_fallback() {
        let record = AnalysisRecord::new();
        assert_eq!(display_reference(&record), FALLBACK_REFERENCE);
    }
}
