use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0a08;
    --color-bg-overlay: rgba(11, 10, 8, 0.92);
    --color-text-primary: #f4efe6;
    --color-text-muted: #b3ab9c;
    --color-border: #f4efe6;
    --color-surface-muted: #1a1813;
    --color-input-border: #2f2c24;
    --color-input-bg: #0b0a08;
    --color-panel-bg: #12110d;
    --color-card-border: #2f2c24;
    --color-accent: #c9a227;
    --color-error-bg: #2a1412;
    --color-error-border: #7a2e26;
    --color-shimmer-base: rgba(201, 162, 39, 0.25);
    --color-shimmer-highlight: #c9a227;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer input:focus { border-color: var(--color-accent); }
.btn:hover { background: var(--color-surface-muted); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #faf6ec;
    --color-bg-overlay: rgba(250, 246, 236, 0.94);
    --color-text-primary: #211d14;
    --color-text-muted: #6b6354;
    --color-border: #211d14;
    --color-surface-muted: #ece5d4;
    --color-input-border: #c9c1ae;
    --color-input-bg: #ffffff;
    --color-panel-bg: #ffffff;
    --color-card-border: #d8d0bd;
    --color-accent: #8a6d1a;
    --color-error-bg: #fbe9e7;
    --color-error-border: #c0564a;
    --color-shimmer-base: rgba(138, 109, 26, 0.2);
    --color-shimmer-highlight: #8a6d1a;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer input:focus { border-color: var(--color-accent); }
.btn:hover { background: var(--color-surface-muted); }
"#;

/// Layout styles shared by every theme.
pub const BASE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; font-size: 15px; }
.header { position: sticky; top: 0; padding: 0.75rem 1rem 0.5rem; background: var(--color-bg-overlay); z-index: 10; }
.header-content { display: flex; align-items: baseline; justify-content: space-between; max-width: 680px; margin: 0 auto; }
.header-wordmark { font-size: 1.4rem; letter-spacing: 0.12em; text-transform: uppercase; margin: 0; }
.tabs { display: flex; gap: 1rem; }
.tab { font-size: 0.95rem; font-weight: normal; margin: 0; cursor: pointer; color: var(--color-text-muted); }
.tab.active { color: var(--color-text-primary); border-bottom: 2px solid var(--color-accent); }
.main-container { max-width: 680px; margin: 0 auto; padding: 1rem; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }

.composer { display: flex; gap: 0.5rem; margin-bottom: 1.25rem; }
.composer input { flex: 1; padding: 0.6rem 0.75rem; border: 1px solid; border-radius: 6px; font-family: inherit; font-size: 1rem; outline: none; }
.btn { padding: 0.6rem 1rem; border: 1px solid var(--color-border); border-radius: 6px; background: transparent; color: var(--color-text-primary); font-family: inherit; cursor: pointer; }
.btn:disabled { opacity: 0.45; cursor: default; }
.btn-primary { border-color: var(--color-accent); }

.idle-hint { color: var(--color-text-muted); text-align: center; margin-top: 3rem; }
.shimmer-line { text-align: center; margin-top: 3rem; }
.shimmer-text { color: var(--color-shimmer-highlight); animation: shimmer-pulse 1.2s ease-in-out infinite; }
@keyframes shimmer-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.35; } }

.error-banner { background: var(--color-error-bg); border: 1px solid var(--color-error-border); border-radius: 6px; padding: 0.9rem 1rem; margin-top: 1rem; }
.error-banner p { margin: 0 0 0.75rem; }

.result-header { display: flex; align-items: baseline; justify-content: space-between; gap: 0.75rem; margin-bottom: 0.25rem; }
.result-reference { font-size: 1.25rem; margin: 0; }
.result-meta { color: var(--color-text-muted); font-size: 0.8rem; margin-bottom: 0.75rem; }
.action-btn { background: transparent; border: none; color: var(--color-text-muted); font-family: inherit; font-size: 0.85rem; cursor: pointer; }
.action-btn:hover { color: var(--color-text-primary); }

.section-tabs { display: flex; flex-wrap: wrap; gap: 0.25rem; border-bottom: 1px solid var(--color-card-border); margin-bottom: 0.9rem; }
.section-tab { padding: 0.45rem 0.7rem; border: none; background: transparent; color: var(--color-text-muted); font-family: inherit; font-size: 0.9rem; cursor: pointer; }
.section-tab.active { color: var(--color-text-primary); border-bottom: 2px solid var(--color-accent); }
.section-panel { background: var(--color-panel-bg); border: 1px solid var(--color-card-border); border-radius: 6px; padding: 1rem 1.1rem; line-height: 1.55; }
.section-panel p:first-child { margin-top: 0; }
.section-panel p:last-child { margin-bottom: 0; }

.crossref-card { border: 1px solid var(--color-card-border); border-radius: 6px; padding: 0.7rem 0.9rem; margin-bottom: 0.6rem; }
.crossref-reference { font-weight: bold; margin: 0 0 0.3rem; }
.crossref-text { margin: 0; color: var(--color-text-muted); }
.empty-notice { color: var(--color-text-muted); font-style: italic; }

.settings-section { margin-bottom: 1.5rem; }
.section-title { margin: 0 0 0.6rem; font-size: 1rem; }
.theme-toggle { display: flex; gap: 0.5rem; }
.theme-option { padding: 0.45rem 0.9rem; border: 1px solid var(--color-input-border); border-radius: 6px; background: transparent; color: var(--color-text-primary); font-family: inherit; cursor: pointer; }
.theme-option.active { border-color: var(--color-accent); color: var(--color-accent); }
.text-muted { color: var(--color-text-muted); }

.splash-overlay { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: var(--color-bg-primary); z-index: 100; animation: splash-fade 0.4s ease 2.6s forwards; }
.splash-wordmark { font-size: 2.2rem; letter-spacing: 0.2em; text-transform: uppercase; }
@keyframes splash-fade { to { opacity: 0; visibility: hidden; } }
"#;
