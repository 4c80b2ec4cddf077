use crate::analysis::AnalysisRecord;
use anyhow::Result;
use comrak::{ComrakOptions, markdown_to_html as render_markdown};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
});

/// Render one analysis section as HTML. Model output is treated as plain
/// markdown; raw HTML stays escaped.
pub fn markdown_to_html(md: &str) -> String {
    render_markdown(md, &MARKDOWN_OPTIONS)
}

/// Flatten a record into plain text for the clipboard, skipping absent
/// sections entirely.
pub fn record_as_text(record: &AnalysisRecord) -> String {
    let mut out = String::new();

    if let Some(reference) = &record.verse_reference {
        out.push_str(reference);
        out.push_str("\n\n");
    }
    let sections = [
        ("Verse", &record.verse_text),
        ("Context", &record.context),
        ("Exegesis", &record.exegesis),
        ("Themes", &record.themes),
    ];
    for (title, value) in sections {
        if let Some(text) = value
            && !text.trim().is_empty()
        {
            out.push_str(title);
            out.push('\n');
            out.push_str(text);
            out.push_str("\n\n");
        }
    }
    if let Some(refs) = &record.cross_references
        && !refs.is_empty()
    {
        out.push_str("Cross References\n");
        for xref in refs {
            let reference = xref.reference.as_deref().unwrap_or("-");
            let text = xref.text.as_deref().unwrap_or("");
            out.push_str(&format!("{reference}: {text}\n"));
        }
    }

    out.trim_end().to_string()
}

#[cfg(any(feature = "desktop", feature = "mobile"))]
pub fn copy_to_clipboard(text: String) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(not(any(feature = "desktop", feature = "mobile")))]
pub fn copy_to_clipboard(_text: String) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::CrossReference;

    #[test]
    fn record_as_text_skips_absent_sections() {
        let mut record = AnalysisRecord::new();
        record.verse_reference = Some("John 3:16".into());
        record.themes = Some("Love. Salvation.".into());
        record.cross_references = Some(vec![CrossReference::new(
            Some("Rom 5:8".into()),
            Some("But God shows his love...".into()),
        )]);

        let text = record_as_text(&record);
        assert!(text.starts_with("John 3:16"));
        assert!(text.contains("Themes\nLove. Salvation."));
        assert!(text.contains("Rom 5:8: But God shows his love..."));
        assert!(!text.contains("Context"));
        assert!(!text.contains("Exegesis"));
    }
}
