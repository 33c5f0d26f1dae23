//! Response Parser Module
//!
//! Extracts the `{html, css, js}` file set from the loosely formatted text
//! the model returns. Marker-delimited extraction: a case-insensitive
//! pattern locates every `##HTML##` / `##CSS##` / `##JAVASCRIPT##` marker
//! (with `##JS##` as an alias); the span between a marker and the next
//! marker, or end of input, belongs to that marker's section. Duplicate
//! markers concatenate their cleaned spans in order of appearance.
//!
//! The parser is total: no input fails, malformed replies degrade to
//! partially or fully empty sections.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)##\s*(HTML|CSS|JAVASCRIPT|JS)\s*:?\s*##").expect("valid marker pattern")
});

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[a-zA-Z]*").expect("valid fence pattern"));

// == File Set ==
/// The three source artifacts extracted from one model reply.
///
/// Every field is always present; a section the model never produced is an
/// empty string, not an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    /// Markup written to `index.html`
    pub html: String,
    /// Styles written to `css/styles.css`
    pub css: String,
    /// Script written to `js/main.js`
    pub js: String,
}

impl FileSet {
    /// Returns true if no section carries any content.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }
}

// == Parse Response ==
/// Extracts a [`FileSet`] from a raw model reply.
///
/// Markers may appear in any order; text before the first marker is
/// discarded. Re-parsing a reply whose sections were already cleaned yields
/// the same sections.
pub fn parse_response(raw: &str) -> FileSet {
    let markers: Vec<_> = SECTION_MARKER.captures_iter(raw).collect();

    let mut html: Vec<String> = Vec::new();
    let mut css: Vec<String> = Vec::new();
    let mut js: Vec<String> = Vec::new();

    for (index, capture) in markers.iter().enumerate() {
        let whole = capture.get(0).expect("capture group 0 always present");
        let label = capture
            .get(1)
            .expect("marker pattern has one group")
            .as_str()
            .to_ascii_uppercase();

        let start = whole.end();
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(raw.len(), |next| next.start());

        let section = clean_code(&raw[start..end]);
        if section.is_empty() {
            continue;
        }

        match label.as_str() {
            "HTML" => html.push(section),
            "CSS" => css.push(section),
            // JS is tolerated as shorthand for JAVASCRIPT
            _ => js.push(section),
        }
    }

    FileSet {
        html: html.join("\n"),
        css: css.join("\n"),
        js: js.join("\n"),
    }
}

// == Clean Code ==
/// Strips fenced code-block delimiters and surrounding whitespace.
///
/// Idempotent: cleaning already-clean text is a no-op.
pub fn clean_code(code: &str) -> String {
    CODE_FENCE.replace_all(code, "").trim().to_string()
}
