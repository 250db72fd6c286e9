//! # Exporters
//!
//! Pure serializers of the current verse list. Neither touches the clipboard;
//! the caller hands their output to a [`ClipboardSink`](crate::clipboard::ClipboardSink).
//!
//! - [`export_as_table`]: a two-column table (translation, text) that renders to
//!   HTML for word processors, with a tab-separated plain fallback.
//! - [`export_as_tagged_text`]: USFM table rows for Paratext:
//!   `\tr \tc1 <translation> \tc2 <text>`, one row per line.

use crate::model::Verse;

/// Two cells per row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseTable {
    rows: Vec<(String, String)>,
}

impl VerseTable {
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<table><tbody>");
        for (translation, text) in &self.rows {
            html.push_str("<tr><td>");
            html.push_str(&escape_html(translation));
            html.push_str("</td><td>");
            html.push_str(&escape_html(text));
            html.push_str("</td></tr>");
        }
        html.push_str("</tbody></table>");
        html
    }

    pub fn to_plain(&self) -> String {
        self.rows
            .iter()
            .map(|(translation, text)| format!("{}\t{}", translation, text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn export_as_table(verses: &[Verse]) -> VerseTable {
    VerseTable {
        rows: verses
            .iter()
            .map(|v| (v.translation.clone(), v.text.clone()))
            .collect(),
    }
}

pub fn export_as_tagged_text(verses: &[Verse]) -> String {
    verses
        .iter()
        .map(|v| format!("\\tr \\tc1 {} \\tc2 {}", v.translation, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
