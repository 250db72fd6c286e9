use super::{CmdMessage, CmdResult};
use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::export::{export_as_table, export_as_tagged_text};
use crate::model::Verse;
use crate::reference::ReferenceParser;
use crate::session::Session;
use crate::source::VerseSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// Two-column table, placed as HTML for word processors.
    Table,
    /// USFM table rows for Paratext, placed as plain text.
    Tagged,
}

/// The text a format produces for `verses`. Tables render as HTML.
pub fn render(verses: &[Verse], format: CopyFormat) -> String {
    match format {
        CopyFormat::Table => export_as_table(verses).to_html(),
        CopyFormat::Tagged => export_as_tagged_text(verses),
    }
}

pub fn run<S, P, C>(
    session: &Session<S, P>,
    clipboard: &mut C,
    format: CopyFormat,
) -> Result<CmdResult>
where
    S: VerseSource,
    P: ReferenceParser,
    C: ClipboardSink,
{
    let verses = session.verses().as_slice();
    let mut result = CmdResult::default().with_label(session.current_label().map(str::to_string));

    if verses.is_empty() {
        result.add_message(CmdMessage::info("Nothing to copy."));
        return Ok(result);
    }

    match format {
        CopyFormat::Table => {
            let table = export_as_table(verses);
            clipboard.write_rich(&table.to_html(), &table.to_plain())?;
        }
        CopyFormat::Tagged => {
            clipboard.write_plain(&export_as_tagged_text(verses))?;
        }
    }

    let what = match format {
        CopyFormat::Table => "table",
        CopyFormat::Tagged => "USFM",
    };
    result.add_message(CmdMessage::success(format!(
        "Copied {} verse{} as {}",
        verses.len(),
        if verses.len() == 1 { "" } else { "s" },
        what
    )));
    Ok(result)
}
