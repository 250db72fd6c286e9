use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::ReferenceParser;
use crate::session::Session;
use crate::source::VerseSource;

/// Moves the verse at `from` to `to` (zero-based).
pub fn run<S: VerseSource, P: ReferenceParser>(
    session: &mut Session<S, P>,
    from: usize,
    to: usize,
) -> Result<CmdResult> {
    session.move_verse(from, to)?;

    let moved = &session.verses().as_slice()[to];
    let mut result = CmdResult::default()
        .with_label(session.current_label().map(str::to_string))
        .with_listed_verses(session.verses().as_slice().to_vec());
    result.add_message(CmdMessage::info(format!(
        "Moved {} to position {}",
        moved.translation,
        to + 1
    )));
    Ok(result)
}
