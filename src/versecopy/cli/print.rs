use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use versecopy::books::BOOKS;
use versecopy::commands::{CmdMessage, MessageLevel};
use versecopy::model::Verse;

const LINE_WIDTH: usize = 100;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

/// Numbered verse list: position, translation column, wrapped text.
pub(super) fn render_verses(label: Option<&str>, verses: &[Verse]) -> String {
    if verses.is_empty() {
        return format!("{}\n", "No verses loaded.".dimmed());
    }

    let mut out = String::new();
    if let Some(label) = label {
        out.push_str(&format!("\n{}\n\n", label.bold()));
    }

    let num_width = verses.len().to_string().len();
    let code_width = verses
        .iter()
        .map(|v| v.translation.width())
        .max()
        .unwrap_or(0);
    let indent = num_width + 2 + code_width + 2;
    let text_width = LINE_WIDTH.saturating_sub(indent).max(20);

    for (i, verse) in verses.iter().enumerate() {
        let num = format!("{:>width$}.", i + 1, width = num_width);
        let pad = " ".repeat(code_width - verse.translation.width());
        let lines = wrap(&verse.text, text_width);

        let first = lines.first().map(String::as_str).unwrap_or("");
        out.push_str(&format!(
            "{} {}{}  {}\n",
            num.dimmed(),
            verse.translation.yellow().bold(),
            pad,
            first
        ));
        for line in lines.iter().skip(1) {
            out.push_str(&" ".repeat(indent));
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub(super) fn render_books() -> String {
    let name_width = BOOKS.iter().map(|b| b.name.width()).max().unwrap_or(0);
    BOOKS
        .iter()
        .map(|b| {
            format!(
                "{}  {}{}  {:>3}  {}\n",
                b.code.yellow(),
                b.name,
                " ".repeat(name_width - b.name.width()),
                b.chapters,
                b.aliases.join(", ").dimmed()
            )
        })
        .collect()
}

/// Greedy word wrap by display width. Words wider than `width` get a line of
/// their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
