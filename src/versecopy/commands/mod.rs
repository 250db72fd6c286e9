//! # Command Layer
//!
//! The operations a UI can trigger, as plain functions over a [`Session`]
//! (and, for copying, a [`ClipboardSink`]).
//!
//! Commands never print. They return a [`CmdResult`] carrying the verses to
//! show and leveled [`CmdMessage`]s; the UI decides how to render both.
//!
//! - [`search`]: normalize, fetch and load a reference
//! - [`reorder`]: move one verse within the list
//! - [`copy`]: export the list and place it on the clipboard
//!
//! [`Session`]: crate::session::Session
//! [`ClipboardSink`]: crate::clipboard::ClipboardSink

use crate::model::Verse;
use serde::Serialize;

pub mod copy;
pub mod reorder;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Canonical label of the loaded reference, when there is one.
    pub label: Option<String>,
    pub listed_verses: Vec<Verse>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_listed_verses(mut self, verses: Vec<Verse>) -> Self {
        self.listed_verses = verses;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
