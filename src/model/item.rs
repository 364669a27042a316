// File: ./src/model/item.rs
use crate::error::{HuhhhError, Result};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The three kinds of task, with the fields only that kind carries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDate },
    Event { from: String, to: String },
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Todo => "Todo",
            TaskKind::Deadline { .. } => "Deadline",
            TaskKind::Event { .. } => "Event",
        }
    }
}

/// A tracked unit of work.
///
/// The description is fixed at construction. Completion and tags are the only
/// mutable state, and callers outside the crate reach them through
/// [`TaskList`](crate::model::TaskList) operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    description: String,
    kind: TaskKind,
    done: bool,
    tags: BTreeSet<String>,
}

impl Task {
    fn with_kind(description: impl Into<String>, kind: TaskKind) -> Self {
        let description = description.into();
        debug_assert!(
            !description.trim().is_empty(),
            "task description must not be blank"
        );
        Self {
            description,
            kind,
            done: false,
            tags: BTreeSet::new(),
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_kind(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDate) -> Self {
        Self::with_kind(description, TaskKind::Deadline { due })
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Normalized tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Adds a `#tag` token. Returns false when the tag was already present.
    pub fn add_tag(&mut self, raw: &str) -> Result<bool> {
        let tag = parse_tag_token(raw)?;
        Ok(self.tags.insert(tag))
    }

    /// Removes a `#tag` token. Removing a tag the task does not carry is a no-op.
    pub fn remove_tag(&mut self, raw: &str) -> Result<bool> {
        let tag = parse_tag_token(raw)?;
        Ok(self.tags.remove(&tag))
    }

    /// Lenient lookup: accepts the tag with or without its `#` marker, any case.
    pub fn has_tag(&self, raw: &str) -> bool {
        normalize_tag(raw).is_some_and(|tag| self.tags.contains(&tag))
    }

    /// Builder used when tags were already normalized (free-text extraction, storage).
    pub(crate) fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.insert_tags(tags);
        self
    }

    pub(crate) fn insert_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.tags.extend(tags);
    }

    pub(crate) fn remove_tags(&mut self, tags: &[String]) {
        for tag in tags {
            self.tags.remove(tag);
        }
    }

    pub(crate) fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

// --- TAGS ---

fn is_tag_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

/// Strips an optional `#`, lowercases and validates against `[a-z0-9_-]+`.
/// Returns `None` for anything that is not a usable tag.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let body = raw.trim();
    let body = body.strip_prefix('#').unwrap_or(body);
    let tag = body.to_lowercase();
    if !tag.is_empty() && tag.chars().all(is_tag_char) {
        Some(tag)
    } else {
        None
    }
}

/// Strict form used when tagging is the explicit intent: the token must carry
/// the `#` marker and normalize to a valid tag.
pub fn parse_tag_token(token: &str) -> Result<String> {
    if !token.starts_with('#') {
        return Err(HuhhhError::InvalidTagToken(token.to_string()));
    }
    normalize_tag(token).ok_or_else(|| HuhhhError::InvalidTagToken(token.to_string()))
}
