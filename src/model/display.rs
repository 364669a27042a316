// File: ./src/model/display.rs
use crate::model::item::{Task, TaskKind};
use std::fmt;

/// `Dec 31 2024`
pub const DISPLAY_DATE_FORMAT: &str = "%b %d %Y";

pub trait TaskDisplay {
    fn type_badge(&self) -> &'static str;
    fn status_icon(&self) -> &'static str;
    fn detail_suffix(&self) -> String;
    fn tag_suffix(&self) -> String;
}

impl TaskDisplay for Task {
    fn type_badge(&self) -> &'static str {
        match self.kind() {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline { .. } => "[D]",
            TaskKind::Event { .. } => "[E]",
        }
    }

    fn status_icon(&self) -> &'static str {
        if self.is_done() { "X" } else { " " }
    }

    fn detail_suffix(&self) -> String {
        match self.kind() {
            TaskKind::Todo => String::new(),
            TaskKind::Deadline { due } => format!(" (by: {})", due.format(DISPLAY_DATE_FORMAT)),
            TaskKind::Event { from, to } => format!(" (from: {} to: {})", from, to),
        }
    }

    fn tag_suffix(&self) -> String {
        if !self.has_tags() {
            return String::new();
        }
        let tags: Vec<String> = self.tags().map(|t| format!("#{}", t)).collect();
        format!(" [{}]", tags.join(" "))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}{}{}",
            self.type_badge(),
            self.status_icon(),
            self.description(),
            self.detail_suffix(),
            self.tag_suffix()
        )
    }
}
