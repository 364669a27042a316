// Maps a task to and from one line of the save file.
//
// TYPE | DONE | DESCRIPTION [| FIELD...] [| TAGS]
//
// T has no extra fields, D has the due date (yyyy-mm-dd), E has from and to.
// TAGS is a comma-joined list of normalized tags without the `#` marker.
use crate::error::{HuhhhError, Result};
use crate::model::item::{Task, TaskKind, normalize_tag};
use crate::model::parser::STORAGE_DATE_FORMAT;
use chrono::NaiveDate;

pub const FIELD_SEPARATOR: &str = " | ";
const TAG_SEPARATOR: &str = ",";

pub fn encode(task: &Task) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(6);
    let code = match task.kind() {
        TaskKind::Todo => "T",
        TaskKind::Deadline { .. } => "D",
        TaskKind::Event { .. } => "E",
    };
    fields.push(code.to_string());
    fields.push(if task.is_done() { "1" } else { "0" }.to_string());
    fields.push(task.description().to_string());

    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due } => fields.push(due.format(STORAGE_DATE_FORMAT).to_string()),
        TaskKind::Event { from, to } => {
            fields.push(from.clone());
            fields.push(to.clone());
        }
    }

    if task.has_tags() {
        fields.push(task.tags().collect::<Vec<_>>().join(TAG_SEPARATOR));
    }

    fields.join(FIELD_SEPARATOR)
}

fn parse_done(value: &str, line: &str) -> Result<bool> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(HuhhhError::InvalidCompletionFlag(line.to_string())),
    }
}

/// Unparseable tag tokens are skipped rather than failing the whole line.
fn parse_tags(field: Option<&str>) -> Vec<String> {
    field
        .map(|raw| raw.split(TAG_SEPARATOR).filter_map(normalize_tag).collect())
        .unwrap_or_default()
}

pub fn decode(line: &str) -> Result<Task> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < 3 || parts[2].is_empty() {
        return Err(HuhhhError::CorruptedSaveEntry(line.to_string()));
    }
    let done = parse_done(parts[1], line)?;
    let description = parts[2];

    let (task, tags_field) = match parts[0] {
        "T" => (Task::todo(description), parts.get(3)),
        "D" => {
            let raw_due = parts
                .get(3)
                .ok_or_else(|| HuhhhError::CorruptedDeadlineEntry(line.to_string()))?;
            let due = NaiveDate::parse_from_str(raw_due, STORAGE_DATE_FORMAT)
                .map_err(|_| HuhhhError::CorruptedDeadlineDate(line.to_string()))?;
            (Task::deadline(description, due), parts.get(4))
        }
        "E" => {
            if parts.len() < 5 {
                return Err(HuhhhError::CorruptedEventEntry(line.to_string()));
            }
            (Task::event(description, parts[3], parts[4]), parts.get(5))
        }
        other => return Err(HuhhhError::UnknownTaskType(other.to_string())),
    };

    Ok(task
        .with_done(done)
        .with_tags(parse_tags(tags_field.copied())))
}
