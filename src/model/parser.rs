// File: src/model/parser.rs
// Turns a raw input line into a command plus the structured fields its
// arguments carry (index, date, clause-delimited description/date pairs, tags).
use crate::error::{HuhhhError, Result};
use crate::model::item::{Task, normalize_tag, parse_tag_token};
use chrono::NaiveDate;
use strum::{EnumIter, EnumString};

pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

const BY_CLAUSE: &str = "/by";
const FROM_CLAUSE: &str = "/from";
const TO_CLAUSE: &str = "/to";

/// Field separator of the save file; never allowed inside a task.
const RESERVED: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    List,
    Mark,
    Unmark,
    Delete,
    Todo,
    Deadline,
    Event,
    Find,
    Tag,
    Untag,
    Bye,
    #[strum(disabled)]
    Unknown,
}

impl Command {
    /// Case-insensitive keyword lookup. Anything unrecognized maps to `Unknown`.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or(Command::Unknown)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Mark => "mark",
            Command::Unmark => "unmark",
            Command::Delete => "delete",
            Command::Todo => "todo",
            Command::Deadline => "deadline",
            Command::Event => "event",
            Command::Find => "find",
            Command::Tag => "tag",
            Command::Untag => "untag",
            Command::Bye => "bye",
            Command::Unknown => "",
        }
    }

    /// Commands that change the list and therefore trigger a save.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Command::Mark
                | Command::Unmark
                | Command::Delete
                | Command::Todo
                | Command::Deadline
                | Command::Event
                | Command::Tag
                | Command::Untag
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    /// Everything after the first space, verbatim.
    pub arguments: String,
}

/// Splits a line into its command keyword and the untouched remainder.
///
/// The split happens on the first space only, so `todo   a  b` carries the
/// arguments `"  a  b"`.
pub fn parse(line: &str) -> Result<ParsedCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(HuhhhError::BlankCommand);
    }
    let (keyword, arguments) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    Ok(ParsedCommand {
        command: Command::from_token(keyword),
        arguments: arguments.to_string(),
    })
}

/// Parses a 1-based index into a 0-based one. Range checks belong to the list,
/// so `"0"` yields `-1` here.
pub fn parse_index(text: &str) -> Result<isize> {
    text.trim()
        .parse::<isize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| HuhhhError::InvalidIndex(text.to_string()))
}

fn has_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Accepts exactly `yyyy-mm-dd`.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let raw = text.trim();
    if !has_iso_date_shape(raw) {
        return Err(HuhhhError::InvalidDateFormat);
    }
    NaiveDate::parse_from_str(raw, STORAGE_DATE_FORMAT).map_err(|_| HuhhhError::InvalidDateFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAndTags {
    pub index: isize,
    /// Raw `#tag` tokens, in input order.
    pub tags: Vec<String>,
}

/// Arguments of `tag` / `untag`: an index followed by one or more `#tag` tokens.
pub fn parse_index_and_tags(text: &str, command: Command) -> Result<IndexAndTags> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(HuhhhError::MissingTagArguments(command.keyword()));
    }
    let index = parse_index(tokens[0])?;
    let mut tags = Vec::with_capacity(tokens.len() - 1);
    for token in &tokens[1..] {
        if !token.starts_with('#') {
            return Err(HuhhhError::InvalidTagToken(token.to_string()));
        }
        tags.push(token.to_string());
    }
    Ok(IndexAndTags { index, tags })
}

/// Pulls `#tag` tokens out of free text. Tokens that fail validation are
/// dropped silently; everything else is rejoined with single spaces.
pub fn extract_tags(text: &str) -> (String, Vec<String>) {
    let mut words = Vec::new();
    let mut tags = Vec::new();
    for word in text.split_whitespace() {
        if word.starts_with('#') {
            if let Some(tag) = normalize_tag(word) {
                tags.push(tag);
            }
            continue;
        }
        words.push(word);
    }
    (words.join(" "), tags)
}

/// Runs of whitespace, line breaks included, become a single space. Every
/// stored field must fit on one line of the save file.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn reject_reserved(fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.contains(RESERVED)) {
        return Err(HuhhhError::ReservedCharacter);
    }
    Ok(())
}

/// Description with its inline tags removed; blank results are rejected with
/// the usage line of the task kind being created.
fn description_and_tags(
    text: &str,
    kind: &'static str,
    usage: &'static str,
) -> Result<(String, Vec<String>)> {
    let (description, tags) = extract_tags(text);
    if description.is_empty() {
        return Err(HuhhhError::EmptyDescription { kind, usage });
    }
    Ok((description, tags))
}

// --- TASK CONSTRUCTION ---

const TODO_USAGE: &str = "todo <desc>";
const DEADLINE_USAGE: &str = "deadline <desc> /by <date>";
const EVENT_USAGE: &str = "event <desc> /from <date> /to <date>";

/// `todo <desc>`
pub fn parse_todo(arguments: &str) -> Result<Task> {
    let (description, tags) = description_and_tags(arguments, "Todo", TODO_USAGE)?;
    reject_reserved(&[&description])?;
    Ok(Task::todo(description).with_tags(tags))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineClauses<'a> {
    pub description: &'a str,
    pub due: &'a str,
}

/// Splits `<desc> /by <date>` around the first `/by`.
pub fn split_deadline(arguments: &str) -> Result<DeadlineClauses<'_>> {
    let by = arguments.find(BY_CLAUSE).ok_or(HuhhhError::MissingByClause)?;
    let description = arguments[..by].trim();
    if description.is_empty() {
        return Err(HuhhhError::EmptyDescription {
            kind: "Deadline",
            usage: DEADLINE_USAGE,
        });
    }
    let due = arguments[by + BY_CLAUSE.len()..].trim();
    if due.is_empty() {
        return Err(HuhhhError::EmptyByDate);
    }
    Ok(DeadlineClauses { description, due })
}

/// `deadline <desc> /by <yyyy-mm-dd>`
pub fn parse_deadline(arguments: &str) -> Result<Task> {
    let clauses = split_deadline(arguments)?;
    let due = parse_date(clauses.due)?;
    let (description, tags) = description_and_tags(clauses.description, "Deadline", DEADLINE_USAGE)?;
    reject_reserved(&[&description])?;
    Ok(Task::deadline(description, due).with_tags(tags))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventClauses<'a> {
    pub description: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

/// Splits `<desc> /from <x> /to <y>` around the first `/from` and first `/to`.
pub fn split_event(arguments: &str) -> Result<EventClauses<'_>> {
    let (Some(from), Some(to)) = (arguments.find(FROM_CLAUSE), arguments.find(TO_CLAUSE)) else {
        return Err(HuhhhError::MissingFromToClause);
    };
    if from >= to {
        return Err(HuhhhError::FromAfterTo);
    }
    let description = arguments[..from].trim();
    if description.is_empty() {
        return Err(HuhhhError::EmptyDescription {
            kind: "Event",
            usage: EVENT_USAGE,
        });
    }
    let start = arguments[from + FROM_CLAUSE.len()..to].trim();
    if start.is_empty() {
        return Err(HuhhhError::EmptyFromDate);
    }
    let end = arguments[to + TO_CLAUSE.len()..].trim();
    if end.is_empty() {
        return Err(HuhhhError::EmptyToDate);
    }
    Ok(EventClauses {
        description,
        from: start,
        to: end,
    })
}

/// `event <desc> /from <x> /to <y>`
pub fn parse_event(arguments: &str) -> Result<Task> {
    let clauses = split_event(arguments)?;
    let (description, tags) = description_and_tags(clauses.description, "Event", EVENT_USAGE)?;
    let from = collapse_whitespace(clauses.from);
    let to = collapse_whitespace(clauses.to);
    reject_reserved(&[&description, &from, &to])?;
    Ok(Task::event(description, from, to).with_tags(tags))
}

/// Normalizes every token of a strict tag list, failing on the first bad one.
pub fn parse_tag_tokens(tokens: &[String]) -> Result<Vec<String>> {
    tokens.iter().map(|t| parse_tag_token(t)).collect()
}
