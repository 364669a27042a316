// Error taxonomy shared by the parser, the task list and the storage layer.
//
// Every variant is recoverable: the controller turns it into the message the
// user sees and the session carries on.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuhhhError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuhhhError {
    // --- PARSE ---
    #[error("Command cannot be empty.")]
    BlankCommand,

    #[error("I'm sorry, but I don't know what that means :(")]
    UnrecognizedCommand,

    #[error("Invalid task index provided: {0}.")]
    InvalidIndex(String),

    #[error("Dates must follow the yyyy-mm-dd format (e.g., 2019-10-15).")]
    InvalidDateFormat,

    #[error("{kind} task must have a description.\nUsage: {usage}")]
    EmptyDescription {
        kind: &'static str,
        usage: &'static str,
    },

    #[error("Deadline task must have a /by clause.\nUsage: deadline <desc> /by <date>")]
    MissingByClause,

    #[error("Deadline task must have a specified /by date.\nUsage: deadline <desc> /by <date>")]
    EmptyByDate,

    #[error(
        "Event task must have /from and /to clauses.\nUsage: event <desc> /from <date> /to <date>"
    )]
    MissingFromToClause,

    #[error("/from clause must come before /to clause.\nUsage: event <desc> /from <date> /to <date>")]
    FromAfterTo,

    #[error(
        "Event task must have a specified /from date.\nUsage: event <desc> /from <date> /to <date>"
    )]
    EmptyFromDate,

    #[error("Event task must have a specified /to date.\nUsage: event <desc> /from <date> /to <date>")]
    EmptyToDate,

    #[error("Please provide a task index and at least one tag.\nUsage: {0} <index> #tag [#tag ...]")]
    MissingTagArguments(&'static str),

    #[error(
        "Invalid tag '{0}'. Tags start with '#' and may only contain letters, digits, '_' or '-'."
    )]
    InvalidTagToken(String),

    #[error("Please tell me what to look for.\nUsage: find <keyword> | find #tag")]
    EmptyKeyword,

    #[error("The character '|' is reserved and cannot be used in a task.")]
    ReservedCharacter,

    // --- DOMAIN ---
    #[error("Task index out of bounds. You have {size} tasks.")]
    IndexOutOfBounds { size: usize },

    #[error("Please provide at least one tag.")]
    NoTagsProvided,

    // --- STORAGE ---
    #[error("Failed to read save file: {0}")]
    StorageRead(String),

    #[error("Failed to write save file: {0}")]
    StorageWrite(String),

    #[error("Unable to initialize save file: {0}")]
    StorageInit(String),

    #[error("Corrupted save entry: {0}")]
    CorruptedSaveEntry(String),

    #[error("Invalid completion flag in entry: {0}")]
    InvalidCompletionFlag(String),

    #[error("Corrupted deadline entry: {0}")]
    CorruptedDeadlineEntry(String),

    #[error("Corrupted deadline date: {0}")]
    CorruptedDeadlineDate(String),

    #[error("Corrupted event entry: {0}")]
    CorruptedEventEntry(String),

    #[error("Unknown task type in save: {0}")]
    UnknownTaskType(String),
}

impl HuhhhError {
    /// True for failures raised while reading, writing or decoding the save file.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageRead(_)
                | Self::StorageWrite(_)
                | Self::StorageInit(_)
                | Self::CorruptedSaveEntry(_)
                | Self::InvalidCompletionFlag(_)
                | Self::CorruptedDeadlineEntry(_)
                | Self::CorruptedDeadlineDate(_)
                | Self::CorruptedEventEntry(_)
                | Self::UnknownTaskType(_)
        )
    }
}
