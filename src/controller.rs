//! Command dispatch for a single session.
//!
//! `TaskController` is the application state: it owns the task list and the
//! storage, and every front end (terminal loop, tests, an embedding GUI) talks
//! to it through `submit`. Each command runs to completion (parse, mutate,
//! persist, respond) before the next one is accepted.
use crate::error::{HuhhhError, Result};
use crate::model::parser::{self, Command, ParsedCommand};
use crate::model::{SearchQuery, Task, TaskList};
use crate::storage::Storage;
use log::{debug, error, info, warn};

pub const GOODBYE: &str = "Bye. Hope to see you again soon!";
pub const LOAD_FAILED: &str = "Unable to load previous tasks, starting with an empty list.";

pub struct TaskController {
    tasks: TaskList,
    storage: Storage,
    exit: bool,
    load_warning: Option<String>,
}

impl TaskController {
    /// Loads the saved tasks. A failed load does not stop the session: it starts
    /// empty, keeps a copy of the unreadable file and records a warning.
    pub fn new(storage: Storage) -> Self {
        let (tasks, load_warning) = match storage.load() {
            Ok(tasks) => {
                info!("Loaded {} task(s) from {}", tasks.len(), storage.location());
                (TaskList::from(tasks), None)
            }
            Err(e) => {
                warn!("Failed to load {}: {}", storage.location(), e);
                match storage.preserve_unreadable() {
                    Ok(Some(backup)) => warn!("Unreadable save file copied to {:?}", backup),
                    Ok(None) => {}
                    Err(copy_err) => error!("Could not back up unreadable save file: {}", copy_err),
                }
                (TaskList::new(), Some(format!("{}\n{}", LOAD_FAILED, e)))
            }
        };
        Self {
            tasks,
            storage,
            exit: false,
            load_warning,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }

    /// Set when the saved tasks could not be loaded at startup.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Single entry point for front ends: always yields the text to show.
    pub fn submit(&mut self, line: &str) -> String {
        self.handle(line).unwrap_or_else(|e| e.to_string())
    }

    /// Like `submit`, but keeps failures apart so a front end can route them.
    pub fn handle(&mut self, line: &str) -> Result<String> {
        let parsed = parser::parse(line)?;
        let result = self.execute(&parsed);
        match &result {
            Ok(_) if parsed.command.is_mutating() => debug!(
                "'{}' saved {} task(s) to {}",
                parsed.command.keyword(),
                self.tasks.len(),
                self.storage.location()
            ),
            Ok(_) => {}
            Err(e) if e.is_storage() => {
                error!("'{}' failed: {}", parsed.command.keyword(), e)
            }
            Err(e) => debug!("'{}' rejected: {}", parsed.command.keyword(), e),
        }
        result
    }

    fn execute(&mut self, parsed: &ParsedCommand) -> Result<String> {
        let args = parsed.arguments.as_str();
        match parsed.command {
            Command::List => Ok(self.tasks.to_string()),
            Command::Todo => self.add_task(parser::parse_todo(args)?),
            Command::Deadline => self.add_task(parser::parse_deadline(args)?),
            Command::Event => self.add_task(parser::parse_event(args)?),
            Command::Mark => {
                let shown = self.tasks.mark(parser::parse_index(args)?)?.to_string();
                self.persist()?;
                Ok(format!("Nice! I've marked this task as done:\n  {}", shown))
            }
            Command::Unmark => {
                let shown = self.tasks.unmark(parser::parse_index(args)?)?.to_string();
                self.persist()?;
                Ok(format!("OK, I've marked this task as not done yet:\n  {}", shown))
            }
            Command::Delete => {
                let removed = self.tasks.delete(parser::parse_index(args)?)?;
                self.persist()?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                    removed,
                    self.tasks.len()
                ))
            }
            Command::Tag => {
                let request = parser::parse_index_and_tags(args, Command::Tag)?;
                let shown = self.tasks.tag(request.index, &request.tags)?.to_string();
                self.persist()?;
                Ok(format!("OK, I've tagged this task:\n  {}", shown))
            }
            Command::Untag => {
                let request = parser::parse_index_and_tags(args, Command::Untag)?;
                let shown = self.tasks.untag(request.index, &request.tags)?.to_string();
                self.persist()?;
                Ok(format!("OK, I've removed those tags from this task:\n  {}", shown))
            }
            Command::Find => {
                let matches = self.tasks.filter(&SearchQuery::parse(args)?);
                if matches.is_empty() {
                    Ok("No matching tasks found.".to_string())
                } else {
                    Ok(format!("Here are the matching tasks in your list:\n{}", matches))
                }
            }
            Command::Bye => {
                self.exit = true;
                Ok(GOODBYE.to_string())
            }
            Command::Unknown => Err(HuhhhError::UnrecognizedCommand),
        }
    }

    fn add_task(&mut self, task: Task) -> Result<String> {
        debug!("Adding {} '{}'", task.kind().label(), task.description());
        let shown = self.tasks.add(task).to_string();
        self.persist()?;
        Ok(format!(
            "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
            shown,
            self.tasks.len()
        ))
    }

    /// Full snapshot after each successful mutation. On failure the in-memory
    /// change stays and the error is reported; the next successful save
    /// brings the file back in line.
    fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}
