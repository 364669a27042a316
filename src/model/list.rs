// File: ./src/model/list.rs
// Ordered task collection. The list is the sole owner of its tasks: callers ask
// for an operation by position instead of holding on to a mutable task.
use crate::error::{HuhhhError, Result};
use crate::model::item::Task;
use crate::model::matcher::SearchQuery;
use crate::model::parser::parse_tag_tokens;
use crate::storage::codec;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Validates a 0-based index against the current size.
    fn position(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.tasks.len())
            .ok_or(HuhhhError::IndexOutOfBounds {
                size: self.tasks.len(),
            })
    }

    pub fn get(&self, index: isize) -> Result<&Task> {
        let pos = self.position(index)?;
        Ok(&self.tasks[pos])
    }

    fn get_mut(&mut self, index: isize) -> Result<&mut Task> {
        let pos = self.position(index)?;
        Ok(&mut self.tasks[pos])
    }

    /// Appends to the end. Duplicates are allowed.
    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn delete(&mut self, index: isize) -> Result<Task> {
        let pos = self.position(index)?;
        Ok(self.tasks.remove(pos))
    }

    pub fn mark(&mut self, index: isize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.mark_done();
        Ok(task)
    }

    pub fn unmark(&mut self, index: isize) -> Result<&Task> {
        let task = self.get_mut(index)?;
        task.mark_undone();
        Ok(task)
    }

    /// Adds every `#tag` token. All tokens are validated before any is applied,
    /// so a bad token leaves the task untouched.
    pub fn tag(&mut self, index: isize, tags: &[String]) -> Result<&Task> {
        let task = self.get_mut(index)?;
        let normalized = Self::validate_tags(tags)?;
        task.insert_tags(normalized);
        Ok(task)
    }

    pub fn untag(&mut self, index: isize, tags: &[String]) -> Result<&Task> {
        let task = self.get_mut(index)?;
        let normalized = Self::validate_tags(tags)?;
        task.remove_tags(&normalized);
        Ok(task)
    }

    fn validate_tags(tags: &[String]) -> Result<Vec<String>> {
        if tags.is_empty() {
            return Err(HuhhhError::NoTagsProvided);
        }
        parse_tag_tokens(tags)
    }

    /// Tasks whose description contains `keyword` verbatim. Callers reject an
    /// empty keyword before getting here.
    pub fn find_tasks(&self, keyword: &str) -> TaskList {
        self.filter(&SearchQuery::Keyword(keyword.to_string()))
    }

    pub fn find_tasks_by_tag(&self, tag: &str) -> TaskList {
        self.filter(&SearchQuery::Tag(tag.to_string()))
    }

    pub fn filter(&self, query: &SearchQuery) -> TaskList {
        self.tasks
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    /// One save-file record per task, in display order.
    pub fn serialize(&self) -> Vec<String> {
        self.tasks.iter().map(codec::encode).collect()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.is_empty() {
            return write!(f, "You have no tasks in your list.");
        }
        for (i, task) in self.tasks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, task)?;
        }
        Ok(())
    }
}
