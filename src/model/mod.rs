// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod list;
pub mod matcher;
pub mod parser;

pub use display::TaskDisplay;
pub use item::{Task, TaskKind};
pub use list::TaskList;
pub use matcher::SearchQuery;
pub use parser::{Command, ParsedCommand};
