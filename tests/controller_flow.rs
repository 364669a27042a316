// File: tests/controller_flow.rs
use huhhh::controller::{GOODBYE, LOAD_FAILED};
use huhhh::error::{HuhhhError, Result};
use huhhh::storage::{LineStore, MemoryLineStore, Storage};
use huhhh::TaskController;

fn session() -> (TaskController, MemoryLineStore) {
    let handle = MemoryLineStore::new();
    let controller = TaskController::new(Storage::new(handle.clone()));
    (controller, handle)
}

// --- ADD / MARK / DELETE ---
#[test]
fn test_todo_mark_delete_round() {
    let (mut c, store) = session();

    assert_eq!(
        c.submit("todo read book"),
        "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 tasks in the list."
    );
    assert_eq!(store.lines(), vec!["T | 0 | read book"]);

    assert_eq!(
        c.submit("mark 1"),
        "Nice! I've marked this task as done:\n  [T][X] read book"
    );
    assert_eq!(store.lines(), vec!["T | 1 | read book"]);

    assert_eq!(
        c.submit("unmark 1"),
        "OK, I've marked this task as not done yet:\n  [T][ ] read book"
    );

    assert_eq!(
        c.submit("delete 1"),
        "Noted. I've removed this task:\n  [T][ ] read book\nNow you have 0 tasks in the list."
    );
    assert!(store.lines().is_empty());
    assert_eq!(c.submit("list"), "You have no tasks in your list.");
}

#[test]
fn test_deadline_is_saved_and_reloaded() {
    let (mut c, store) = session();
    c.submit("deadline return book /by 2019-10-15");
    assert_eq!(store.lines(), vec!["D | 0 | return book | 2019-10-15"]);

    let reloaded = TaskController::new(Storage::new(store.clone()));
    assert!(reloaded.load_warning().is_none());
    assert_eq!(
        reloaded.tasks().to_string(),
        "1. [D][ ] return book (by: Oct 15 2019)"
    );
}

#[test]
fn test_bad_deadline_date_is_rejected() {
    let (mut c, store) = session();
    assert_eq!(
        c.submit("deadline return book /by 15/10/2019"),
        "Dates must follow the yyyy-mm-dd format (e.g., 2019-10-15)."
    );
    assert!(c.tasks().is_empty());
    assert!(store.lines().is_empty());
}

#[test]
fn test_event_with_swapped_clauses_adds_nothing() {
    let (mut c, store) = session();
    let reply = c.submit("event party /to 11pm /from 8pm");
    assert_eq!(reply, HuhhhError::FromAfterTo.to_string());
    assert!(c.tasks().is_empty());
    assert!(store.lines().is_empty());

    c.submit("event party /from 8pm /to 11pm");
    assert_eq!(store.lines(), vec!["E | 0 | party | 8pm | 11pm"]);
}

#[test]
fn test_line_breaks_never_reach_the_store() {
    let (mut c, store) = session();
    c.submit("todo keep me");
    c.submit("event x /from a\nb /to c");
    c.submit("todo first\r\nsecond");
    c.submit("deadline pay\nrent /by 2024-01-31");

    assert_eq!(
        store.lines(),
        vec![
            "T | 0 | keep me",
            "E | 0 | x | a b | c",
            "T | 0 | first second",
            "D | 0 | pay rent | 2024-01-31",
        ]
    );
    assert!(store.lines().iter().all(|l| !l.contains(['\n', '\r'])));

    let reloaded = TaskController::new(Storage::new(store.clone()));
    assert!(reloaded.load_warning().is_none());
    assert_eq!(reloaded.tasks(), c.tasks());
}

// --- TAGS ---
#[test]
fn test_tag_normalizes_and_deduplicates() {
    let (mut c, store) = session();
    c.submit("todo read book");

    assert_eq!(
        c.submit("tag 1 #fun #Fun"),
        "OK, I've tagged this task:\n  [T][ ] read book [#fun]"
    );
    assert_eq!(store.lines(), vec!["T | 0 | read book | fun"]);

    assert_eq!(
        c.submit("untag 1 #FUN"),
        "OK, I've removed those tags from this task:\n  [T][ ] read book"
    );
    assert_eq!(store.lines(), vec!["T | 0 | read book"]);
}

#[test]
fn test_tag_errors_leave_task_untouched() {
    let (mut c, _store) = session();
    c.submit("todo read book");

    assert_eq!(
        c.submit("tag 1"),
        HuhhhError::MissingTagArguments("tag").to_string()
    );
    assert_eq!(
        c.submit("tag 1 #ok fun"),
        HuhhhError::InvalidTagToken("fun".to_string()).to_string()
    );
    assert_eq!(
        c.submit("tag 3 #ok"),
        "Task index out of bounds. You have 1 tasks."
    );
    assert!(!c.tasks().get(0).unwrap().has_tags());
}

#[test]
fn test_inline_tags_on_add() {
    let (mut c, store) = session();
    c.submit("todo   buy   milk #errands");
    assert_eq!(c.tasks().to_string(), "1. [T][ ] buy milk [#errands]");
    assert_eq!(store.lines(), vec!["T | 0 | buy milk | errands"]);
}

// --- INDEX ERRORS ---
#[test]
fn test_index_errors_leave_list_unchanged() {
    let (mut c, store) = session();
    c.submit("todo a");
    c.submit("todo b");
    let before = c.tasks().clone();
    let saved = store.lines();

    for line in ["mark 3", "unmark 0", "delete -1", "delete 99"] {
        assert_eq!(c.submit(line), "Task index out of bounds. You have 2 tasks.");
    }
    assert_eq!(c.submit("mark two"), "Invalid task index provided: two.");
    assert_eq!(c.submit("delete"), "Invalid task index provided: .");

    assert_eq!(c.tasks(), &before);
    assert_eq!(store.lines(), saved);
}

// --- FIND ---
#[test]
fn test_find_by_keyword_and_tag() {
    let (mut c, _store) = session();
    c.submit("todo read book");
    c.submit("todo return book #library");
    c.submit("todo buy milk");

    assert_eq!(
        c.submit("find book"),
        "Here are the matching tasks in your list:\n1. [T][ ] read book\n2. [T][ ] return book [#library]"
    );
    assert_eq!(
        c.submit("find #LIBRARY"),
        "Here are the matching tasks in your list:\n1. [T][ ] return book [#library]"
    );
    assert_eq!(c.submit("find Book"), "No matching tasks found.");
    assert_eq!(c.submit("find"), HuhhhError::EmptyKeyword.to_string());
}

// --- MISC COMMANDS ---
#[test]
fn test_blank_unknown_and_reserved_input() {
    let (mut c, _store) = session();
    assert_eq!(c.submit("   "), "Command cannot be empty.");
    assert_eq!(c.submit("blah"), "I'm sorry, but I don't know what that means :(");
    assert_eq!(
        c.submit("todo a | b"),
        HuhhhError::ReservedCharacter.to_string()
    );
    assert!(c.tasks().is_empty());
}

#[test]
fn test_keywords_are_case_insensitive() {
    let (mut c, _store) = session();
    c.submit("TODO shout");
    assert_eq!(c.tasks().len(), 1);
    assert!(!c.is_exit());
    assert_eq!(c.submit("Bye"), GOODBYE);
    assert!(c.is_exit());
}

#[test]
fn test_handle_separates_failures() {
    let (mut c, _store) = session();
    assert_eq!(c.handle("mark 1"), Err(HuhhhError::IndexOutOfBounds { size: 0 }));
    assert!(c.handle("list").is_ok());
}

// --- STORAGE FAILURES ---
#[derive(Default)]
struct BrokenDisk;

impl LineStore for BrokenDisk {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn write_lines(&mut self, _lines: &[String]) -> Result<()> {
        Err(HuhhhError::StorageWrite("disk full".to_string()))
    }

    fn location(&self) -> String {
        "broken".to_string()
    }
}

#[test]
fn test_failed_save_keeps_mutation_and_reports() {
    let mut c = TaskController::new(Storage::new(BrokenDisk));
    assert_eq!(c.submit("todo a"), "Failed to write save file: disk full");
    assert_eq!(c.tasks().len(), 1);
    assert_eq!(c.submit("list"), "1. [T][ ] a");
}

#[test]
fn test_corrupted_store_starts_empty_with_warning() {
    let store = MemoryLineStore::with_lines(["T | 0 | fine", "garbage"]);
    let c = TaskController::new(Storage::new(store));

    assert!(c.tasks().is_empty());
    assert_eq!(
        c.load_warning(),
        Some(format!("{}\nCorrupted save entry: garbage", LOAD_FAILED).as_str())
    );
}
