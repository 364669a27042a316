// File: tests/ui_session.rs
use huhhh::TaskController;
use huhhh::controller::LOAD_FAILED;
use huhhh::storage::{MemoryLineStore, Storage};
use huhhh::ui::{DIVIDER, Ui, WELCOME, format_message};

fn replay(input: &str, store: MemoryLineStore, welcome: bool) -> (String, String, bool) {
    let mut controller = TaskController::new(Storage::new(store));
    let mut ui = Ui::new(input.as_bytes(), Vec::new(), Vec::new());
    ui.run(&mut controller, welcome).unwrap();
    let (_, out, err) = ui.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        controller.is_exit(),
    )
}

#[test]
fn test_full_session_transcript() {
    let (out, err, exited) = replay("todo read book\nlist\nbye\n", MemoryLineStore::new(), true);

    let expected = [
        format_message(WELCOME),
        format_message("Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 tasks in the list."),
        format_message("1. [T][ ] read book"),
        format_message("Bye. Hope to see you again soon!"),
    ]
    .concat();
    assert_eq!(out, expected);
    assert!(err.is_empty());
    assert!(exited);
}

#[test]
fn test_lines_after_bye_are_not_read() {
    let store = MemoryLineStore::new();
    let (out, _, _) = replay("bye\ntodo never\n", store.clone(), false);
    assert_eq!(out, format_message("Bye. Hope to see you again soon!"));
    assert!(store.lines().is_empty());
}

#[test]
fn test_end_of_input_says_goodbye() {
    let (out, _, exited) = replay("todo a", MemoryLineStore::new(), false);
    assert!(out.ends_with(&format_message("Bye. Hope to see you again soon!")));
    assert!(exited);
}

#[test]
fn test_errors_go_to_error_stream() {
    let (out, err, _) = replay("blah\n\nbye\n", MemoryLineStore::new(), false);

    assert_eq!(
        err,
        [
            format_message("I'm sorry, but I don't know what that means :("),
            format_message("Command cannot be empty."),
        ]
        .concat()
    );
    assert!(!out.contains("sorry"));
}

#[test]
fn test_load_warning_is_shown_first() {
    let store = MemoryLineStore::with_lines(["Z | 0 | what"]);
    let (_, err, _) = replay("bye\n", store, false);

    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines[0], DIVIDER);
    assert_eq!(lines[1], format!("     {}", LOAD_FAILED));
    assert_eq!(lines[2], "     Unknown task type in save: Z");
    assert_eq!(lines[3], DIVIDER);
}

#[test]
fn test_invalid_utf8_input_does_not_end_session() {
    let store = MemoryLineStore::new();
    let mut controller = TaskController::new(Storage::new(store.clone()));
    let mut ui = Ui::new(&b"todo caf\xe9\nlist\nbye\n"[..], Vec::new(), Vec::new());

    ui.run(&mut controller, false).unwrap();

    assert!(controller.is_exit());
    assert_eq!(store.lines(), vec!["T | 0 | caf\u{FFFD}"]);
    let (_, out, _) = ui.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("1. [T][ ] caf\u{FFFD}"));
    assert!(out.ends_with(&format_message("Bye. Hope to see you again soon!")));
}
