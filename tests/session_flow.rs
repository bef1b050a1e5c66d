//! Full-session transcript tests: the whole game driven through in-memory
//! buffers, asserting on the exact line-oriented output.

use std::io::Cursor;

use gridwalk::config::GameConfig;
use gridwalk::game::GameSession;

/// Run one complete session over the given input and return its output.
fn run_session(input: &str) -> String {
    let mut output = Vec::new();
    let mut session = GameSession::new(
        Cursor::new(input.as_bytes().to_vec()),
        &mut output,
        GameConfig::default(),
    );
    session.run().expect("session run");
    String::from_utf8(output).expect("utf8 output")
}

const STARTUP: &str = "What is your name?\nHello, Ada, welcome to the game!\nUse commands to play\n";

#[test]
fn name_greeting_and_farewell() {
    let output = run_session("Ada\nquit\n");
    assert_eq!(output, format!("{}Bye bye Ada!\n", STARTUP));
}

#[test]
fn help_lists_the_commands() {
    let output = run_session("Ada\nhelp\nquit\n");
    let expected = format!(
        "{}\nValid commands:\n\n help\n show\n move <up|down|left|right>\n quit\n\nBye bye Ada!\n",
        STARTUP
    );
    assert_eq!(output, expected);
}

#[test]
fn show_renders_a_bracketed_grid() {
    let output = run_session("Ada\nshow\nquit\n");
    let body = output.strip_prefix(STARTUP).expect("startup banner");
    let lines: Vec<&str> = body.lines().collect();
    // blank line, 20 rows, blank line, farewell
    assert_eq!(lines.len(), 23);
    assert_eq!(lines[0], "");
    assert_eq!(lines[21], "");
    assert!(lines[1].starts_with("x -"));
    for row in &lines[1..=20] {
        assert_eq!(row.split(' ').count(), 20);
    }
    assert_eq!(lines[22], "Bye bye Ada!");
}

#[test]
fn move_up_from_origin_reports_invalid_direction() {
    let output = run_session("Ada\nmove up\nquit\n");
    assert_eq!(output, format!("{}Invalid direction\nBye bye Ada!\n", STARTUP));
}

#[test]
fn successful_move_is_silent_and_show_reveals_it() {
    let output = run_session("Ada\nmove down\nshow\nquit\n");
    let body = output.strip_prefix(STARTUP).expect("startup banner");
    let lines: Vec<&str> = body.lines().collect();
    // No output from the move itself: straight into the rendered grid.
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("- -"), "origin row is empty again");
    assert!(lines[2].starts_with("x -"), "player moved one row down");
}

#[test]
fn move_without_direction_reports_missing_direction() {
    let output = run_session("Ada\nmove\nquit\n");
    assert_eq!(output, format!("{}Missing direction\nBye bye Ada!\n", STARTUP));
}

#[test]
fn move_with_bad_direction_reports_unknown_direction() {
    let output = run_session("Ada\nmove sideways\nquit\n");
    assert_eq!(output, format!("{}Unknown direction\nBye bye Ada!\n", STARTUP));
}

#[test]
fn unrecognized_command_reports_unknown_command() {
    let output = run_session("Ada\nfly\nquit\n");
    assert_eq!(output, format!("{}Unknown command\nBye bye Ada!\n", STARTUP));
}

#[test]
fn blank_lines_are_ignored() {
    let output = run_session("Ada\n\n   \n\t\nquit\n");
    assert_eq!(output, format!("{}Bye bye Ada!\n", STARTUP));
}

#[test]
fn commands_are_case_insensitive() {
    let output = run_session("Ada\nQUIT\n");
    assert_eq!(output, format!("{}Bye bye Ada!\n", STARTUP));
}

#[test]
fn show_twice_is_idempotent() {
    let output = run_session("Ada\nshow\nshow\nquit\n");
    let body = output
        .strip_prefix(STARTUP)
        .expect("startup banner")
        .strip_suffix("Bye bye Ada!\n")
        .expect("farewell");
    let half = body.len() / 2;
    assert_eq!(&body[..half], &body[half..]);
}

#[test]
fn end_of_input_terminates_without_farewell() {
    let output = run_session("Ada\nshow\n");
    assert!(!output.contains("Bye bye"));
    assert!(output.ends_with("\n"));
}

#[test]
fn end_of_input_at_name_prompt_is_silent() {
    let output = run_session("");
    assert_eq!(output, "What is your name?\n");
}

#[test]
fn walking_the_bottom_edge_stays_in_bounds() {
    // 19 moves down reach the last row; the 20th is rejected.
    let mut input = String::from("Ada\n");
    for _ in 0..20 {
        input.push_str("move down\n");
    }
    input.push_str("quit\n");
    let output = run_session(&input);
    assert_eq!(output, format!("{}Invalid direction\nBye bye Ada!\n", STARTUP));
}

#[test]
fn smaller_configured_grid_is_respected() {
    let config = GameConfig {
        grid_size: 3,
        ..GameConfig::default()
    };
    let mut output = Vec::new();
    let input = "Ada\nmove down\nmove down\nmove down\nshow\nquit\n";
    GameSession::new(Cursor::new(input.as_bytes().to_vec()), &mut output, config)
        .run()
        .expect("session run");
    let output = String::from_utf8(output).expect("utf8 output");
    // Third move falls off the 3x3 grid.
    assert!(output.contains("Invalid direction"));
    let body = output.strip_prefix(STARTUP).expect("startup banner");
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "Invalid direction");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "- - -");
    assert_eq!(lines[3], "- - -");
    assert_eq!(lines[4], "x - -");
}
