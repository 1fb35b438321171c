//! Key-driven editing sessions checked through the public API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pixelfield::app::command_for_key;
use pixelfield::editor::{Cursor, EditorState, PaintColor, RunDirection};
use pixelfield::grid::{Cell, PixelGrid};

fn editor(width: usize, height: usize) -> EditorState {
    EditorState::new(PixelGrid::new(width, height).unwrap())
}

/// Feed a string of keys to the editor, one character per key.
fn type_keys(state: &mut EditorState, keys: &str) {
    for c in keys.chars() {
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        if let Some(command) = command_for_key(event) {
            state.apply(command);
        }
    }
}

fn press(state: &mut EditorState, code: KeyCode) {
    if let Some(command) = command_for_key(KeyEvent::new(code, KeyModifiers::NONE)) {
        state.apply(command);
    }
}

fn render_rows(grid: &PixelGrid) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Black => '#',
                    Cell::White => '.',
                    Cell::Unset => '?',
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_alternating_runs_fill_a_row() {
    let mut state = editor(6, 2);
    type_keys(&mut state, "231");
    assert_eq!(render_rows(state.grid()), vec!["##...#", "??????"]);
    assert_eq!(state.color(), PaintColor::White);
}

#[test]
fn test_full_fill_snakes_down_the_grid() {
    let mut state = editor(3, 3);
    type_keys(&mut state, "9");
    assert_eq!(render_rows(state.grid()), vec!["###", "###", "###"]);
    assert_eq!(state.cursor(), Cursor::at(2, 2));
    assert_eq!(state.color(), PaintColor::White);
}

#[test]
fn test_run_turns_at_row_end() {
    let mut state = editor(4, 3);
    type_keys(&mut state, "6");
    // Four cells rightward, then the run drops a row and heads back
    assert_eq!(render_rows(state.grid()), vec!["####", "??##", "????"]);
    assert_eq!(state.direction(), RunDirection::Leftward);
    assert_eq!(state.cursor(), Cursor::at(1, 1));
}

#[test]
fn test_reverse_then_run_paints_leftward() {
    let mut state = editor(5, 1);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    type_keys(&mut state, "r3");
    assert_eq!(render_rows(state.grid()), vec!["?###?"]);
    assert_eq!(state.cursor(), Cursor::at(0, 0));
}

#[test]
fn test_set_and_clear_keys() {
    let mut state = editor(3, 1);
    type_keys(&mut state, "t");
    press(&mut state, KeyCode::Right);
    type_keys(&mut state, "F");
    press(&mut state, KeyCode::Right);
    type_keys(&mut state, "T");
    press(&mut state, KeyCode::Backspace);
    assert_eq!(render_rows(state.grid()), vec!["#.?"]);
    // Direct sets never touch the paint color
    assert_eq!(state.color(), PaintColor::Black);
}

#[test]
fn test_exchange_color_swaps_next_run() {
    let mut state = editor(4, 1);
    type_keys(&mut state, "x2");
    assert_eq!(render_rows(state.grid()), vec!["..??"]);
    assert_eq!(state.color(), PaintColor::Black);
}

#[test]
fn test_home_restores_start_position() {
    let mut state = editor(3, 3);
    type_keys(&mut state, "5r");
    press(&mut state, KeyCode::Home);
    assert_eq!(state.cursor(), Cursor::at(0, 0));
    assert_eq!(state.direction(), RunDirection::Rightward);
}

#[test]
fn test_cursor_stays_inside_grid() {
    let mut state = editor(2, 2);
    for code in [KeyCode::Up, KeyCode::Left, KeyCode::Up] {
        press(&mut state, code);
    }
    assert_eq!(state.cursor(), Cursor::at(0, 0));
    for code in [KeyCode::Down, KeyCode::Down, KeyCode::Right, KeyCode::Right] {
        press(&mut state, code);
    }
    assert_eq!(state.cursor(), Cursor::at(1, 1));
}

#[test]
fn test_unmapped_keys_change_nothing() {
    let mut state = editor(3, 3);
    let before = state.clone();
    type_keys(&mut state, "zq!? ");
    assert_eq!(state, before);
}
