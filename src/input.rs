//! Key bindings for each screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppState, FetchJob};

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    Fetch(FetchJob),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Control {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Control::Quit;
    }

    match app.state {
        AppState::Setup => handle_setup_input(app, key.code),
        AppState::Loading { .. } => handle_loading_input(key.code),
        AppState::Quiz(_) => handle_quiz_input(app, key.code),
        AppState::Result(_) => handle_result_input(app, key.code),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Esc => return Control::Quit,
        KeyCode::Enter => {
            return match app.generate() {
                Some(job) => Control::Fetch(job),
                None => Control::Continue,
            };
        }
        _ => {}
    }

    let form = app.form_mut();
    match key {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Left => form.adjust(false),
        KeyCode::Right => form.adjust(true),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) if form.focus.is_text() => form.push_char(c),
        KeyCode::Char(' ') => form.adjust(true),
        _ => {}
    }
    Control::Continue
}

fn handle_loading_input(key: KeyCode) -> Control {
    match key {
        KeyCode::Esc => Control::Quit,
        _ => Control::Continue,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.answer_selected(),
        KeyCode::Char(c @ '1'..='4') => app.answer_option(c as usize - '1' as usize),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
        _ => {}
    }
    Control::Continue
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Control {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
        _ => {}
    }
    Control::Continue
}
