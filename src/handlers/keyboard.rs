//! Keyboard Input Handler
//!
//! Dialogs take every key while open; otherwise keys map to quote view actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quotetui::model::{Dialog, TransferAction};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    match &app.model.ui.dialog {
        Some(Dialog::AddQuote(_)) => handle_add_form_key(app, key),
        Some(Dialog::Path(_)) => handle_path_prompt_key(app, key),
        None => handle_quote_view_key(app, key),
    }
}

fn handle_quote_view_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('n') | KeyCode::Char(' ') => app.show_next_quote(),
        KeyCode::Right => app.next_filter(),
        KeyCode::Left => app.prev_filter(),
        KeyCode::Char('l') if vim_mode => app.next_filter(),
        KeyCode::Char('h') if vim_mode => app.prev_filter(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') => app.open_transfer_prompt(TransferAction::Export),
        KeyCode::Char('i') => app.open_transfer_prompt(TransferAction::Import),
        KeyCode::Char('s') => app.request_sync(),
        _ => {}
    }
}

fn handle_add_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.dialog = None;
            return;
        }
        KeyCode::Enter => {
            app.submit_add_form();
            return;
        }
        _ => {}
    }

    let Some(Dialog::AddQuote(form)) = &mut app.model.ui.dialog else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

fn handle_path_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.dialog = None;
            return;
        }
        KeyCode::Enter => {
            app.run_transfer();
            return;
        }
        _ => {}
    }

    let Some(Dialog::Path(prompt)) = &mut app.model.ui.dialog else {
        return;
    };
    match key.code {
        KeyCode::Backspace => {
            prompt.input.pop();
        }
        KeyCode::Char(c) => prompt.input.push(c),
        _ => {}
    }
}
