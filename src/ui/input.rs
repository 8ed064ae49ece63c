use crate::ui::app::App;
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_SCROLL: usize = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.press_submit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.refresh();
        return;
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.dispatch_form(FormIntent::Newline);
        }
        KeyCode::Enter => match app.form().focused {
            FormField::Title => app.dispatch_form(FormIntent::FocusNext),
            FormField::Body => {
                app.press_submit();
            }
        },
        KeyCode::Tab => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_form(FormIntent::Insert(ch));
        }
        _ => {}
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    app.dispatch_form(FormIntent::Paste(text));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
