use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, PostFormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = PostFormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => match state.focused {
                FormField::Title if ch == '\n' => {}
                FormField::Title => state.title.push(ch),
                FormField::Body => state.body.push(ch),
            },
            FormIntent::Paste(text) => match state.focused {
                FormField::Title => {
                    let flattened = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
                    state.title.push_str(&flattened);
                }
                FormField::Body => state.body.push_str(&text.replace("\r\n", "\n")),
            },
            FormIntent::Backspace => {
                match state.focused {
                    FormField::Title => state.title.pop(),
                    FormField::Body => state.body.pop(),
                };
            }
            FormIntent::Newline => {
                if state.focused == FormField::Body {
                    state.body.push('\n');
                }
            }
            FormIntent::FocusNext | FormIntent::FocusPrev => {
                // Two fields: next and previous are the same move.
                state.focused = match state.focused {
                    FormField::Title => FormField::Body,
                    FormField::Body => FormField::Title,
                };
            }
            FormIntent::Clear => {
                state.title.clear();
                state.body.clear();
            }
        }
        state
    }
}
