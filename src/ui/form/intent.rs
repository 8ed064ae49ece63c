use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Append a typed character to the focused field.
    Insert(char),
    /// Append pasted text; line breaks are flattened in the title.
    Paste(String),
    Backspace,
    /// Line break in the body. Ignored while the title is focused.
    Newline,
    FocusNext,
    FocusPrev,
    /// Empty both fields. Focus is kept.
    Clear,
}

impl Intent for FormIntent {}
