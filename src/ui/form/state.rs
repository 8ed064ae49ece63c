use crate::api::PostDraft;
use crate::mvi::UiState;

/// Form field that receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Body,
}

/// Screen-local state of the "new post" form. Never shared with the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFormState {
    pub title: String,
    pub body: String,
    pub focused: FormField,
}

impl UiState for PostFormState {}

impl PostFormState {
    /// Both fields contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }

    /// Builds the draft exactly as typed; trimming only gates submission.
    pub fn to_draft(&self, user_id: u64) -> PostDraft {
        PostDraft::new(self.title.clone(), self.body.clone(), user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, body: &str) -> PostFormState {
        PostFormState {
            title: title.to_string(),
            body: body.to_string(),
            focused: FormField::Title,
        }
    }

    #[test]
    fn whitespace_only_is_incomplete() {
        assert!(!form("", "").is_complete());
        assert!(!form("  ", "body").is_complete());
        assert!(!form("title", "\n\t ").is_complete());
        assert!(form("title", "body").is_complete());
    }

    #[test]
    fn draft_keeps_surrounding_whitespace() {
        let draft = form(" A ", "B\n").to_draft(1);
        assert_eq!(draft.title, " A ");
        assert_eq!(draft.body, "B\n");
        assert_eq!(draft.user_id, 1);
    }
}
