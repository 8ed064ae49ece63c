use serde::{Deserialize, Serialize};

/// A post as returned by the backend.
///
/// `id` is assigned by the server. The mock backend does not persist writes,
/// so ids echoed for created posts may repeat across submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Payload of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}
