use super::entry_log::EntryLog;
use serde::{Deserialize, Serialize};

/// Free-text fields collected on exit and forwarded to the external form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub comment: String,
}

/// A recorded exit waiting for the user to confirm the form hand-off.
///
/// `link` is `None` until the user asks for the form link; after that the
/// record waits for an explicit "submitted" or "abandoned" acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSubmission {
    pub log: EntryLog,
    #[serde(default)]
    pub form: SubmissionForm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl PendingSubmission {
    pub fn new(log: EntryLog, form: SubmissionForm) -> Self {
        Self {
            log,
            form,
            link: None,
        }
    }

    pub fn with_link(&self, link: String) -> Self {
        Self {
            link: Some(link),
            ..self.clone()
        }
    }

    pub fn link_built(&self) -> bool {
        self.link.is_some()
    }
}
