//! Pre-filled link to the external form.
//!
//! The form is never contacted from here: the link is handed to the user,
//! who later reports whether the form was actually sent.

use crate::errors::{AppError, AppResult};
use crate::models::entry_log::EntryLog;
use crate::models::pending::SubmissionForm;
use crate::utils::formatting::format_form_timestamp;
use chrono::FixedOffset;
use url::Url;

/// Where the form lives and which of its fields receive which value.
/// Field ids are opaque, taken verbatim from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub base_url: String,
    pub entry_field: String,
    pub exit_field: String,
    pub company_field: String,
    pub comment_field: String,
}

pub fn build_form_link(
    spec: &FormSpec,
    log: &EntryLog,
    form: &SubmissionForm,
    offset: &FixedOffset,
) -> AppResult<String> {
    let exit_time = log.exit_time.ok_or(AppError::NotExited)?;

    let entry = format_form_timestamp(log.entry_time, offset);
    let exit = format_form_timestamp(exit_time, offset);

    let params = [
        ("usp".to_string(), "pp_url"),
        (format!("entry.{}", spec.entry_field), entry.as_str()),
        (format!("entry.{}", spec.exit_field), exit.as_str()),
        (
            format!("entry.{}", spec.company_field),
            form.company_name.as_str(),
        ),
        (format!("entry.{}", spec.comment_field), form.comment.as_str()),
        ("embedded".to_string(), "true"),
    ];

    let url = Url::parse_with_params(&spec.base_url, &params).map_err(|e| {
        AppError::Config(format!("invalid form_base_url '{}': {}", spec.base_url, e))
    })?;

    Ok(url.into())
}
