//! Error types for the site's state layer.
//!
//! Every failure here is absorbed at a component edge: storage problems fall
//! back to in-memory state, missing DOM targets become no-ops. Only
//! [`ContactError`] is ever shown to the visitor, as inline form feedback.

use thiserror::Error;

use crate::state::contact::ContactField;

/// Failure talking to the persisted preference store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference read failed: {0}")]
    Read(String),
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Reason a contact submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadlineError {
    #[error("headline needs at least one title")]
    NoTitles,
}

/// Failure decoding the inline site configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}
