//! Contact form input buffer.
//!
//! Submission is a stub: nothing is sent or stored. A successful submit hands
//! back the fixed acknowledgement for the UI to show and clears the buffer.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Matches the `name` attribute of the form control.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|field| field.as_str() == s).ok_or(())
    }
}

/// Message shown after a submit; carries no payload beyond the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactBuffer {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactBuffer {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First empty field in form order, if any.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|f| self.field(*f).is_empty())
    }

    /// Accept the buffered message and clear every field.
    ///
    /// On error the buffer is left untouched so the visitor can fix it.
    pub fn submit(&mut self, acknowledgement: &str) -> Result<Acknowledgement, ContactError> {
        if let Some(field) = self.first_missing() {
            return Err(ContactError::MissingField(field));
        }
        log::debug!("contact form accepted ({} chars)", self.message.chars().count());
        *self = Self::default();
        Ok(Acknowledgement(acknowledgement.to_owned()))
    }
}
