//! Contact form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is fully controlled: inputs render from this model and write
//! back through `update_field`. Submitting never leaves the page; it hands
//! back an acknowledgement and clears every field.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Message shown after a submission.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

/// Editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Fields in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// `type` attribute of the `<input>`, or `None` for the textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }
}

/// Current values of the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn update_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Accept the current values and reset the form.
    ///
    /// Returns the acknowledgement to show the visitor. Nothing is sent.
    pub fn submit(&mut self) -> &'static str {
        *self = Self::default();
        ACKNOWLEDGEMENT
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}
