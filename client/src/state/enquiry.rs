//! Enquiry form model for the plot detail dialog.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use crate::net::types::EnquiryRequest;

/// Raw form inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnquiryError {
    #[error("please enter a name")]
    MissingName,
    #[error("please enter a phone number with at least 7 digits")]
    InvalidPhone,
    #[error("please enter a valid email address")]
    InvalidEmail,
}

impl EnquiryForm {
    /// Validate and build the request body for `plot_no` in `venture_id`.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn to_request(&self, venture_id: &str, plot_no: &str) -> Result<EnquiryRequest, EnquiryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EnquiryError::MissingName);
        }
        let phone = self.phone.trim();
        if !valid_phone(phone) {
            return Err(EnquiryError::InvalidPhone);
        }
        let email = non_blank(&self.email);
        if email.as_deref().is_some_and(|e| !valid_email(e)) {
            return Err(EnquiryError::InvalidEmail);
        }
        Ok(EnquiryRequest {
            venture_id: venture_id.to_owned(),
            plot_no: plot_no.to_owned(),
            name: name.to_owned(),
            phone: phone.to_owned(),
            email,
            message: non_blank(&self.message),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Digits plus common separators, with at least 7 digits.
fn valid_phone(phone: &str) -> bool {
    let allowed = phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    allowed && phone.chars().filter(char::is_ascii_digit).count() >= 7
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
