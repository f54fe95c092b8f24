use crate::model::contact::ContactType;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

pub use validator::Validate;

/// Request payload for the add-contact endpoint.
///
/// This is the single validation schema for the form: the dialog runs it
/// before submitting and the backend runs it again on the incoming payload,
/// so both sides agree on what a well-formed contact method is and on the
/// error messages shown next to the fields.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AddContactRequest {
    /// The selected channel. `None` until the user picks one; validation
    /// rejects the unset state so it can never reach storage.
    #[serde(rename = "type")]
    #[validate(required(message = "Contact type is required"))]
    pub contact_type: Option<ContactType>,
    /// The contact value as typed. Must be non-empty; format expectations are
    /// hinted through placeholders, not enforced here.
    #[validate(length(min = 1, message = "Contact value is required"))]
    pub content: String,
}

/// First configured message for `field`, if that field failed validation.
pub fn field_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .get(field)
        .and_then(|list| list.first())
        .and_then(|error| error.message.as_ref())
        .map(|message| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_passes() {
        let request = AddContactRequest {
            contact_type: Some(ContactType::Email),
            content: "a@b.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_type_and_empty_content_fail_per_field() {
        let request = AddContactRequest {
            contact_type: None,
            content: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            field_message(&errors, "contact_type").as_deref(),
            Some("Contact type is required")
        );
        assert_eq!(
            field_message(&errors, "content").as_deref(),
            Some("Contact value is required")
        );
    }

    #[test]
    fn whitespace_content_counts_as_filled() {
        // The schema checks emptiness only; format stays advisory.
        let request = AddContactRequest {
            contact_type: Some(ContactType::Other),
            content: " ".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let request = AddContactRequest {
            contact_type: Some(ContactType::Email),
            content: "a@b.com".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "EMAIL");
        assert_eq!(json["content"], "a@b.com");
    }
}
