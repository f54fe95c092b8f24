//! Component state and form logic for the add-contact dialog.
//!
//! The dialog cycles through three states: closed, open and idle, and open
//! with a submission in flight. Every transition that matters is a method on
//! the state struct so it can be exercised without a browser; `update.rs`
//! only adds the side effects (the POST, toasts, cache invalidation).

use common::model::contact::ContactType;
use common::requests::{field_message, AddContactRequest, Validate};

/// Main state container for the `AddContactDialogComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct AddContactDialogComponent {
    /// Dialog visibility. Opening is a plain flag flip; closing always goes
    /// through [`Self::close`] so a reopened dialog never shows stale input.
    pub open: bool,

    /// True from a validated submit until its outcome message arrives.
    /// Gates further submits and disables the Save button.
    pub submitting: bool,

    /// The form being edited.
    pub form: ContactForm,
}

/// Editable form values plus the field errors of the last failed submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    /// Selected channel; `None` until the user picks one.
    pub contact_type: Option<ContactType>,

    /// Contact value exactly as typed.
    pub content: String,

    /// Field errors from the last submit attempt. Editing does not clear
    /// them; the next submit or a close does.
    pub errors: FormErrors,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub contact_type: Option<String>,
    pub content: Option<String>,
}

impl AddContactDialogComponent {
    pub fn new() -> Self {
        Self {
            open: false,
            submitting: false,
            form: ContactForm::default(),
        }
    }

    /// Closes and resets: type cleared, content emptied, errors dropped,
    /// any in-flight flag forgotten.
    pub fn close(&mut self) {
        self.open = false;
        self.reset_form();
    }

    pub fn reset_form(&mut self) {
        self.form = ContactForm::default();
        self.submitting = false;
    }

    /// Validates the form and, when it passes, moves into the submitting
    /// state and hands back the payload exactly once.
    ///
    /// Returns `None` while a submission is already in flight (a second
    /// submit is a no-op) and on validation failure, in which case the
    /// field errors are set and everything else stays as it was.
    pub fn take_submit_request(&mut self) -> Option<AddContactRequest> {
        if self.submitting {
            return None;
        }
        match self.form.validated_request() {
            Ok(request) => {
                self.form.errors = FormErrors::default();
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.form.errors = errors;
                None
            }
        }
    }

    /// Success path; the toast and cache invalidation live in `update.rs`.
    pub fn submit_succeeded(&mut self) {
        self.close();
    }

    /// Failure path: stay open and keep the entered values for correction.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}

impl ContactForm {
    /// Runs the shared request schema over the current values.
    pub fn validated_request(&self) -> Result<AddContactRequest, FormErrors> {
        let request = AddContactRequest {
            contact_type: self.contact_type,
            content: self.content.clone(),
        };
        match request.validate() {
            Ok(()) => Ok(request),
            Err(errors) => Err(FormErrors {
                contact_type: field_message(&errors, "contact_type"),
                content: field_message(&errors, "content"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_dialog() -> AddContactDialogComponent {
        let mut dialog = AddContactDialogComponent::new();
        dialog.open = true;
        dialog
    }

    #[test]
    fn submit_with_empty_form_sets_both_errors_and_yields_no_request() {
        let mut dialog = open_dialog();

        assert!(dialog.take_submit_request().is_none());
        assert!(!dialog.submitting);
        assert!(dialog.open);
        assert_eq!(
            dialog.form.errors.contact_type.as_deref(),
            Some("Contact type is required")
        );
        assert_eq!(
            dialog.form.errors.content.as_deref(),
            Some("Contact value is required")
        );
    }

    #[test]
    fn submit_with_type_but_no_content_flags_only_the_content() {
        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Telegram);

        assert!(dialog.take_submit_request().is_none());
        assert!(dialog.form.errors.contact_type.is_none());
        assert_eq!(
            dialog.form.errors.content.as_deref(),
            Some("Contact value is required")
        );
    }

    #[test]
    fn valid_submit_yields_the_payload_and_enters_the_submitting_state() {
        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Email);
        dialog.form.content = "person@example.com".to_string();

        let request = dialog.take_submit_request().expect("payload");
        assert_eq!(request.contact_type, Some(ContactType::Email));
        assert_eq!(request.content, "person@example.com");
        assert!(dialog.submitting);

        // A second submit while the first is in flight is a no-op.
        assert!(dialog.take_submit_request().is_none());
    }

    #[test]
    fn a_failed_submit_clears_errors_of_an_earlier_attempt_per_field() {
        let mut dialog = open_dialog();
        assert!(dialog.take_submit_request().is_none());
        assert!(dialog.form.errors.contact_type.is_some());

        dialog.form.contact_type = Some(ContactType::Phone);
        assert!(dialog.take_submit_request().is_none());
        assert!(dialog.form.errors.contact_type.is_none());
        assert!(dialog.form.errors.content.is_some());
    }

    #[test]
    fn success_closes_and_clears_the_form() {
        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Email);
        dialog.form.content = "person@example.com".to_string();
        dialog.take_submit_request().expect("payload");

        dialog.submit_succeeded();
        assert!(!dialog.open);
        assert!(!dialog.submitting);
        assert_eq!(dialog.form, ContactForm::default());
    }

    #[test]
    fn failure_keeps_the_dialog_open_with_entered_values() {
        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Phone);
        dialog.form.content = "+380501111111".to_string();
        dialog.take_submit_request().expect("payload");

        dialog.submit_failed();
        assert!(dialog.open);
        assert!(!dialog.submitting);
        assert_eq!(dialog.form.contact_type, Some(ContactType::Phone));
        assert_eq!(dialog.form.content, "+380501111111");

        // Ready for a retry.
        assert!(dialog.take_submit_request().is_some());
    }

    #[test]
    fn close_resets_partial_state_for_the_next_open() {
        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Viber);
        dialog.form.content = "half-typed".to_string();
        dialog.form.errors.content = Some("Contact value is required".to_string());

        dialog.close();
        assert!(!dialog.open);

        dialog.open = true;
        assert_eq!(dialog.form, ContactForm::default());
    }

    #[test]
    fn changing_the_type_never_touches_typed_content() {
        use crate::components::profile::contacts::helpers::placeholder;

        let mut dialog = open_dialog();
        dialog.form.contact_type = Some(ContactType::Phone);
        dialog.form.content = "still here".to_string();
        assert_eq!(placeholder(dialog.form.contact_type), "+380501234567");

        dialog.form.contact_type = Some(ContactType::Email);
        assert_eq!(placeholder(dialog.form.contact_type), "example@email.com");
        assert_eq!(dialog.form.content, "still here");
    }
}
