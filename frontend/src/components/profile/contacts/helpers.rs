//! Pure lookup utilities for contact types.
//!
//! Placeholders and icons are total over [`ContactType`]: every variant has
//! an explicit match arm, so extending the enumeration without extending
//! these lookups fails to compile instead of falling through to a default at
//! runtime. A separate fallback string exists only for the state where no
//! type has been selected yet.

use common::model::contact::ContactType;

/// Hint shown while no contact type has been selected.
const NO_TYPE_PLACEHOLDER: &str = "Enter contact value";

/// Example text for the content input, matched to the selected type.
///
/// The strings are display-only hints; nothing validates against them.
pub fn placeholder(contact_type: Option<ContactType>) -> &'static str {
    match contact_type {
        None => NO_TYPE_PLACEHOLDER,
        Some(ContactType::Phone) => "+380501234567",
        Some(ContactType::Email) => "example@email.com",
        Some(ContactType::Viber) => "+380501234567",
        Some(ContactType::Telegram) => "@username",
        Some(ContactType::Whatsapp) => "+380501234567",
        Some(ContactType::Facebook) => "username or link",
        Some(ContactType::Other) => NO_TYPE_PLACEHOLDER,
    }
}

/// Material Icons ligature shown next to a contact method.
pub fn contact_icon(contact_type: ContactType) -> &'static str {
    match contact_type {
        ContactType::Phone => "phone",
        ContactType::Email => "mail",
        ContactType::Viber => "chat",
        ContactType::Telegram => "send",
        ContactType::Whatsapp => "chat_bubble",
        ContactType::Facebook => "facebook",
        ContactType::Other => "public",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_every_type() {
        assert_eq!(placeholder(Some(ContactType::Phone)), "+380501234567");
        assert_eq!(placeholder(Some(ContactType::Email)), "example@email.com");
        assert_eq!(placeholder(Some(ContactType::Viber)), "+380501234567");
        assert_eq!(placeholder(Some(ContactType::Telegram)), "@username");
        assert_eq!(placeholder(Some(ContactType::Whatsapp)), "+380501234567");
        assert_eq!(placeholder(Some(ContactType::Facebook)), "username or link");
        assert_eq!(placeholder(Some(ContactType::Other)), "Enter contact value");
    }

    #[test]
    fn placeholder_falls_back_without_a_type() {
        assert_eq!(placeholder(None), "Enter contact value");
    }

    #[test]
    fn every_type_has_an_icon() {
        for contact_type in ContactType::variants() {
            assert!(!contact_icon(*contact_type).is_empty());
        }
    }

    #[test]
    fn icons_are_material_ligature_names() {
        assert_eq!(contact_icon(ContactType::Phone), "phone");
        assert_eq!(contact_icon(ContactType::Telegram), "send");
        assert_eq!(contact_icon(ContactType::Other), "public");
    }
}
