use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The channel through which a contact method is reached.
///
/// A closed set: the wire format, the `<select>` option values and the
/// database column all use the SCREAMING_SNAKE_CASE name ("PHONE",
/// "WHATSAPP", ...). The frontend placeholder and icon lookups match
/// exhaustively on this enum, so adding a variant without extending them is
/// a compile error rather than a runtime fallback.
#[derive(
    AsRefStr, Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize,
    VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    Phone,
    Email,
    Viber,
    Telegram,
    Whatsapp,
    Facebook,
    Other,
}

impl ContactType {
    /// All variants in declaration order, for selector options and totality
    /// checks.
    pub fn variants() -> &'static [ContactType] {
        <ContactType as VariantArray>::VARIANTS
    }

    /// Human-readable name shown in the type selector and in contact rows.
    pub fn label(&self) -> &'static str {
        match self {
            ContactType::Phone => "Phone",
            ContactType::Email => "Email",
            ContactType::Viber => "Viber",
            ContactType::Telegram => "Telegram",
            ContactType::Whatsapp => "WhatsApp",
            ContactType::Facebook => "Facebook",
            ContactType::Other => "Other",
        }
    }
}

/// A contact method attached to the user profile.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Contact {
    /// Unique identifier (uuid v4), assigned by the backend on creation.
    pub id: String,
    /// The channel this contact method belongs to.
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    /// The reachable value: a number, an address, a handle.
    pub content: String,
}
