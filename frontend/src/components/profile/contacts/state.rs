//! Component state for the profile contacts card.

use common::model::contact::Contact;

use crate::query::Subscription;

/// Main state container for the `ContactsCardComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ContactsCardComponent {
    /// Contact methods as last fetched, in server order.
    pub contacts: Vec<Contact>,

    /// True while the first fetch is in flight; a refetch after an
    /// invalidation keeps the previous list on screen instead.
    pub loading: bool,

    /// Message of the last failed fetch, shown in place of the list.
    pub error: Option<String>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// Registration on the "contacts" query key; released in `destroy`.
    pub subscription: Option<Subscription>,
}

impl ContactsCardComponent {
    pub fn new(subscription: Subscription) -> Self {
        Self {
            contacts: Vec::new(),
            loading: true,
            error: None,
            loaded: false,
            subscription: Some(subscription),
        }
    }
}
