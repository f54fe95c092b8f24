//! Defines the properties for the `AddContactDialogComponent`.

use crate::query::QueryClient;
use yew::prelude::*;

/// Properties for the `AddContactDialogComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct AddContactProps {
    /// Cache handle used to invalidate the "contacts" collection after a
    /// successful submit. Injected by the parent so the dialog never owns
    /// the cache.
    pub client: QueryClient,
}
