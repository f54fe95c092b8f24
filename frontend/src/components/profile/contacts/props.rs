//! Defines the properties for the `ContactsCardComponent`.

use crate::query::QueryClient;
use yew::prelude::*;

/// Properties for the `ContactsCardComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ContactsCardProps {
    /// Shared cache handle. The card subscribes to the "contacts" key on it
    /// for refetches and hands the same handle to the add-contact dialog so
    /// a successful submit can invalidate the list.
    pub client: QueryClient,
}
