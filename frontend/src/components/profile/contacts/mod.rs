//! Profile contacts card: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ContactsCardProps`, `ContactsCardComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the contact list; stay subscribed to the
//!   "contacts" query key so any invalidation triggers a refetch.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ContactsCardProps;
pub use state::ContactsCardComponent;

/// Query key under which the contact list is cached and invalidated.
pub const CONTACTS_QUERY_KEY: &str = "contacts";

impl Component for ContactsCardComponent {
    type Message = Msg;
    type Properties = ContactsCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = ctx.props().client.subscribe(
            CONTACTS_QUERY_KEY,
            ctx.link().callback(|_version: u64| Msg::Invalidated),
        );
        ContactsCardComponent::new(subscription)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::fetch_contacts(ctx.link().clone());
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        if let Some(subscription) = self.subscription.take() {
            ctx.props().client.unsubscribe(subscription);
        }
    }
}
