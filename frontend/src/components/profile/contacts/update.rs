//! Update function and fetching for the profile contacts card.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ContactsCardComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.

use gloo_net::http::Request;

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::contact::Contact;

use super::messages::Msg;
use super::state::ContactsCardComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (the fetch outcome).
/// - Returns `true` to re-render the view, `false` to short-circuit when only side effects occur.
pub fn update(
    component: &mut ContactsCardComponent,
    ctx: &Context<ContactsCardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(contacts) => {
            component.contacts = contacts;
            component.loading = false;
            component.error = None;
            true
        }
        Msg::LoadFailed(message) => {
            gloo_console::error!(format!("Failed to load contacts: {}", message));
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::Invalidated => {
            let version = ctx.props().client.version(super::CONTACTS_QUERY_KEY);
            gloo_console::log!(format!("Contacts invalidated (v{}), refetching", version));
            // Keep the stale list on screen while the refetch runs.
            fetch_contacts(ctx.link().clone());
            false
        }
    }
}

/// Fetches the contact list and reports the outcome back through the scope.
pub fn fetch_contacts(link: Scope<ContactsCardComponent>) {
    spawn_local(async move {
        let response = Request::get("/api/contacts").send().await;

        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<Vec<Contact>>().await {
                Ok(contacts) => link.send_message(Msg::Loaded(contacts)),
                Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
            },
            Ok(resp) => {
                link.send_message(Msg::LoadFailed(format!("Unexpected status {}", resp.status())))
            }
            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
        }
    });
}
