//! Update function for the add-contact dialog.
//!
//! State transitions live on the state struct; this module adds the side
//! effects around them: the POST to the backend, the outcome toasts, and the
//! cache invalidation that tells the contacts card to refetch.

use gloo_net::http::Request;

use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::AddContactRequest;

use crate::components::profile::contacts::CONTACTS_QUERY_KEY;
use crate::toast::{toast_error, toast_success};

use super::messages::Msg;
use super::state::AddContactDialogComponent;

/// Central update function for the dialog.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (the submit outcome).
/// - Returns `true` to re-render the view.
pub fn update(
    component: &mut AddContactDialogComponent,
    ctx: &Context<AddContactDialogComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetOpen(open) => {
            if open {
                component.open = true;
            } else {
                component.close();
            }
            true
        }
        Msg::SelectType(contact_type) => {
            component.form.contact_type = Some(contact_type);
            true
        }
        Msg::UpdateContent(content) => {
            component.form.content = content;
            true
        }
        Msg::Submit => {
            if let Some(request) = component.take_submit_request() {
                submit_contact(ctx.link().clone(), request);
            }
            true
        }
        Msg::SubmitSucceeded => {
            component.submit_succeeded();
            toast_success("Contact added");
            ctx.props().client.invalidate(CONTACTS_QUERY_KEY);
            true
        }
        Msg::SubmitFailed(message) => {
            component.submit_failed();
            toast_error(&message.unwrap_or_else(|| "An error occurred".to_string()));
            true
        }
    }
}

/// Posts the payload and reports the outcome back through the scope.
///
/// A non-200 response surfaces its body as the failure message when it has
/// one; transport errors surface their display form. The request is neither
/// timed out nor cancelled and runs to settlement even if the dialog closes
/// in the meantime.
fn submit_contact(link: Scope<AddContactDialogComponent>, request: AddContactRequest) {
    spawn_local(async move {
        let response = Request::post("/api/contacts")
            .json(&request)
            .unwrap()
            .send()
            .await;

        match response {
            Ok(resp) if resp.status() == 200 => link.send_message(Msg::SubmitSucceeded),
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                let message = if body.trim().is_empty() { None } else { Some(body) };
                link.send_message(Msg::SubmitFailed(message));
            }
            Err(err) => link.send_message(Msg::SubmitFailed(Some(err.to_string()))),
        }
    });
}
