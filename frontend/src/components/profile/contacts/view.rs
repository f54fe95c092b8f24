//! View rendering for the profile contacts card.
//!
//! Renders the card heading, then one of four bodies: a loading note, the
//! fetch error, an empty-state note, or the contact list. Each row shows the
//! type's Material icon, the stored value, and the type label. The
//! add-contact dialog (trigger button included) sits at the bottom of the
//! card.

use yew::prelude::*;

use common::model::contact::Contact;

use super::dialogs::add_contact::AddContactDialogComponent;
use super::helpers::contact_icon;
use super::state::ContactsCardComponent;

/// Main view function for the contacts card.
pub fn view(component: &ContactsCardComponent, ctx: &Context<ContactsCardComponent>) -> Html {
    html! {
        <section class="contacts-card">
            <h2 class="contacts-title">{"Contacts"}</h2>
            { build_body(component) }
            <AddContactDialogComponent client={ctx.props().client.clone()} />
        </section>
    }
}

fn build_body(component: &ContactsCardComponent) -> Html {
    if component.loading {
        html! { <p class="contacts-note">{"Loading contacts…"}</p> }
    } else if let Some(error) = &component.error {
        html! { <p class="contacts-note contacts-error">{ error.clone() }</p> }
    } else if component.contacts.is_empty() {
        html! { <p class="contacts-note">{"No contacts yet."}</p> }
    } else {
        html! {
            <ul class="contact-list">
                { component.contacts.iter().map(build_row).collect::<Html>() }
            </ul>
        }
    }
}

fn build_row(contact: &Contact) -> Html {
    html! {
        <li class="contact-row" key={contact.id.clone()}>
            <i class="material-icons contact-icon">{ contact_icon(contact.contact_type) }</i>
            <span class="contact-content">{ contact.content.clone() }</span>
            <span class="contact-type">{ contact.contact_type.label() }</span>
        </li>
    }
}
