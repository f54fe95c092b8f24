//! View rendering for the add-contact dialog.
//!
//! Renders the full-width trigger button and, while open, the modal with a
//! header, the type selector, the content input (placeholder derived from
//! the selected type), and the Cancel/Save footer. Field errors appear under
//! their fields after a failed submit.

use std::str::FromStr;

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::contact::ContactType;

use super::super::super::helpers::placeholder;
use super::messages::Msg;
use super::state::AddContactDialogComponent;
use crate::modal::Modal;

/// Main view function: the trigger button plus the controlled modal.
pub fn view(component: &AddContactDialogComponent, ctx: &Context<AddContactDialogComponent>) -> Html {
    let link = ctx.link();

    html! {
        <>
            { build_trigger(link) }
            <Modal open={component.open} on_request_close={link.callback(|_| Msg::SetOpen(false))}>
                { build_dialog(component, link) }
            </Modal>
        </>
    }
}

/// Renders the full-width button with a Material icon that opens the dialog.
fn build_trigger(link: &Scope<AddContactDialogComponent>) -> Html {
    html! {
        <button class="btn btn-outline btn-block" onclick={link.callback(|_| Msg::SetOpen(true))}>
            <i class="material-icons">{"add_circle"}</i>
            <span class="icon-label">{"Add Contact"}</span>
        </button>
    }
}

fn build_dialog(component: &AddContactDialogComponent, link: &Scope<AddContactDialogComponent>) -> Html {
    let on_submit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <>
            <div class="dialog-header">
                <h2 class="dialog-title">{"Add New Contact"}</h2>
                <p class="dialog-description">{"Add a new contact method to your profile."}</p>
            </div>
            <form onsubmit={on_submit}>
                { build_type_field(component, link) }
                { build_content_field(component, link) }
                { build_footer(component, link) }
            </form>
        </>
    }
}

/// Contact type selector with its error line.
fn build_type_field(component: &AddContactDialogComponent, link: &Scope<AddContactDialogComponent>) -> Html {
    let on_change = link.batch_callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        ContactType::from_str(&select.value()).ok().map(Msg::SelectType)
    });

    html! {
        <div class="form-field">
            <label for="contact-type">{"Contact Type"}</label>
            <select id="contact-type" onchange={on_change}>
                <option value="" selected={component.form.contact_type.is_none()} disabled={true}>
                    {"Select contact type"}
                </option>
                {
                    ContactType::variants().iter().map(|contact_type| html! {
                        <option
                            value={contact_type.to_string()}
                            selected={component.form.contact_type == Some(*contact_type)}
                        >
                            { contact_type.label() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            { build_field_error(&component.form.errors.contact_type) }
        </div>
    }
}

/// Content input; its placeholder follows the selected type.
fn build_content_field(component: &AddContactDialogComponent, link: &Scope<AddContactDialogComponent>) -> Html {
    let on_input = link.callback(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::UpdateContent(input.value())
    });

    html! {
        <div class="form-field">
            <label for="contact-content">{"Contact"}</label>
            <input
                id="contact-content"
                type="text"
                value={component.form.content.clone()}
                placeholder={placeholder(component.form.contact_type)}
                oninput={on_input}
            />
            { build_field_error(&component.form.errors.content) }
        </div>
    }
}

fn build_footer(component: &AddContactDialogComponent, link: &Scope<AddContactDialogComponent>) -> Html {
    html! {
        <div class="dialog-footer">
            <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::SetOpen(false))}>
                {"Cancel"}
            </button>
            <button type="submit" class="btn btn-primary" disabled={component.submitting}>
                {"Save"}
            </button>
        </div>
    }
}

fn build_field_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
        None => html! {},
    }
}
