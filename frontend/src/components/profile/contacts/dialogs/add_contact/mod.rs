//! Add-contact dialog: trigger button plus the modal form for attaching a
//! new contact method to the profile.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AddContactProps`, `AddContactDialogComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Keep everything stateful in `state.rs` so the open/submit/reset cycle
//!   can be exercised without a browser.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddContactProps;
pub use state::AddContactDialogComponent;

impl Component for AddContactDialogComponent {
    type Message = Msg;
    type Properties = AddContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddContactDialogComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
