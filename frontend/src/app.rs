use crate::components::profile::contacts::ContactsCardComponent;
use crate::query::QueryClient;
use yew::{html, Component, Context, Html};

pub struct App {
    client: QueryClient,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: QueryClient::new(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <h1 class="page-title">{"My Profile"}</h1>
                <ContactsCardComponent client={self.client.clone()} />
            </div>
        }
    }
}
