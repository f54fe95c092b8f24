use crate::app::App;

mod app;
mod components;
mod modal;
mod query;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
