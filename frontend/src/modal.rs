use web_sys::MouseEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

/// Dimmed backdrop with a centered panel. Visibility is owned by the parent
/// through `open`; the modal itself never flips it. A backdrop click asks the
/// parent to close via `on_request_close`, clicks inside the panel stay
/// inside. While closed, nothing is mounted.
pub struct Modal;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_request_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return Html::default();
        }

        let on_backdrop_click = {
            let on_request_close = props.on_request_close.clone();
            Callback::from(move |_: MouseEvent| on_request_close.emit(()))
        };
        let on_panel_click = Callback::from(|event: MouseEvent| event.stop_propagation());

        html! {
            <div class="modal-backdrop" onclick={on_backdrop_click}>
                <div class="modal-panel" onclick={on_panel_click}>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
