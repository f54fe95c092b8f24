//! Transient toast notifications.
//!
//! A DOM-level helper rather than a component: it appends a styled `div` to
//! the document body and removes it again after a few seconds, so it can be
//! fired from any update function without threading state around.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

/// Confirmation toast on a green background.
pub fn toast_success(message: &str) {
    show_toast(message, "#2e7d32");
}

/// Failure toast on a red background.
pub fn toast_error(message: &str) {
    show_toast(message, "#c62828");
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The message is set as text content, never as markup, since failure toasts
/// can carry server-provided strings.
fn show_toast(message: &str, background: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
