use startup_stories_shared::auth::AuthUser;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Node, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::auth_context::AuthContext;

/// Signed-in user, if any. Re-renders the caller when the session changes.
#[hook]
pub fn use_current_user() -> Option<AuthUser> {
    let auth = use_context::<AuthContext>();
    auth.as_ref().and_then(|auth| auth.user().cloned())
}

/// Report every `mousedown` on the document, flagged with whether it landed
/// inside the element behind `node_ref`.
///
/// The listener is registered once; `on_pointer_down` must stay valid for the
/// component's lifetime (a reducer dispatcher is).
#[hook]
pub fn use_pointer_down(node_ref: NodeRef, on_pointer_down: Callback<bool>) {
    use_effect_with((), move |_| {
        let document = web_sys::window().and_then(|win| win.document());

        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = match (node_ref.cast::<Node>(), target) {
                (Some(host), Some(target)) => host.contains(Some(&target)),
                _ => false,
            };
            on_pointer_down.emit(inside);
        }) as Box<dyn Fn(web_sys::MouseEvent)>);

        if let Some(document) = document.as_ref() {
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(document) = document {
                let _ = document.remove_event_listener_with_callback(
                    "mousedown",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
