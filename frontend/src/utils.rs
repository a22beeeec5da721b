use web_sys::{console, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Blocking browser alert, used to report failed saves.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            console::error_1(&message.into());
        }
    }
}

/// Value of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
}

/// Value of the `<textarea>` that fired `event`.
pub fn textarea_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

/// Value of the `<select>` that fired `event`.
pub fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// `Callback` that writes an input's value into `state`.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(value) = input_value(&event) {
            state.set(value);
        }
    })
}

/// `Callback` that writes a textarea's value into `state`.
pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(value) = textarea_value(&event) {
            state.set(value);
        }
    })
}
