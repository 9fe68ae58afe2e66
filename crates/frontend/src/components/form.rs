//! Callback helpers shared by the auth forms.

use yew::prelude::*;

/// Keep a string state in sync with an `<input>`.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Fire `submit` when Enter is pressed.
pub fn on_enter(submit: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit.emit(());
        }
    })
}
