//! Loading spinner component.

use yew::prelude::*;

/// Properties for Spinner.
#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Render inside a button instead of centred on the page.
    #[prop_or_default]
    pub inline: bool,
}

/// Loading spinner component.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    if props.inline {
        return html! { <span class="spinner spinner-inline"></span> };
    }

    html! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}
