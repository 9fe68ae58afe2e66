//! Inline error message shown above a form.

use yew::prelude::*;

/// Properties for ErrorBanner.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Renders nothing when there is no message.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    html! {
        <div class="error-banner" role="alert">
            <p>{ message }</p>
        </div>
    }
}
