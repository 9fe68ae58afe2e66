//! Label/value pair.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(InfoField)]
pub fn info_field(props: &InfoFieldProps) -> Html {
    html! {
        <div class="info-field">
            <p class="info-label">{ &props.label }</p>
            <p class="info-value">{ &props.value }</p>
        </div>
    }
}
