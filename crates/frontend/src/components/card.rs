//! Titled dashboard card.

use yew::prelude::*;

/// Properties for Card.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Card with a heading and arbitrary content.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-header">
                <h2 class="card-title">{ &props.title }</h2>
            </div>
            { props.children.clone() }
        </div>
    }
}
