//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    /// Extra class for the value, e.g. a severity colour.
    #[prop_or_default]
    pub tone: Classes,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-label">{ &props.label }</div>
            <div class={classes!("stat-value", props.tone.clone())}>{ &props.value }</div>
        </div>
    }
}
