//! Seven-day attendance bar chart.

use yew::prelude::*;

/// Properties for TrendChart.
#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// One percentage per day, oldest first.
    pub values: Vec<u8>,
}

/// Vertical bars scaled to the percentage of each day.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    html! {
        <div class="trend-chart">
            { for props.values.iter().map(|value| {
                let height = (*value).min(100);
                html! {
                    <div class="trend-bar" title={format!("{height}%")}>
                        <div class="trend-bar-fill" style={format!("height: {height}%")} />
                    </div>
                }
            })}
        </div>
    }
}
