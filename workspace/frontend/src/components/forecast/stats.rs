use chart::ForecastMetrics;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastStatsProps {
    pub metrics: ForecastMetrics,
}

#[derive(Properties, PartialEq)]
struct StatTileProps {
    title: &'static str,
    hint: &'static str,
    value: String,
    #[prop_or_default]
    emphasis: bool,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    let value_class = if props.emphasis {
        "text-lg font-medium text-neutral-100 mt-1"
    } else {
        "text-neutral-100 mt-1"
    };

    html! {
        <div class="bg-neutral-900/60 border border-neutral-800 rounded-xl p-4" title={props.hint}>
            <div class="text-xs text-neutral-500">{props.title}</div>
            <div class={value_class}>{&props.value}</div>
        </div>
    }
}

/// Footer tiles of the forecast panel.
#[function_component(ForecastStats)]
pub fn forecast_stats(props: &ForecastStatsProps) -> Html {
    let metrics = &props.metrics;

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 text-sm">
            <StatTile
                title="Forecast"
                hint="Predicted next architecture health score."
                value={metrics.forecast_display()}
                emphasis=true
            />
            <StatTile
                title="Confidence Interval"
                hint="Lower and upper bounds within which the forecast is expected to fall."
                value={metrics.interval_display()}
            />
            <StatTile
                title="RMSE"
                hint="Root mean squared error of the forecast model."
                value={metrics.rmse_display()}
            />
            <StatTile
                title="Residual Variance"
                hint="Variance of forecast residuals, indicating uncertainty."
                value={metrics.residual_variance_display()}
            />
        </div>
    }
}
