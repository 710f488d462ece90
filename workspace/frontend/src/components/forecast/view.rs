use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ::common::ForecastResponse;
use chart::{derive, ChartConfig, ForecastMetrics, TimelineView};
use yew::prelude::*;

use super::timeline::ForecastTimelineChart;
use super::stats::ForecastStats;
use crate::api_client::forecast::get_forecast;
use crate::common::fetch_hook::use_polling_fetch;
use crate::common::fetch_render::FetchRender;
use crate::settings;

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

/// Polls `/forecast/` and renders the forecast timeline.
#[function_component(ForecastPanel)]
pub fn forecast_panel() -> Html {
    let interval = settings::get_settings().poll_interval_ms;
    let (fetch_state, refetch) = use_polling_fetch(get_forecast, interval);

    let render = Callback::from(|response: ForecastResponse| {
        html! { <ForecastTimeline response={response} /> }
    });

    html! {
        <div class="relative bg-gradient-to-b from-neutral-900 to-neutral-950 border border-neutral-800 rounded-3xl p-8 space-y-8">
            <FetchRender<ForecastResponse>
                state={(*fetch_state).clone()}
                render={render}
                loading_label="Loading forecast..."
                on_retry={Some(refetch)}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ForecastTimelineProps {
    response: ForecastResponse,
}

#[function_component(ForecastTimeline)]
fn forecast_timeline(props: &ForecastTimelineProps) -> Html {
    let clip_id = use_memo((), |_| {
        format!("forecast-timeline-clip-{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
    });

    let view: Rc<TimelineView> = {
        let clip_id = clip_id.clone();
        // Keyed without the poll stamp so unchanged snapshots keep the hover state
        use_memo(props.response.chart_data(), move |response| {
            derive(response, &ChartConfig::default().with_clip_id(clip_id.as_str()))
        })
    };

    match &*view {
        TimelineView::Ready(model) => {
            let metrics = model.metrics().clone();
            html! {
                <>
                    <ForecastHeader metrics={metrics.clone()} />
                    <ForecastTimelineChart view={view.clone()} />
                    <ForecastStats {metrics} />
                </>
            }
        }
        other => html! {
            <>
                <PanelTitle />
                <div class="flex items-center justify-center h-[420px] text-sm text-neutral-500">
                    {other.message().unwrap_or_default()}
                </div>
            </>
        },
    }
}

#[function_component(PanelTitle)]
fn panel_title() -> Html {
    html! {
        <div>
            <h2 class="text-sm tracking-wide text-neutral-400 uppercase">{"Health Forecast"}</h2>
            <p class="text-xs text-neutral-500 mt-1">{"Predictive trajectory with uncertainty modeling"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ForecastHeaderProps {
    metrics: ForecastMetrics,
}

#[function_component(ForecastHeader)]
fn forecast_header(props: &ForecastHeaderProps) -> Html {
    let metrics = &props.metrics;

    html! {
        <>
            <div class="flex justify-between items-start">
                <PanelTitle />
                <div class="flex gap-3 text-xs">
                    <span
                        class="px-3 py-1 rounded-full border border-neutral-700 text-neutral-300"
                        title="Model confidence based on residual variance and forecast error."
                    >
                        {format!("Confidence {}", metrics.confidence_display())}
                    </span>
                    <span
                        class={classes!("px-3", "py-1", "rounded-full", "border", metrics.volatility_class.badge_class())}
                        title="Volatility measures how unstable recent architectural changes are."
                    >
                        {format!("Volatility {}", metrics.volatility.label())}
                    </span>
                </div>
            </div>
            <div class={classes!("flex", "items-center", "gap-4", "text-sm", metrics.trend.text_class())}>
                <span class="text-xl font-semibold">{metrics.trend.arrow()}</span>
                <span title="Difference between last recorded health and predicted next health.">
                    {format!("Δ Forecast vs Last: {}", metrics.delta_display())}
                </span>
            </div>
        </>
    }
}
