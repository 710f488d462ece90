use ::common::HealthResponse;
use chart::gauge::GaugeReading;
use yew::prelude::*;

use crate::api_client::health::get_health;
use crate::common::fetch_hook::use_polling_fetch;
use crate::common::fetch_render::FetchRender;
use crate::settings;

/// Current architecture health score with its band colour.
#[function_component(HealthGauge)]
pub fn health_gauge() -> Html {
    let interval = settings::get_settings().poll_interval_ms;
    let (fetch_state, refetch) = use_polling_fetch(get_health, interval);

    let render = Callback::from(|health: HealthResponse| {
        let reading = GaugeReading::from_response(&health);
        log::trace!("Health band: {:?}", reading.band);

        html! {
            <>
                <div class={classes!("text-6xl", "font-bold", reading.band.text_class())} title={reading.band.label()}>
                    {reading.score_display()}
                </div>
                <div class="mt-6 space-y-2 text-sm text-gray-400">
                    <div>{format!("Stability Index: {}", reading.stability)}</div>
                    <div>{format!("Risk Level: {}", reading.risk)}</div>
                    <div>{format!("Confidence: {}", reading.confidence)}</div>
                </div>
            </>
        }
    });

    html! {
        <div class="bg-slate-900 p-8 rounded-2xl border border-slate-800">
            <h2 class="text-lg text-gray-400 mb-6">{"Architecture Health"}</h2>
            <FetchRender<HealthResponse>
                state={(*fetch_state).clone()}
                render={render}
                loading_label="Loading health..."
                on_retry={Some(refetch)}
            />
        </div>
    }
}
