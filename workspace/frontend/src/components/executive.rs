use ::common::ExecutiveResponse;
use yew::prelude::*;

use crate::api_client::executive::get_executive;
use crate::common::fetch_hook::use_polling_fetch;
use crate::common::fetch_render::FetchRender;
use crate::settings;

pub const NO_SUMMARY: &str = "No summary available.";

#[function_component(ExecutivePanel)]
pub fn executive_panel() -> Html {
    let interval = settings::get_settings().poll_interval_ms;
    let (fetch_state, refetch) = use_polling_fetch(get_executive, interval);

    let render = Callback::from(|executive: ExecutiveResponse| {
        let summary = executive
            .summary
            .filter(|summary| !summary.trim().is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_string());
        html! {
            <p class="text-gray-300 leading-relaxed">{summary}</p>
        }
    });

    html! {
        <div class="bg-slate-900 p-8 rounded-2xl border border-slate-800">
            <h2 class="text-lg text-gray-400 mb-6">{"Executive Summary"}</h2>
            <FetchRender<ExecutiveResponse>
                state={(*fetch_state).clone()}
                render={render}
                loading_label="Loading summary..."
                on_retry={Some(refetch)}
            />
        </div>
    }
}
