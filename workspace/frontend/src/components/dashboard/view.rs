use yew::prelude::*;

use crate::components::executive::ExecutivePanel;
use crate::components::forecast::ForecastPanel;
use crate::components::health::HealthGauge;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="min-h-screen bg-slate-950 text-white p-8 space-y-10">
            <h1 class="text-3xl font-bold tracking-tight">{"SELF-EVOLVING SOFTWARE"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <HealthGauge />
                <ExecutivePanel />
            </div>
            <ForecastPanel />
        </div>
    }
}
