use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPanelProps {
    /// Text under the spinner, e.g. "Loading forecast..."
    pub label: AttrValue,
}

/// Placeholder shown while a panel waits for its first response
#[function_component(LoadingPanel)]
pub fn loading_panel(props: &LoadingPanelProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center gap-3 py-12 text-gray-400" aria-busy="true">
            <span class="loading loading-spinner loading-lg"></span>
            <span class="text-sm">{props.label.clone()}</span>
        </div>
    }
}
