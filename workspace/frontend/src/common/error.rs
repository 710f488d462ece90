use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline error state of a dashboard panel.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying panel error: {}", props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_| {
            log::debug!("Retry requested from error panel");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-outline btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center py-8 gap-4 text-center">
            <div class="text-red-400">
                <i class="fas fa-plug-circle-xmark text-2xl"></i>
            </div>
            <div class="flex flex-col gap-1">
                <span class="font-semibold text-neutral-200">{"Analytics API unavailable"}</span>
                <span class="text-sm text-neutral-500">{&props.message}</span>
            </div>
            {retry}
        </div>
    }
}
