use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::LoadingPanel;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub loading_label: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

// Callbacks are rebuilt on every render; only the data decides a redraw.
impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_label == other.loading_label
    }
}

/// Renders one polled panel: placeholder until the first response, the error
/// card on failure, otherwise `render` with the latest data.
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Loading => html! {
            <LoadingPanel label={props.loading_label.clone()} />
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
