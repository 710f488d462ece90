use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use gloo_timers::callback::Interval;
use crate::hooks::FetchState;
use crate::common::toast::ToastContext;

/// Fetches on mount, then again every `interval_ms` until unmounted.
///
/// Once data has arrived, later polls keep showing it instead of flashing a
/// spinner. A failure raises one toast; the next success raises another.
#[hook]
pub fn use_polling_fetch<T, F, Fut>(fetch_fn: F, interval_ms: u32) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let has_data = use_mut_ref(|| false);
    let failing = use_mut_ref(|| false);

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();
            let has_data = has_data.clone();
            let failing = failing.clone();

            if !*has_data.borrow() {
                fetch_state.set(FetchState::Loading);
            }

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => {
                        *has_data.borrow_mut() = true;
                        if failing.replace(false) {
                            if let Some(toast_ctx) = &toast_ctx {
                                toast_ctx.show_info("Connection to the analytics API restored".to_string());
                            }
                        }
                        fetch_state.set(FetchState::Success(data));
                    }
                    Err(err) => {
                        *has_data.borrow_mut() = false;
                        if !failing.replace(true) {
                            if let Some(toast_ctx) = &toast_ctx {
                                toast_ctx.show_error(err.clone());
                            }
                        }
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount and poll; the interval is dropped on unmount
    {
        let refetch = refetch.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            log::debug!("Polling every {} ms", interval_ms);
            refetch.emit(());
            let interval = Interval::new(*interval_ms, move || refetch.emit(()));
            move || drop(interval)
        });
    }

    (fetch_state, refetch)
}
