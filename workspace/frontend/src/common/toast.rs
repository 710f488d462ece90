use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Info,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.add_toast.emit((message, ToastType::Info));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        ToastList { toasts }.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let id_counter = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = list.dispatcher();
        use_callback((), move |(message, toast_type): (String, ToastType), _| {
            let id = {
                let mut counter = id_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            log::debug!("Showing toast {}: {}", id, message);
            dispatcher.dispatch(ToastAction::Push(Toast { id, message, toast_type }));

            // Auto-dismiss; the timer outlives this callback
            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            Timeout::new(duration, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = list.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
