use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use crate::settings;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle for raising toasts. Stable across renders, so it can be captured
/// by long-lived closures.
#[derive(Clone)]
pub struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<usize>>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl ToastContext {
    /// Shows an error toast that dismisses itself after the configured
    /// duration.
    pub fn show_error(&self, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(ToastAction::Add(Toast { id, message }));

        let dispatcher = self.dispatcher.clone();
        let duration = settings::get_settings().toast_duration_ms;
        gloo_timers::callback::Timeout::new(duration, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0usize));
    let context = ToastContext {
        dispatcher: list.dispatcher(),
        next_id,
    };

    html! {
        <ContextProvider<ToastContext> {context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = list.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class="alert alert-error shadow-lg">
                            <i class="fas fa-exclamation-circle"></i>
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
