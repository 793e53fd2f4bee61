use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    /// What could not be loaded, e.g. "Could not load records"
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline failure state for a section whose data could not be fetched
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}: {}", props.title, props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("User clicked retry button");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div class="alert alert-error my-4" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{&props.title}</span>
                <span class="text-sm">{&props.message}</span>
            </div>
            {retry}
        </div>
    }
}
