use controller::{Indicator, IndicatorLevel, UploadStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadStatusProps {
    pub status: UploadStatus,
}

fn alert_class(level: IndicatorLevel) -> &'static str {
    match level {
        IndicatorLevel::Info => "alert alert-info",
        IndicatorLevel::Success => "alert alert-success",
        IndicatorLevel::Warning => "alert alert-warning",
        IndicatorLevel::Failure => "alert alert-error",
    }
}

fn icon_class(level: IndicatorLevel) -> &'static str {
    match level {
        IndicatorLevel::Info => "loading loading-spinner loading-sm",
        IndicatorLevel::Success => "fas fa-check-circle",
        IndicatorLevel::Warning => "fas fa-exclamation-triangle",
        IndicatorLevel::Failure => "fas fa-times-circle",
    }
}

fn render_indicator(indicator: &Indicator) -> Html {
    let details = if indicator.details.is_empty() {
        html! {}
    } else {
        html! {
            <ul class="list-disc list-inside text-sm mt-1">
                {for indicator.details.iter().map(|line| html! { <li>{line}</li> })}
            </ul>
        }
    };

    html! {
        <div class={alert_class(indicator.level)} role="status">
            <span class={icon_class(indicator.level)}></span>
            <div class="flex flex-col">
                <span>{&indicator.message}</span>
                {details}
            </div>
        </div>
    }
}

/// Status lines under the upload form. Renders nothing while idle.
#[function_component(UploadStatusView)]
pub fn upload_status_view(props: &UploadStatusProps) -> Html {
    let indicators = props.status.indicators();
    log::trace!("Rendering {} upload status lines", indicators.len());

    html! {
        <div id="uploadStatus" class="flex flex-col gap-2 mt-4">
            {for indicators.iter().map(render_indicator)}
        </div>
    }
}
