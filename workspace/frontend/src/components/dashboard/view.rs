use controller::{FetchState, PredictionClient, ALL_SEASONS, SEASON_OPTIONS};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::chart::PredictionChart;
use super::table::PredictionTable;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub prediction: PredictionClient,
    /// Receives the selected season value
    pub on_predict: Callback<String>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let season = use_state(|| ALL_SEASONS.to_string());

    let on_season_change = {
        let season = season.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                log::trace!("Season selected: {}", select.value());
                season.set(select.value());
            }
        })
    };

    let on_predict_click = {
        let season = season.clone();
        let on_predict = props.on_predict.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_predict.emit((*season).clone());
        })
    };

    let on_retry = {
        let season = season.clone();
        let on_predict = props.on_predict.clone();
        Callback::from(move |_: ()| on_predict.emit((*season).clone()))
    };

    let status = match props.prediction.result() {
        FetchState::Loading => html! { <Loading text={Some("Calculating prediction...".to_string())} /> },
        FetchState::Error(error) => html! {
            <ErrorDisplay
                title="Could not load prediction"
                message={error.clone()}
                on_retry={Some(on_retry)}
            />
        },
        FetchState::NotStarted | FetchState::Success(_) => html! {},
    };

    html! {
        <>
            <div class="flex flex-wrap items-end gap-4 mb-4">
                <div class="form-control">
                    <label class="label" for="seasonSelect">
                        <span class="label-text">{"Season"}</span>
                    </label>
                    <select id="seasonSelect" class="select select-bordered" onchange={on_season_change}>
                        {for SEASON_OPTIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == season.as_str()}>{*label}</option>
                        })}
                    </select>
                </div>
                <button id="predictBtn" class="btn btn-primary" onclick={on_predict_click}>
                    <i class="fas fa-chart-bar"></i>
                    {" Predict"}
                </button>
            </div>
            {status}
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast by medicine"}</h2>
                        <PredictionTable
                            rows={props.prediction.rows()}
                            notes={props.prediction.notes().map(str::to_string)}
                        />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Predicted Quantity"}</h2>
                        <PredictionChart />
                    </div>
                </div>
            </div>
        </>
    }
}
