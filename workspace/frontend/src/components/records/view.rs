use controller::{FetchState, RecordsClient};
use yew::prelude::*;

use super::table::RecordsTable;
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::common::pagination::Pagination;

#[derive(Properties, PartialEq)]
pub struct RecordsProps {
    pub records: RecordsClient,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_per_page_change: Callback<String>,
    pub on_retry: Callback<()>,
}

#[function_component(Records)]
pub fn records(props: &RecordsProps) -> Html {
    let pagination = props.records.pagination();
    log::trace!("Records section rendering page {}", pagination.current_page());

    let body = match props.records.rows() {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={Some("Loading records...".to_string())} /> },
        FetchState::Error(error) => html! {
            <ErrorDisplay
                title="Could not load records"
                message={error.clone()}
                on_retry={Some(props.on_retry.clone())}
            />
        },
        FetchState::Success(records) => {
            if records.is_empty() {
                html! {
                    <>
                        <RecordsTable records={Vec::new()} />
                        <p class="text-center text-gray-500 py-4">{"No records on this page."}</p>
                    </>
                }
            } else {
                html! { <RecordsTable records={records.clone()} /> }
            }
        }
    };

    html! {
        <>
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Records"}</h2>
            </div>
            {body}
            <Pagination
                current_page={pagination.current_page()}
                per_page={pagination.per_page()}
                on_previous={props.on_previous.clone()}
                on_next={props.on_next.clone()}
                on_per_page_change={props.on_per_page_change.clone()}
            />
        </>
    }
}
