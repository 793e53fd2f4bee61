use controller::{PageNumber, PerPage};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: PageNumber,
    pub per_page: PerPage,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    /// Raw value of the page-size selector
    pub on_per_page_change: Callback<String>,
}

/// Previous/next controls with the current page indicator and page-size
/// selector. The listing has no known total, so "next" is always enabled.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let current = props.current_page;

    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_previous.emit(());
        })
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_next.emit(());
        })
    };

    let on_per_page = {
        let on_per_page_change = props.on_per_page_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_per_page_change.emit(select.value());
            }
        })
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            <button
                id="prevPage"
                class="btn btn-sm"
                disabled={current.previous().is_none()}
                onclick={on_previous}
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            <span class="px-2">
                {"Page "}<span id="pageNum" class="font-semibold">{current.to_string()}</span>
            </span>

            <button id="nextPage" class="btn btn-sm" onclick={on_next}>
                <i class="fas fa-chevron-right"></i>
            </button>

            <label class="ml-4 text-sm text-base-content/70" for="perPageSelect">{"Rows per page"}</label>
            <select id="perPageSelect" class="select select-sm select-bordered" onchange={on_per_page}>
                {for PerPage::options().map(|option| html! {
                    <option value={option.to_string()} selected={option == props.per_page}>
                        {option.to_string()}
                    </option>
                })}
            </select>
        </div>
    }
}
