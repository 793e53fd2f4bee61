use controller::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current: Page,
    /// Receives the id of the page section to show
    pub on_navigate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let links = Page::ALL.into_iter().map(|page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page.id().to_string());
        });
        let class = if page == props.current { "active" } else { "" };
        html! {
            <li>
                <a href={format!("#{}", page.id())} data-page={page.id()} {class} {onclick}>
                    {page.title()}
                </a>
            </li>
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <span class="text-xl font-bold">{"MedForecast"}</span>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1 gap-1">
                    { for links }
                </ul>
            </div>
        </div>
    }
}
