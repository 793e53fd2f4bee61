use controller::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let on_start = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Upload.id().to_string());
        })
    };

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"MedForecast"}</h1>
                    <p class="py-6">
                        {"Upload pharmacy dispensing records, browse them page by page "}
                        {"and forecast next season's demand per medicine."}
                    </p>
                    <button id="startUpload" class="btn btn-primary" onclick={on_start}>
                        {"Start upload"}
                    </button>
                </div>
            </div>
        </div>
    }
}
