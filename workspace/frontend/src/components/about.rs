use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-3xl mb-6">{"About MedForecast"}</h2>
                <div class="prose max-w-none">
                    <p class="text-lg mb-4">
                        {"MedForecast estimates how much of each medicine will be needed in a season, "}
                        {"based on the dispensing records uploaded to the server."}
                    </p>
                    <h3 class="text-xl font-semibold mb-3">{"Features"}</h3>
                    <ul class="list-disc list-inside space-y-2">
                        <li>{"CSV import with per-row error reporting"}</li>
                        <li>{"Paginated record browsing"}</li>
                        <li>{"Seasonal demand prediction with reorder suggestions"}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
