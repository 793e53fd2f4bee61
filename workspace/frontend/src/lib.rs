use yew::prelude::*;

mod components;
mod dispatcher;
pub mod api_client;
pub mod common;
pub mod settings;

use crate::common::toast::{ToastContext, ToastProvider};
use components::about::About;
use components::dashboard::{Dashboard, PlotlySurface, CHART_ELEMENT_ID};
use components::home::Home;
use components::layout::layout::Layout;
use components::records::Records;
use components::upload::Upload;
use controller::{AppController, ChartRenderer, Event, Page};
use dispatcher::Dispatcher;

/// Every section stays mounted so the chart container always exists; only
/// the visible one lacks the `hidden` class.
fn section_class(visible: Page, page: Page) -> &'static str {
    if visible == page {
        "page-section"
    } else {
        "page-section hidden"
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let controller = use_mut_ref(AppController::new);
    let chart = use_mut_ref(|| ChartRenderer::new(PlotlySurface::new(CHART_ELEMENT_ID)));
    let rerender = use_force_update();
    let toasts = use_context::<ToastContext>();
    if toasts.is_none() {
        log::warn!("No toast context available, errors will only be logged");
    }

    let dispatcher = Dispatcher::new(controller.clone(), chart, rerender, toasts);

    {
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            log::debug!("Shell mounted, starting controller");
            dispatcher.send(Event::Started);
            || ()
        });
    }

    let state = controller.borrow().state().clone();
    let visible = state.router().visible();
    log::trace!("Rendering shell with {:?} visible", visible);

    let on_navigate = dispatcher.callback(Event::Navigate);

    html! {
        <Layout current={visible} on_navigate={on_navigate.clone()}>
            <section id={Page::Home.id()} class={section_class(visible, Page::Home)}>
                <Home on_navigate={on_navigate.clone()} />
            </section>
            <section id={Page::Upload.id()} class={section_class(visible, Page::Upload)}>
                <Upload
                    upload={state.upload().clone()}
                    on_upload={dispatcher.callback(Event::UploadRequested)}
                />
            </section>
            <section id={Page::Dashboard.id()} class={section_class(visible, Page::Dashboard)}>
                <Dashboard
                    prediction={state.prediction().clone()}
                    on_predict={dispatcher.callback(Event::PredictRequested)}
                />
            </section>
            <section id={Page::Records.id()} class={section_class(visible, Page::Records)}>
                <Records
                    records={state.records().clone()}
                    on_previous={dispatcher.callback(|_: ()| Event::PreviousPage)}
                    on_next={dispatcher.callback(|_: ()| Event::NextPage)}
                    on_per_page_change={dispatcher.callback(Event::PerPageSelected)}
                    on_retry={dispatcher.callback(|_: ()| Event::RetryRecords)}
                />
            </section>
            <section id={Page::About.id()} class={section_class(visible, Page::About)}>
                <About />
            </section>
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Shell />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings first, the logger level comes from them
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== MedForecast Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
