use controller::{BarChart, ChartSurface};
use plotly::common::{Marker, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// DOM id of the element the prediction chart is drawn into.
pub const CHART_ELEMENT_ID: &str = "prediction-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

/// Draws bar charts with Plotly into a fixed element.
pub struct PlotlySurface {
    element_id: String,
}

impl PlotlySurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl ChartSurface for PlotlySurface {
    /// Plotly keeps its chart state on the element, so the id is the handle.
    type Instance = String;

    fn create(&mut self, chart: &BarChart) -> String {
        let trace = Bar::new(chart.labels().to_vec(), chart.values().to_vec())
            .name(chart.series_label())
            .marker(Marker::new().color("rgba(54,162,235,0.6)"));

        let layout = Layout::new()
            .x_axis(Axis::new().title(Title::with_text("Medicine")))
            .y_axis(Axis::new().title(Title::with_text(chart.series_label())));

        let config = serde_json::json!({"responsive": true, "displayModeBar": false});

        match (to_js(&trace), to_js(&layout), to_js(&config)) {
            (Ok(trace_js), Ok(layout_js), Ok(config_js)) => {
                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);
                log::debug!("Drawing prediction chart with {} bars", chart.len());
                new_plot(&self.element_id, data_js.into(), layout_js, config_js);
            }
            _ => log::error!("Failed to serialize prediction chart"),
        }
        self.element_id.clone()
    }

    fn destroy(&mut self, instance: String) {
        log::trace!("Purging chart in #{}", instance);
        purge(&instance);
    }
}

// Plotly expects plain objects, so values go through JSON rather than
// serde-wasm-bindgen (which would produce `Map`s).
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Container the chart renderer draws into.
#[function_component(PredictionChart)]
pub fn prediction_chart() -> Html {
    html! {
        <div id={CHART_ELEMENT_ID} class="chart-container" style="width:100%; height:360px;"></div>
    }
}
