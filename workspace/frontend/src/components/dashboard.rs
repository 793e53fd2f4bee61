mod chart;
mod table;
mod view;

pub use chart::{PlotlySurface, PredictionChart, CHART_ELEMENT_ID};
pub use table::PredictionTable;
pub use view::Dashboard;
