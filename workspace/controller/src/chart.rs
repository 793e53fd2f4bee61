//! Lifecycle of the single prediction chart.
//!
//! The drawing backend is abstracted behind [`ChartSurface`] so the
//! one-live-instance rule can be exercised without a browser.

use crate::error::{ControllerError, Result};
use tracing::trace;

/// Name of the only series on the prediction chart.
pub const SERIES_LABEL: &str = "Predicted Quantity";

/// Data of a vertical bar chart, one bar per label.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarChart {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(ControllerError::ChartShape {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn series_label(&self) -> &'static str {
        SERIES_LABEL
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A place charts can be drawn on.
pub trait ChartSurface {
    /// Handle to one drawn chart.
    type Instance;

    fn create(&mut self, chart: &BarChart) -> Self::Instance;

    fn destroy(&mut self, instance: Self::Instance);
}

/// Owns at most one live chart on its surface.
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    live: Option<S::Instance>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// Replaces the live chart. The previous instance is destroyed before the
    /// new one is created.
    pub fn render(&mut self, chart: &BarChart) {
        if let Some(previous) = self.live.take() {
            trace!("Destroying previous chart");
            self.surface.destroy(previous);
        }
        trace!(bars = chart.len(), "Creating chart");
        self.live = Some(self.surface.create(chart));
    }

    /// Builds and renders a chart from parallel label and value sequences.
    /// Mismatched lengths leave the live chart untouched.
    pub fn render_series(&mut self, labels: Vec<String>, values: Vec<f64>) -> Result<()> {
        let chart = BarChart::new(labels, values)?;
        self.render(&chart);
        Ok(())
    }

    pub fn has_live_chart(&self) -> bool {
        self.live.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
