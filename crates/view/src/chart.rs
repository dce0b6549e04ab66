//! Chart adapter and the chart's initial configuration.

use serde::Serialize;

use crate::error::ViewError;
use crate::host::ChartHost;

/// Month labels with one ozone value per label, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Pairs labels with values positionally.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SeriesLengthMismatch`] when the lengths differ.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, ViewError> {
        if labels.len() != values.len() {
            return Err(ViewError::SeriesLengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    /// Returns the labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Replaces the chart's labels and its single dataset, then redraws once.
pub fn apply_series<C: ChartHost + ?Sized>(chart: &mut C, series: &ChartSeries) {
    chart.set_labels(series.labels.clone());
    chart.set_dataset(0, series.values.clone());
    chart.update();
}

/// Initial line-chart configuration, serialised in the chart library's
/// option format.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    label: String,
    data: Vec<f64>,
    border_color: String,
    fill: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ChartOptions {
    responsive: bool,
    scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
struct Scales {
    x: Axis,
    y: Axis,
}

#[derive(Debug, Clone, Serialize)]
struct Axis {
    title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
struct AxisTitle {
    display: bool,
    text: String,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset {
                    label: "Ozone concentrations".to_string(),
                    data: Vec::new(),
                    border_color: "rgba(75, 192, 192, 1)".to_string(),
                    fill: false,
                }],
            },
            options: ChartOptions {
                responsive: true,
                scales: Scales {
                    x: Axis {
                        title: AxisTitle {
                            display: true,
                            text: "Month".to_string(),
                        },
                        min: None,
                    },
                    y: Axis {
                        title: AxisTitle {
                            display: true,
                            text: "Ozone Levels(ug/m³)".to_string(),
                        },
                        min: Some(0.0),
                    },
                },
            },
        }
    }
}

impl ChartSpec {
    /// Set the dataset legend label.
    pub fn with_dataset_label(mut self, label: impl Into<String>) -> Self {
        self.data.datasets[0].label = label.into();
        self
    }

    /// Set the y-axis title.
    pub fn with_y_title(mut self, text: impl Into<String>) -> Self {
        self.options.scales.y.title.text = text.into();
        self
    }

    /// JSON form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
