//! Replay command: drive the view with scripted events against local data.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use ozone_features::read_feature_collection;
use ozone_filter::Expression;
use ozone_view::{OzoneView, Popup, ScreenPoint, ViewEvents};

use crate::cli::ReplayArgs;
use crate::config::{self, OzoneConfig};
use crate::convert;
use crate::headless::{HeadlessMap, RecordingChart};

/// A scripted event list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Whether the data layer is on the map before the first event.
    #[serde(default = "default_loaded")]
    pub loaded: bool,

    /// Events in order.
    #[serde(default, rename = "event")]
    pub events: Vec<Event>,
}

fn default_loaded() -> bool {
    true
}

/// One UI event.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    /// The data layer finishes loading.
    Load,
    /// The slider moves to `position`.
    Slider { position: i64 },
    /// The zone select changes.
    Zone { zone: String },
    /// A click at `(x, y)`.
    Click { x: f64, y: f64 },
    /// A pointer move to `(x, y)`.
    Hover { x: f64, y: f64 },
}

/// What one event did.
#[derive(Debug, Serialize)]
pub struct Step {
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<Popup>,
    pub chart: ChartState,
    pub rendered: usize,
}

/// What the chart shows after a step.
#[derive(Debug, Serialize)]
pub struct ChartState {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub redraws: usize,
}

impl ChartState {
    fn of(chart: &RecordingChart) -> Self {
        Self {
            labels: chart.labels().to_vec(),
            data: chart.data().to_vec(),
            redraws: chart.redraws(),
        }
    }
}

/// The full replay outcome.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub features: usize,
    pub skipped: usize,
    pub steps: Vec<Step>,
}

/// Reads an event script from disk.
pub fn read_script(path: &Path) -> Result<Script> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event script: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("failed to parse event script: {}", path.display()))
}

/// Runs `script` against the dataset at `data`.
pub fn replay(config: &OzoneConfig, data: &Path, script: &Script) -> Result<ReplayReport> {
    let load_cfg = convert::build_load_config(&config.dataset)?;
    let view_cfg = convert::build_view_config(config)?;
    let pick_radius = convert::build_pick_radius(&config.replay)?;

    let loaded = read_feature_collection(data, &load_cfg)
        .with_context(|| format!("failed to load features: {}", data.display()))?;
    let skipped = loaded.skipped();
    let features = loaded.into_features();
    let n_features = features.len();
    info!(n_features, skipped, "dataset loaded");

    let mut map = HeadlessMap::new(view_cfg.layer_id(), features, pick_radius);
    if script.loaded {
        map.add_layer();
    }
    let mut view = OzoneView::new(map, RecordingChart::default(), view_cfg);

    let mut steps = Vec::with_capacity(script.events.len());
    for (i, event) in script.events.iter().enumerate() {
        let _step = info_span!("step", index = i).entered();
        let mut error = None;
        match event {
            Event::Load => view.map_mut().add_layer(),
            Event::Slider { position } => {
                if let Err(e) = view.on_slider_change(*position) {
                    warn!(position, error = %e, "slider event rejected");
                    error = Some(e.to_string());
                }
            }
            Event::Zone { zone } => view.on_zone_change(zone),
            Event::Click { x, y } => {
                view.on_feature_click(ScreenPoint::new(*x, *y));
            }
            Event::Hover { x, y } => {
                view.on_feature_hover(ScreenPoint::new(*x, *y));
            }
        }
        let map = view.map();
        steps.push(Step {
            event: event.clone(),
            error,
            month_label: map.month_label().map(str::to_string),
            filter: map.filter().map(Expression::to_json),
            popup: map.popup().cloned(),
            chart: ChartState::of(view.chart()),
            rendered: map.rendered().count(),
        });
    }

    Ok(ReplayReport {
        features: n_features,
        skipped,
        steps,
    })
}

/// Replay a script and print or write the JSON report.
pub fn run(args: ReplayArgs) -> Result<()> {
    let _cmd = info_span!("replay").entered();
    let config = config::load(args.config.as_deref())?;
    let script = read_script(&args.script)?;
    info!(n_events = script.events.len(), "replaying events");

    let report = replay(&config, &args.data, &script)?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
