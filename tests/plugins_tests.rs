use std::cell::RefCell;
use std::rc::Rc;

use chart_trendline::TrendlineError;
use chart_trendline::api::{
    AxisConfig, ChartConfig, DatasetConfig, HostChart, StaticChart, TRENDLINE_PLUGIN_ID,
    TrendlineConfig,
};
use chart_trendline::core::{ChartArea, Viewport};
use chart_trendline::extensions::{ChartPlugin, PluginRegistry};
use chart_trendline::render::{DrawingSurface, RecordingSurface};
use serde_json::json;

struct TracePlugin {
    id: &'static str,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ChartPlugin for TracePlugin {
    fn id(&self) -> &str {
        self.id
    }

    fn before_datasets_draw(&mut self, chart: &dyn HostChart, _surface: &mut dyn DrawingSurface) {
        self.calls
            .borrow_mut()
            .push(format!("{}:{}", self.id, chart.datasets().len()));
    }
}

fn chart() -> StaticChart {
    let config = ChartConfig::new(
        Viewport::new(400, 200),
        ChartArea::from_ltrb(0.0, 0.0, 400.0, 200.0),
        AxisConfig::linear(0.0, 10.0),
    )
    .with_y_range(0.0, 10.0)
    .with_dataset(
        DatasetConfig::new(vec![json!({"x": 0, "y": 0}), json!({"x": 10, "y": 10})])
            .with_trendline(TrendlineConfig::new()),
    );
    StaticChart::new(config).expect("valid chart")
}

#[test]
fn registry_rejects_duplicate_plugin_ids() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();

    registry
        .register(Box::new(TracePlugin {
            id: "trace",
            calls: Rc::clone(&calls),
        }))
        .expect("register first plugin");
    let err = registry
        .register(Box::new(TracePlugin {
            id: "trace",
            calls: Rc::clone(&calls),
        }))
        .expect_err("duplicate id must fail");

    assert!(matches!(err, TrendlineError::InvalidData(_)));
    assert_eq!(registry.plugin_count(), 1);
}

#[test]
fn registry_rejects_empty_plugin_id() {
    let mut registry = PluginRegistry::new();
    let result = registry.register(Box::new(TracePlugin {
        id: "",
        calls: Rc::new(RefCell::new(Vec::new())),
    }));

    assert!(matches!(result, Err(TrendlineError::InvalidData(_))));
    assert_eq!(registry.plugin_count(), 0);
}

#[test]
fn with_trendline_registers_linear_trendline_plugin() {
    let registry = PluginRegistry::with_trendline();
    assert_eq!(registry.plugin_count(), 1);
    assert!(registry.has_plugin(TRENDLINE_PLUGIN_ID));
    assert_eq!(TRENDLINE_PLUGIN_ID, "trendline-linear");
}

#[test]
fn unregister_removes_plugin_and_stops_dispatch() {
    let chart = chart();
    let mut registry = PluginRegistry::with_trendline();
    assert!(registry.unregister(TRENDLINE_PLUGIN_ID));
    assert!(!registry.unregister(TRENDLINE_PLUGIN_ID));

    let mut surface = RecordingSurface::new();
    registry.before_datasets_draw(&chart, &mut surface);
    assert!(surface.commands().is_empty());
}

#[test]
fn hooks_run_in_registration_order() {
    let chart = chart();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut registry = PluginRegistry::new();
    for id in ["first", "second"] {
        registry
            .register(Box::new(TracePlugin {
                id,
                calls: Rc::clone(&calls),
            }))
            .expect("register plugin");
    }
    registry
        .register(Box::new(chart_trendline::TrendlinePlugin::new()))
        .expect("register trendline");

    let mut surface = RecordingSurface::new();
    registry.before_datasets_draw(&chart, &mut surface);

    assert_eq!(*calls.borrow(), vec!["first:1", "second:1"]);
    assert_eq!(surface.stroke_count(), 1);
}
