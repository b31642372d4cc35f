use tracing::debug;

use crate::api::{HostChart, TrendlinePlugin};
use crate::error::{TrendlineError, TrendlineResult};
use crate::render::DrawingSurface;

/// Hook interface a chart host calls during its draw cycle.
///
/// Plugins read host state through [`HostChart`] and draw on the surface;
/// they cannot mutate the host. Hooks never return errors: a plugin that
/// cannot draw logs and leaves the surface untouched.
pub trait ChartPlugin {
    fn id(&self) -> &str;

    /// Called once per redraw, before the host draws its own datasets.
    fn before_datasets_draw(&mut self, chart: &dyn HostChart, surface: &mut dyn DrawingSurface);
}

/// Ordered set of plugins keyed by unique id.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the linear trendline plugin already registered.
    #[must_use]
    pub fn with_trendline() -> Self {
        Self {
            plugins: vec![Box::new(TrendlinePlugin::new())],
        }
    }

    /// Registers a plugin with unique identifier.
    pub fn register(&mut self, plugin: Box<dyn ChartPlugin>) -> TrendlineResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(TrendlineError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(TrendlineError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        debug!(plugin = %plugin_id, "register plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Runs every plugin's pre-dataset hook in registration order.
    pub fn before_datasets_draw(
        &mut self,
        chart: &dyn HostChart,
        surface: &mut dyn DrawingSurface,
    ) {
        for plugin in &mut self.plugins {
            plugin.before_datasets_draw(chart, surface);
        }
    }
}
