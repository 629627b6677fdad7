//! Replaceable chart slots.
//!
//! Each dashboard panel owns exactly one live chart. Replacing it disposes
//! the previous chart first, so a panel never holds two instances.

use super::generator::{render_chart, Chart, ChartConfig};
use crate::output::svg::write_svg;
use crate::utils::error::ChartError;
use log::debug;
use std::path::{Path, PathBuf};

/// A chart currently installed in a slot
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub title: String,
    pub svg: String,

    /// Slot generation this chart was installed at
    pub generation: u64,
}

/// Owned handle for one display region
#[derive(Debug)]
pub struct ChartSlot {
    name: &'static str,

    /// File rewritten on every replace, if bound
    target: Option<PathBuf>,

    current: Option<RenderedChart>,
    generation: u64,
}

impl ChartSlot {
    /// Slot kept in memory only
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            target: None,
            current: None,
            generation: 0,
        }
    }

    /// Slot that also writes each installed chart to `path`
    pub fn bound_to(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            target: Some(path.into()),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn current(&self) -> Option<&RenderedChart> {
        self.current.as_ref()
    }

    /// Number of charts installed over the slot's lifetime
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Render `chart`, dispose the previous occupant, install the new one
    ///
    /// If rendering fails the previous chart is still disposed, so the
    /// panel never shows data that no longer matches the selection.
    pub fn replace(
        &mut self,
        chart: &Chart,
        config: &ChartConfig,
    ) -> Result<&RenderedChart, ChartError> {
        let rendered = render_chart(chart, config);
        self.dispose();
        let svg = rendered?;

        if let Some(path) = &self.target {
            write_svg(&svg, path)?;
        }

        self.generation += 1;
        debug!(
            "Slot '{}' installed '{}' (generation {})",
            self.name, chart.title, self.generation
        );

        Ok(&*self.current.insert(RenderedChart {
            title: chart.title.clone(),
            svg,
            generation: self.generation,
        }))
    }

    /// Like [`ChartSlot::replace`], but a chart with nothing to plot only
    /// empties the slot
    ///
    /// Returns `None` when the slot was left empty.
    pub fn fill(
        &mut self,
        chart: &Chart,
        config: &ChartConfig,
    ) -> Result<Option<&RenderedChart>, ChartError> {
        let name = self.name;
        match self.replace(chart, config) {
            Ok(rendered) => Ok(Some(rendered)),
            Err(ChartError::EmptyData(title)) => {
                debug!("Nothing to plot for '{}' in slot '{}'", title, name);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Tear down the current chart, returning it
    pub fn dispose(&mut self) -> Option<RenderedChart> {
        let previous = self.current.take();
        if let Some(chart) = &previous {
            debug!(
                "Slot '{}' disposed '{}' (generation {})",
                self.name, chart.title, chart.generation
            );
        }
        previous
    }
}
