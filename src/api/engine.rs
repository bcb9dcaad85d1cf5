use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{ChartLayout, Series, Viewport};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTransition};
use crate::render::Renderer;

use super::animation::EntryAnimationTracker;
use super::viewport_provider::{ViewportProvider, ViewportSubscription};
use super::{BarChartConfig, EngineSnapshot};

/// Main orchestration facade consumed by host applications.
///
/// `BarChartEngine` owns the chart config, the derived layout, hover state and
/// the renderer. Every mutation recomputes the layout eagerly.
#[derive(Debug)]
pub struct BarChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) series: Series,
    pub(super) viewport: Viewport,
    pub(super) layout: ChartLayout,
    pub(super) hover: HoverState,
    pub(super) animations: EntryAnimationTracker,
    subscription: Option<ViewportSubscription>,
}

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine with a fixed initial viewport.
    ///
    /// Invalid viewport sizes are clamped rather than rejected.
    pub fn new(renderer: R, config: BarChartConfig, viewport: Viewport) -> ChartResult<Self> {
        config.validate()?;
        let series = config.series();
        log_series_anomalies(&config);

        let viewport = sanitize_viewport(viewport);
        let layout = ChartLayout::compute(&series, viewport, config.layout_options());
        let mut animations = EntryAnimationTracker::default();
        animations.sync_len(series.len());
        debug!(
            bars = series.len(),
            width = viewport.width,
            height = viewport.height,
            "create bar chart engine"
        );

        Ok(Self {
            renderer,
            hover: HoverState::new(series.len()),
            config,
            series,
            viewport,
            layout,
            animations,
            subscription: None,
        })
    }

    /// Creates an engine that follows `provider`'s viewport.
    ///
    /// Size notifications are applied on `sync_viewport`; the subscription is
    /// released by `shutdown` or when the engine is dropped.
    pub fn with_viewport_provider(
        renderer: R,
        config: BarChartConfig,
        provider: Rc<dyn ViewportProvider>,
    ) -> ChartResult<Self> {
        let subscription = ViewportSubscription::attach(provider);
        let mut engine = Self::new(renderer, config, subscription.current())?;
        engine.subscription = Some(subscription);
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    ///
    /// Hover state is reset when the bar count changes.
    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        log_series_anomalies(&config);
        self.config = config;
        self.reload_series();
        Ok(())
    }

    /// Replaces values and labels, keeping colors and policies.
    pub fn set_values(&mut self, values: Vec<f64>, labels: Vec<String>) {
        self.config.values = values;
        self.config.labels = labels;
        log_series_anomalies(&self.config);
        self.reload_series();
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recomputes every pixel position; data and hover state are untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let viewport = sanitize_viewport(viewport);
        if viewport == self.viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "resize bar chart viewport"
        );
        self.viewport = viewport;
        self.relayout();
    }

    /// Applies the latest size notification from the viewport provider.
    ///
    /// Returns `true` when a pending size was applied.
    pub fn sync_viewport(&mut self) -> bool {
        let pending = self
            .subscription
            .as_ref()
            .and_then(ViewportSubscription::take_pending);
        match pending {
            Some(viewport) => {
                self.set_viewport(viewport);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Releases the viewport provider subscription, if any.
    pub fn shutdown(&mut self) -> bool {
        self.subscription
            .take()
            .is_some_and(|mut subscription| subscription.detach())
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn pointer_enter(&mut self, index: usize) -> HoverTransition {
        self.apply_hover(index, true)
    }

    pub fn pointer_leave(&mut self, index: usize) -> HoverTransition {
        self.apply_hover(index, false)
    }

    /// Hit-tests the pointer against bar columns and updates hover state.
    ///
    /// Moving off every bar clears the hovered bar.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> HoverTransition {
        match self.layout.bar_at(x, y) {
            Some(index) => self.apply_hover(index, true),
            None => self.pointer_exit_chart(),
        }
    }

    pub fn pointer_exit_chart(&mut self) -> HoverTransition {
        let transition = self.hover.clear();
        trace_hover(transition);
        transition
    }

    #[must_use]
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hover.is_hovered(index)
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hover.hovered_index()
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    /// Makes every bar animate again on the next render.
    pub fn replay_entry_animation(&mut self) {
        self.animations.reset();
    }

    /// Builds a frame and hands it to the renderer.
    ///
    /// Bars count as painted only after the renderer succeeds.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.animations.mark_all_painted();
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            config: self.config.clone(),
            layout: self.layout.clone(),
            hovered_index: self.hover.hovered_index(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn apply_hover(&mut self, index: usize, is_hovering: bool) -> HoverTransition {
        let transition = self.hover.set_hover(index, is_hovering);
        trace_hover(transition);
        transition
    }

    fn reload_series(&mut self) {
        let series = self.config.series();
        if series.len() != self.series.len() {
            self.hover.resize(series.len());
        }
        self.animations.sync_len(series.len());
        debug!(bars = series.len(), "replace bar chart series");
        self.series = series;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = ChartLayout::compute(&self.series, self.viewport, self.config.layout_options());
    }
}

fn sanitize_viewport(viewport: Viewport) -> Viewport {
    let sanitized = viewport.sanitized();
    if sanitized != viewport {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "clamping invalid viewport size"
        );
    }
    sanitized
}

fn log_series_anomalies(config: &BarChartConfig) {
    if !config.labels.is_empty() && config.labels.len() != config.values.len() {
        warn!(
            values = config.values.len(),
            labels = config.labels.len(),
            "label count does not match value count"
        );
    }
    let non_finite = config.values.iter().filter(|value| !value.is_finite()).count();
    if non_finite > 0 {
        warn!(
            non_finite,
            "non-finite values are excluded from the value range"
        );
    }
}

fn trace_hover(transition: HoverTransition) {
    match transition {
        HoverTransition::Entered { index, previous } => {
            trace!(index, previous = ?previous, "bar hover entered");
        }
        HoverTransition::Left { index } => trace!(index, "bar hover left"),
        HoverTransition::Unchanged => {}
    }
}
