use std::rc::Rc;

use approx::assert_relative_eq;
use bar_chart_rs::api::{BarChartConfig, BarChartEngine, SharedViewportProvider, ViewportProvider};
use bar_chart_rs::core::Viewport;
use bar_chart_rs::render::NullRenderer;

fn config() -> BarChartConfig {
    BarChartConfig::new(vec![10.0, 20.0, 30.0]).with_labels(["a", "b", "c"])
}

#[test]
fn resize_recomputes_positions_proportionally() {
    let mut engine = BarChartEngine::new(NullRenderer::default(), config(), Viewport::new(800.0, 600.0))
        .expect("engine init");
    let before = engine.layout().clone();

    engine.set_viewport(Viewport::new(1000.0, 800.0));
    let after = engine.layout();

    assert_eq!(after.axes.x_axis_length, 900.0);
    assert_eq!(after.axes.y_axis_length, 700.0);
    for (old, new) in before.bars.iter().zip(&after.bars) {
        assert_eq!(old.ratio, new.ratio);
        assert_eq!(old.value, new.value);
        assert_eq!(old.label, new.label);
        assert_relative_eq!(
            (new.slot_x - 50.0) / 900.0,
            (old.slot_x - 50.0) / 700.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(new.rect.height / 700.0, old.rect.height / 500.0, epsilon = 1e-12);
    }
    let tick_ys: Vec<_> = after.ticks.ticks().iter().map(|tick| tick.y).collect();
    assert_eq!(tick_ys, [50.0, 190.0, 330.0, 470.0, 610.0]);
}

#[test]
fn resize_keeps_hover_state() {
    let mut engine = BarChartEngine::new(NullRenderer::default(), config(), Viewport::new(800.0, 600.0))
        .expect("engine init");
    engine.pointer_enter(0);
    engine.set_viewport(Viewport::new(300.0, 300.0));
    assert_eq!(engine.hovered_index(), Some(0));
    assert_eq!(engine.series().len(), 3);
}

#[test]
fn provider_notifications_apply_on_sync() {
    let provider = SharedViewportProvider::new(Viewport::new(640.0, 480.0));
    let mut engine = BarChartEngine::with_viewport_provider(
        NullRenderer::default(),
        config(),
        Rc::clone(&provider) as Rc<dyn ViewportProvider>,
    )
    .expect("engine init");
    assert_eq!(engine.viewport(), Viewport::new(640.0, 480.0));
    assert_eq!(provider.listener_count(), 1);

    provider.resize(900.0, 700.0);
    provider.resize(1200.0, 900.0);
    assert_eq!(engine.viewport(), Viewport::new(640.0, 480.0), "applied only on sync");

    assert!(engine.sync_viewport());
    assert_eq!(engine.viewport(), Viewport::new(1200.0, 900.0));
    assert!(!engine.sync_viewport(), "nothing pending");
}

#[test]
fn shutdown_unsubscribes_from_provider() {
    let provider = SharedViewportProvider::new(Viewport::new(640.0, 480.0));
    let mut engine = BarChartEngine::with_viewport_provider(
        NullRenderer::default(),
        config(),
        Rc::clone(&provider) as Rc<dyn ViewportProvider>,
    )
    .expect("engine init");

    assert!(engine.shutdown());
    assert!(!engine.is_subscribed());
    assert_eq!(provider.listener_count(), 0);

    provider.resize(1000.0, 1000.0);
    assert!(!engine.sync_viewport());
    assert!(!engine.shutdown(), "second shutdown is a no-op");
}

#[test]
fn dropping_engine_unsubscribes() {
    let provider = SharedViewportProvider::new(Viewport::new(640.0, 480.0));
    {
        let _engine = BarChartEngine::with_viewport_provider(
            NullRenderer::default(),
            config(),
            Rc::clone(&provider) as Rc<dyn ViewportProvider>,
        )
        .expect("engine init");
        assert_eq!(provider.listener_count(), 1);
    }
    assert_eq!(provider.listener_count(), 0);
}

#[test]
fn failed_engine_creation_releases_subscription() {
    let provider = SharedViewportProvider::new(Viewport::new(640.0, 480.0));
    let result = BarChartEngine::with_viewport_provider(
        NullRenderer::default(),
        config().with_tick_count(0),
        Rc::clone(&provider) as Rc<dyn ViewportProvider>,
    );
    assert!(result.is_err());
    assert_eq!(provider.listener_count(), 0);
}

#[test]
fn listeners_may_unsubscribe_during_notification() {
    use std::cell::Cell;

    let provider = SharedViewportProvider::new(Viewport::new(10.0, 10.0));
    let own_id = Rc::new(Cell::new(None));
    let calls = Rc::new(Cell::new(0));

    let id = {
        let handle = Rc::clone(&provider);
        let own_id = Rc::clone(&own_id);
        let calls = Rc::clone(&calls);
        provider.subscribe(Box::new(move |_| {
            calls.set(calls.get() + 1);
            if let Some(id) = own_id.get() {
                handle.unsubscribe(id);
            }
        }))
    };
    own_id.set(Some(id));

    provider.resize(20.0, 20.0);
    provider.resize(30.0, 30.0);
    assert_eq!(calls.get(), 1);
    assert_eq!(provider.listener_count(), 0);
}
