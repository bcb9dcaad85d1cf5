use bar_chart_rs::api::{AnimationReplay, BarChartConfig, BarChartEngine};
use bar_chart_rs::core::Viewport;
use bar_chart_rs::render::NullRenderer;

fn engine_for(config: BarChartConfig) -> BarChartEngine<NullRenderer> {
    BarChartEngine::new(NullRenderer::default(), config, Viewport::new(800.0, 600.0))
        .expect("engine init")
}

fn animated_indices(engine: &BarChartEngine<NullRenderer>) -> Vec<usize> {
    engine
        .build_render_frame()
        .expect("build frame")
        .bars
        .iter()
        .filter(|bar| bar.animation.is_some())
        .map(|bar| bar.index)
        .collect()
}

#[test]
fn first_frame_animates_from_zero_to_bar_height() {
    let engine = engine_for(BarChartConfig::new(vec![10.0, 20.0, 30.0]));
    let frame = engine.build_render_frame().expect("build frame");

    let middle = &frame.bars[1];
    let animation = middle.animation.expect("middle bar animates");
    assert_eq!(animation.from_height, 0.0);
    assert_eq!(animation.to_height, middle.rect.rect.height);
    assert_eq!(animation.duration_seconds, 1.0);
    assert!(frame.bars[0].animation.is_none(), "zero-height bar has nothing to animate");
}

#[test]
fn building_a_frame_does_not_consume_the_animation() {
    let engine = engine_for(BarChartConfig::new(vec![1.0, 2.0]));
    assert_eq!(animated_indices(&engine), [1]);
    assert_eq!(animated_indices(&engine), [1]);
}

#[test]
fn animation_plays_once_per_inserted_bar() {
    let mut engine = engine_for(BarChartConfig::new(vec![1.0, 2.0, 3.0]));
    engine.render().expect("first render");
    assert_eq!(engine.renderer().last_animated_bar_count, 2);
    assert!(animated_indices(&engine).is_empty());

    engine.set_values(vec![1.0, 5.0, 3.0], Vec::new());
    assert!(animated_indices(&engine).is_empty(), "value updates do not replay");

    engine.set_values(vec![1.0, 5.0, 3.0, 4.0], Vec::new());
    assert_eq!(animated_indices(&engine), [3]);
    engine.render().expect("render inserted bar");
    assert_eq!(engine.renderer().last_animated_bar_count, 1);
}

#[test]
fn resize_does_not_replay_animation() {
    let mut engine = engine_for(BarChartConfig::new(vec![1.0, 2.0]));
    engine.render().expect("first render");
    engine.set_viewport(Viewport::new(400.0, 400.0));
    assert!(animated_indices(&engine).is_empty());
}

#[test]
fn replay_policies() {
    let always = BarChartConfig::new(vec![1.0, 2.0]).with_animation(0.5, AnimationReplay::Always);
    let mut engine = engine_for(always);
    engine.render().expect("render");
    assert_eq!(animated_indices(&engine), [1]);

    let never = BarChartConfig::new(vec![1.0, 2.0]).with_animation(0.5, AnimationReplay::Never);
    assert!(animated_indices(&engine_for(never)).is_empty());

    let disabled = BarChartConfig::new(vec![1.0, 2.0]).with_animation(0.0, AnimationReplay::OnInsert);
    assert!(animated_indices(&engine_for(disabled)).is_empty());
}

#[test]
fn explicit_replay_rearms_every_bar() {
    let mut engine = engine_for(BarChartConfig::new(vec![1.0, 2.0, 3.0]));
    engine.render().expect("render");
    engine.replay_entry_animation();
    assert_eq!(animated_indices(&engine), [1, 2]);
}
