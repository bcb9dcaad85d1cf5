use bar_chart_rs::api::{BarChartConfig, BarChartEngine};
use bar_chart_rs::core::{ChartLayout, LayoutOptions, NormalizationPolicy, Series, Viewport};
use bar_chart_rs::render::NullRenderer;
use ordered_float::OrderedFloat;
use proptest::prelude::*;

fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![-1_000_000.0f64..1_000_000.0, prop::num::f64::NORMAL],
        1..64,
    )
}

proptest! {
    #[test]
    fn bar_count_matches_value_count(
        values in finite_values(),
        width in 0.0f64..2_000.0,
        height in 0.0f64..2_000.0
    ) {
        let series = Series::from_values_and_labels::<&str>(&values, &[]);
        let layout = ChartLayout::compute(&series, Viewport::new(width, height), LayoutOptions::default());
        prop_assert_eq!(layout.bars.len(), values.len());
    }

    #[test]
    fn min_max_ratios_are_bounded_and_hit_extremes(values in finite_values()) {
        let series = Series::from_values_and_labels::<&str>(&values, &[]);
        let layout = ChartLayout::compute(&series, Viewport::new(900.0, 700.0), LayoutOptions::default());

        let max = values.iter().copied().map(OrderedFloat).max().expect("non-empty").0;
        let min = values.iter().copied().map(OrderedFloat).min().expect("non-empty").0;
        for bar in &layout.bars {
            prop_assert!((0.0..=1.0).contains(&bar.ratio));
            if max > min {
                if bar.value == max {
                    prop_assert_eq!(bar.ratio, 1.0);
                }
                if bar.value == min {
                    prop_assert_eq!(bar.ratio, 0.0);
                }
            }
        }
    }

    #[test]
    fn geometry_is_always_finite_and_non_negative(
        values in prop::collection::vec(
            prop_oneof![
                -1_000.0f64..1_000.0,
                prop::num::f64::NORMAL,
                Just(f64::MAX),
                Just(-f64::MAX),
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY)
            ],
            0..32
        ),
        width in -100.0f64..2_000.0,
        height in -100.0f64..2_000.0,
        zero_floor in any::<bool>()
    ) {
        let options = LayoutOptions {
            normalization: if zero_floor {
                NormalizationPolicy::ZeroFloor
            } else {
                NormalizationPolicy::MinMax
            },
            ..LayoutOptions::default()
        };
        let series = Series::from_values_and_labels::<&str>(&values, &[]);
        let layout = ChartLayout::compute(&series, Viewport::new(width, height), options);

        prop_assert!(layout.axes.x_axis_length >= 0.0);
        prop_assert!(layout.axes.y_axis_length >= 0.0);
        for bar in &layout.bars {
            prop_assert!(bar.ratio.is_finite());
            prop_assert!(bar.rect.x.is_finite() && bar.rect.y.is_finite());
            prop_assert!(bar.rect.width >= 0.0 && bar.rect.height >= 0.0);
        }
        for tick in layout.ticks.ticks() {
            prop_assert!(tick.y.is_finite());
            prop_assert!(tick.value.is_finite());
            prop_assert!(!tick.label.contains("NaN"));
        }
    }

    #[test]
    fn resize_preserves_ratios_and_hover(
        values in finite_values(),
        hovered in 0usize..64,
        width in 100.0f64..2_000.0,
        height in 100.0f64..2_000.0
    ) {
        let mut engine = BarChartEngine::new(
            NullRenderer::default(),
            BarChartConfig::new(values.clone()),
            Viewport::new(800.0, 600.0),
        ).expect("engine init");
        let hovered = hovered % values.len();
        engine.pointer_enter(hovered);
        let ratios: Vec<_> = engine.layout().bars.iter().map(|bar| bar.ratio).collect();

        engine.set_viewport(Viewport::new(width, height));

        let resized: Vec<_> = engine.layout().bars.iter().map(|bar| bar.ratio).collect();
        prop_assert_eq!(ratios, resized);
        prop_assert_eq!(engine.hovered_index(), Some(hovered));
        prop_assert!(engine.build_render_frame().expect("frame").validate().is_ok());
    }
}
