use bar_chart_rs::interaction::HoverState;
use proptest::prelude::*;

proptest! {
    #[test]
    fn at_most_one_bar_is_hovered(
        len in 1usize..32,
        events in prop::collection::vec((0usize..40, any::<bool>()), 0..64)
    ) {
        let mut state = HoverState::new(len);
        for (index, is_hovering) in events {
            state.set_hover(index, is_hovering);
            let hovered = (0..len).filter(|&i| state.is_hovered(i)).count();
            prop_assert!(hovered <= 1);
        }
    }

    #[test]
    fn entering_j_after_i_leaves_only_j(len in 2usize..32, i in 0usize..32, j in 0usize..32) {
        let (i, j) = (i % len, j % len);
        prop_assume!(i != j);

        let mut state = HoverState::new(len);
        state.set_hover(i, true);
        state.set_hover(j, true);

        prop_assert!(!state.is_hovered(i));
        prop_assert!(state.is_hovered(j));
    }

    #[test]
    fn leave_never_touches_other_bars(
        len in 2usize..32,
        active in 0usize..32,
        left in 0usize..32
    ) {
        let (active, left) = (active % len, left % len);
        let mut state = HoverState::new(len);
        state.set_hover(active, true);
        state.set_hover(left, false);

        for index in 0..len {
            let expected = index == active && index != left;
            prop_assert_eq!(state.is_hovered(index), expected);
        }
    }
}
