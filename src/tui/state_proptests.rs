use super::*;
use proptest::prelude::*;

proptest! {
    /// どんな Up/Down 列を適用してもインデックスは範囲内に収まる
    #[test]
    fn prop_selection_stays_in_range(
        len in 1usize..=256,
        moves in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut state = MenuState::new(len);
        for up in moves {
            if up {
                state.move_up();
            } else {
                state.move_down();
            }
            prop_assert!(state.selected() < len);
        }
    }

    /// Up と Down は互いに逆操作になる
    #[test]
    fn prop_up_then_down_is_identity(
        len in 1usize..=256,
        start_moves in 0usize..16
    ) {
        let mut state = MenuState::new(len);
        for _ in 0..start_moves {
            state.move_down();
        }
        let before = state.selected();

        state.move_up();
        state.move_down();
        prop_assert_eq!(state.selected(), before);
    }

    /// Down を n 回適用すると n mod len の位置になる
    #[test]
    fn prop_down_n_times_lands_on_modulo(
        len in 1usize..=256,
        n in 0usize..1024
    ) {
        let mut state = MenuState::new(len);
        for _ in 0..n {
            state.move_down();
        }
        prop_assert_eq!(state.selected(), n % len);
    }

    /// 選択肢が1件ならどんな移動でも0のまま
    #[test]
    fn prop_single_option_never_moves(
        moves in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut state = MenuState::new(1);
        for up in moves {
            if up {
                state.move_up();
            } else {
                state.move_down();
            }
            prop_assert_eq!(state.selected(), 0);
        }
    }
}
