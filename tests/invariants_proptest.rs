//! Property tests for board invariants across moves and spawns

use proptest::prelude::*;

use tui_2048::core::moves::apply;
use tui_2048::core::{spawn, Board, Game, SimpleRng};
use tui_2048::types::{Direction, CELL_COUNT};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        2 => Just(0u32),
        3 => (1u32..=11).prop_map(|exp| 1u32 << exp),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform16(tile()).prop_map(Board::from_cells)
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn moves_keep_cells_valid(start in board(), dir in direction()) {
        let mut board = start;
        apply(&mut board, dir);
        prop_assert!(board.is_valid());
    }

    #[test]
    fn moves_never_add_tiles(start in board(), dir in direction()) {
        let mut board = start;
        apply(&mut board, dir);
        prop_assert!(board.count_tiles() <= start.count_tiles());
    }

    #[test]
    fn moves_preserve_tile_sum(start in board(), dir in direction()) {
        let mut board = start;
        apply(&mut board, dir);
        let sum = |b: &Board| b.cells().iter().map(|&v| v as u64).sum::<u64>();
        prop_assert_eq!(sum(&board), sum(&start));
    }

    #[test]
    fn changed_flag_matches_board_difference(start in board(), dir in direction()) {
        let mut board = start;
        let changed = apply(&mut board, dir);
        prop_assert_eq!(changed, board != start);
    }

    #[test]
    fn vertical_moves_are_transposed_horizontal_moves(start in board()) {
        let mut up = start;
        apply(&mut up, Direction::Up);
        let mut left = start.transpose();
        apply(&mut left, Direction::Left);
        prop_assert_eq!(up, left.transpose());

        let mut down = start;
        apply(&mut down, Direction::Down);
        let mut right = start.transpose();
        apply(&mut right, Direction::Right);
        prop_assert_eq!(down, right.transpose());
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell(start in board(), seed in any::<u32>()) {
        let mut board = start;
        let mut rng = SimpleRng::new(seed);
        let spawned = spawn(&mut board, &mut rng);

        if start.count_empty() == 0 {
            prop_assert_eq!(spawned, None);
            prop_assert_eq!(board, start);
        } else {
            let spawned = spawned.unwrap();
            prop_assert_eq!(board.count_empty(), start.count_empty() - 1);
            prop_assert_eq!(start.cells()[spawned.index], 0);
            prop_assert!(spawned.value == 2 || spawned.value == 4);
            prop_assert_eq!(board.cells()[spawned.index], spawned.value);
        }
    }

    #[test]
    fn reachable_sessions_stay_valid(seed in any::<u32>(), dirs in prop::collection::vec(direction(), 0..200)) {
        let mut game = Game::new(seed);
        prop_assert_eq!(game.board().count_tiles(), 2);

        for dir in dirs {
            let mut moved = *game.board();
            let changed = apply(&mut moved, dir);

            prop_assert_eq!(game.apply_move(dir), changed);
            prop_assert!(game.board().is_valid());
            if changed {
                // A changed move always frees a cell, so exactly one tile is added.
                let diff = (0..CELL_COUNT)
                    .filter(|&i| game.board().cells()[i] != moved.cells()[i])
                    .count();
                prop_assert_eq!(diff, 1);
                prop_assert_eq!(game.board().count_tiles(), moved.count_tiles() + 1);
            } else {
                prop_assert_eq!(*game.board(), moved);
            }
        }
    }
}
