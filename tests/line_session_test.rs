//! Line-mode loop tests driven with in-memory input and output

use tui_2048::core::{Board, Game, SimpleRng};
use tui_2048::term::{render_text, run_line_session, FAREWELL, PROMPT};

fn play(game: &mut Game, input: &str) -> String {
    let mut out = Vec::new();
    run_line_session(game, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn one_tile_game() -> Game {
    Game::from_board(
        Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]),
        SimpleRng::new(11),
    )
}

#[test]
fn quit_prints_board_prompt_and_farewell() {
    let mut game = one_tile_game();
    let start = *game.board();

    let out = play(&mut game, "q\n");
    let expected = format!("{}{}{}\n", render_text(&start), PROMPT, FAREWELL);
    assert_eq!(out, expected);
    assert_eq!(game.board(), &start);
}

#[test]
fn unrecognized_input_is_ignored() {
    let mut game = one_tile_game();
    let start = *game.board();

    let out = play(&mut game, "x\nhello\n\nup\nq\n");
    assert_eq!(game.board(), &start);
    assert_eq!(game.moves(), 0);
    // Board is redrawn once per prompt.
    assert_eq!(out.matches(PROMPT).count(), 5);
}

#[test]
fn changed_move_spawns_and_redraws() {
    let mut game = one_tile_game();

    let out = play(&mut game, "A\nq\n");
    assert_eq!(game.board().get(0, 0), Some(2));
    assert_eq!(game.board().count_tiles(), 2);
    assert_eq!(game.moves(), 1);
    assert!(out.contains(&render_text(game.board())));
}

#[test]
fn unchanged_move_does_not_spawn() {
    let mut game = one_tile_game();
    let start = *game.board();

    play(&mut game, "d\nw\nq\n");
    assert_eq!(game.board(), &start);
    assert_eq!(game.moves(), 0);
}

#[test]
fn end_of_input_ends_session() {
    let mut game = Game::new(3);
    let out = play(&mut game, "s\n");
    assert!(out.ends_with(&format!("{PROMPT}\n{FAREWELL}\n")));
}

#[test]
fn same_seed_same_transcript() {
    let script = "a\nw\nd\ns\na\nw\nd\ns\nq\n";
    let a = play(&mut Game::new(77), script);
    let b = play(&mut Game::new(77), script);
    assert_eq!(a, b);
}
