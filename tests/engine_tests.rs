use proptest::prelude::*;
use tictactoe::core::{Board, Checker, CheckerPair, Coord};
use tictactoe::game::{Game, GameOutcome};
use tictactoe::player::ai::{best_move, SearchEngine, TIE_BASE, WIN_BASE};
use tictactoe::player::{AiPlayer, Player, TieBreak};

/// 0 = empty, 1 = X, 2 = O
fn board_from_cells(dim: usize, cells: &[u8]) -> Board {
    let mut board = Board::new(dim, CheckerPair::default()).unwrap();
    for (i, &cell) in cells.iter().enumerate() {
        let checker = match cell {
            1 => Checker::X,
            2 => Checker::O,
            _ => continue,
        };
        board.place(checker, i / dim, i % dim).unwrap();
    }
    board
}

fn grid() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (1usize..=6).prop_flat_map(|dim| (Just(dim), proptest::collection::vec(0u8..3, dim * dim)))
}

proptest! {
    #[test]
    fn place_then_remove_restores_board((dim, cells) in grid(), pick in any::<prop::sample::Index>(), x in any::<bool>()) {
        let mut board = board_from_cells(dim, &cells);
        prop_assume!(!board.is_full());
        let before = board.clone();

        let target = *pick.get(board.available_moves());
        let checker = if x { Checker::X } else { Checker::O };
        board.place(checker, target.row, target.col).unwrap();
        prop_assert_eq!(board.occupied_count(), before.occupied_count() + 1);
        prop_assert_eq!(board.remove(target.row, target.col).unwrap(), checker);

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(
            board.occupied_count() + board.available_moves().len(),
            dim * dim
        );
    }

    #[test]
    fn win_detection_survives_half_turn((dim, cells) in grid()) {
        let board = board_from_cells(dim, &cells);
        let rotated_cells: Vec<u8> = cells.iter().rev().copied().collect();
        let rotated = board_from_cells(dim, &rotated_cells);

        for checker in [Checker::X, Checker::O] {
            prop_assert_eq!(
                board.is_win_for(checker).unwrap(),
                rotated.is_win_for(checker).unwrap()
            );
        }
    }
}

#[test]
fn optimal_play_ends_in_tie() {
    let mut game = Game::new(Board::default());
    let mut x = AiPlayer::with_seed("Computer1", Checker::X, TieBreak::First, 9, 1);
    let mut o = AiPlayer::with_seed("Computer2", Checker::O, TieBreak::First, 9, 2);

    let outcome = game.play(&mut x, &mut o, |_, _| {}).unwrap();
    assert_eq!(outcome, GameOutcome::Tie);
    assert_eq!(x.move_count(), 5);
    assert_eq!(o.move_count(), 4);
}

#[test]
fn immediate_win_is_taken_on_four_by_four() {
    let cells = [
        1, 1, 1, 0, //
        2, 2, 2, 0, //
        0, 0, 0, 0, //
        0, 0, 0, 0,
    ];
    let mut board = board_from_cells(4, &cells);
    let (mv, score) = best_move(&mut board, 2, Checker::X, TieBreak::Random).unwrap();
    let mv = mv.unwrap();
    assert_eq!(mv, Coord::new(0, 3));
    assert!(score >= WIN_BASE);

    board.place(Checker::X, mv.row, mv.col).unwrap();
    assert!(board.is_win_for(Checker::X).unwrap());
}

#[test]
fn single_empty_cell_is_returned_as_tie() {
    let cells = [1, 2, 1, 1, 2, 2, 2, 1, 0];
    let mut board = board_from_cells(3, &cells);
    let (mv, score) = best_move(&mut board, 5, Checker::X, TieBreak::First).unwrap();
    assert_eq!(mv, Some(Coord::new(2, 2)));
    assert_eq!(score, TIE_BASE);
}

#[test]
fn depth_zero_on_empty_board_never_returns_none() {
    let mut board = Board::default();
    let all: Vec<Coord> = board.available_moves().to_vec();
    let mut engine = SearchEngine::with_seed(TieBreak::Random, 99);
    for _ in 0..20 {
        let result = engine.best_move(&mut board, 0, Checker::X).unwrap();
        assert!(all.contains(&result.best.unwrap()));
        assert_eq!(result.score, TIE_BASE);
    }
}

#[test]
fn custom_checkers_play_through() {
    let pair = CheckerPair::new('#', '@').unwrap();
    let hash = pair.first();
    let at = pair.second();
    let mut game = Game::new(Board::new(3, pair).unwrap());
    let mut p1 = AiPlayer::with_seed("Hash", hash, TieBreak::Last, 9, 5);
    let mut p2 = AiPlayer::with_seed("At", at, TieBreak::First, 9, 6);

    assert_eq!(game.play(&mut p1, &mut p2, |_, _| {}).unwrap(), GameOutcome::Tie);
    assert!(!game.board.is_win_for(hash).unwrap());
    assert!(!game.board.is_win_for(at).unwrap());
}

#[test]
fn record_replays_to_final_board() {
    let mut game = Game::new(Board::default());
    let mut x = AiPlayer::with_seed("Computer1", Checker::X, TieBreak::Random, 2, 10);
    let mut o = AiPlayer::with_seed("Computer2", Checker::O, TieBreak::Random, 2, 11);
    let outcome = game.play(&mut x, &mut o, |_, _| {}).unwrap();

    let record = game.to_record(Some(outcome));
    assert_eq!(record.players, vec!["Computer1 (X)", "Computer2 (O)"]);
    assert_eq!(record.replay().unwrap(), game.board);
}
