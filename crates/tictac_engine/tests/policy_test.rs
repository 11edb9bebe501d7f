//! Behavioural tests for the three move policies.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::IntoEnumIterator;
use tictac_engine::{
    Board, Difficulty, EngineError, HeuristicPolicy, MovePolicy, OptimalPolicy, Outcome, Player,
    SearchNode, WIN_SCORE, evaluate, legal_moves, score_moves,
};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

/// Walks every X line of play against optimal O.
///
/// Once O has chosen a move valued as a forced win, every continuation must
/// end with O winning.
fn walk_against_optimal_o<N: SearchNode>(
    node: &mut N,
    to_move: Player,
    forced_win: bool,
    games: &mut usize,
) {
    let board = node.board();
    match evaluate(board) {
        Outcome::Won(Player::X) => panic!("optimal O lost: {}", board.to_compact()),
        Outcome::Won(Player::O) => {
            *games += 1;
            return;
        }
        Outcome::Draw => {
            assert!(!forced_win, "forced win slipped to a draw: {}", board.to_compact());
            *games += 1;
            return;
        }
        Outcome::InProgress => {}
    }

    match to_move {
        Player::X => {
            for index in legal_moves(board) {
                let mut branch = node.speculate(index, Player::X).unwrap();
                walk_against_optimal_o(&mut branch, Player::O, forced_win, games);
            }
        }
        Player::O => {
            let mut scratch = board.clone();
            let index = OptimalPolicy::new().choose_move(&mut scratch, Player::O).unwrap();
            let scored = score_moves(node, Player::O).unwrap();
            let chosen = scored.iter().find(|m| m.index == index).unwrap();
            assert_eq!(
                chosen.score,
                scored.iter().map(|m| m.score).max().unwrap(),
                "optimal O skipped a better move on {}",
                scratch.to_compact()
            );
            let forced_win = forced_win || chosen.score == WIN_SCORE;
            let mut branch = node.speculate(index, Player::O).unwrap();
            walk_against_optimal_o(&mut branch, Player::X, forced_win, games);
        }
    }
}

/// Walks every O line of play against optimal X.
fn walk_against_optimal_x<N: SearchNode>(node: &mut N, to_move: Player) {
    let board = node.board();
    match evaluate(board) {
        Outcome::Won(Player::O) => panic!("optimal X lost: {}", board.to_compact()),
        Outcome::Won(Player::X) | Outcome::Draw => return,
        Outcome::InProgress => {}
    }

    match to_move {
        Player::X => {
            let index = OptimalPolicy::new()
                .choose_move(&mut board.clone(), Player::X)
                .unwrap();
            let mut branch = node.speculate(index, Player::X).unwrap();
            walk_against_optimal_x(&mut branch, Player::O);
        }
        Player::O => {
            for index in legal_moves(board) {
                let mut branch = node.speculate(index, Player::O).unwrap();
                walk_against_optimal_x(&mut branch, Player::X);
            }
        }
    }
}

#[test]
fn test_optimal_o_never_loses() {
    let mut board = Board::new();
    let mut games = 0;
    walk_against_optimal_o(&mut board, Player::X, false, &mut games);
    assert!(games > 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_optimal_x_never_loses() {
    let mut board = Board::new();
    walk_against_optimal_x(&mut board, Player::X);
    assert_eq!(board, Board::new());
}

#[test]
fn test_optimal_answers_corner_with_center() {
    let mut board = board("X........");
    assert_eq!(OptimalPolicy::new().choose_move(&mut board, Player::O), Ok(4));
}

#[test]
fn test_heuristic_completes_win_before_blocking() {
    let mut board = board("XX.OO....");
    let mut policy = HeuristicPolicy::new(SmallRng::seed_from_u64(1));
    assert_eq!(policy.choose_move(&mut board, Player::X), Ok(2));
}

#[test]
fn test_heuristic_wins_despite_opponent_threat() {
    // X threatens the top row at 2; O finishes the middle row at 5 instead.
    let mut board = board("XX.OO.X..");
    let mut policy = HeuristicPolicy::new(SmallRng::seed_from_u64(2));
    assert_eq!(policy.choose_move(&mut board, Player::O), Ok(5));
}

#[test]
fn test_heuristic_blocks_every_single_threat() {
    // For each line, X holds two cells and O holds nothing that wins.
    let cases = [
        ("XX..O....", 2),
        ("O..XX....", 5),
        ("O.....X.X", 7),
        ("X.O...X..", 3),
        ("O...X..X.", 1),
        (".O...X..X", 2),
        ("X.O.X....", 8),
        ("..X.XO...", 6),
    ];
    for (cells, expected) in cases {
        let mut board = board(cells);
        let mut policy = HeuristicPolicy::new(SmallRng::seed_from_u64(5));
        assert_eq!(
            policy.choose_move(&mut board, Player::O),
            Ok(expected),
            "board {}",
            cells
        );
    }
}

#[test]
fn test_policies_leave_board_unchanged() {
    let positions = ["X........", "X...O...X", "XX.OO.X..", "XOXOX....", "XOXXOO.X."];
    for difficulty in Difficulty::iter() {
        let mut policy = difficulty.policy(Some(17));
        for cells in positions {
            let mut board = board(cells);
            let player = if board.mark_count(Player::X) > board.mark_count(Player::O) {
                Player::O
            } else {
                Player::X
            };
            let index = policy.choose_move(&mut board, player).unwrap();
            assert_eq!(board.to_compact(), cells, "{} moved marks", policy.name());
            assert_eq!(board.is_empty(index), Ok(true));
        }
    }
}

#[test]
fn test_policies_reject_full_board() {
    for difficulty in Difficulty::iter() {
        let mut board = board("XOXOXXOXO");
        let mut policy = difficulty.policy(Some(3));
        assert_eq!(
            policy.choose_move(&mut board, Player::O),
            Err(EngineError::NoLegalMove)
        );
    }
}
