//! Outcome evaluation over every reachable game.

use tictac_engine::{
    Board, Outcome, Player, SearchNode, WIN_LINES, evaluate, legal_moves, winning_line,
};

fn owns_line(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| {
        line.iter()
            .all(|&index| board.get(index).and_then(|cell| cell.mark()) == Some(player))
    })
}

/// Plays every legal alternating game, stopping at the first terminal board.
fn walk<N: SearchNode>(node: &mut N, to_move: Player, visited: &mut usize) {
    *visited += 1;
    let board = node.board();
    let outcome = evaluate(board);
    assert_eq!(outcome, evaluate(board), "evaluate is not idempotent");

    let x_line = owns_line(board, Player::X);
    let o_line = owns_line(board, Player::O);
    assert!(!(x_line && o_line), "both marks won on {}", board.to_compact());

    match outcome {
        Outcome::Won(player) => {
            assert!(owns_line(board, player));
            let line = winning_line(board).expect("won board has a line");
            assert!(line.iter().all(|&i| board.get(i).and_then(|c| c.mark()) == Some(player)));
            return;
        }
        Outcome::Draw => {
            assert!(board.is_full());
            assert!(!x_line && !o_line);
            return;
        }
        Outcome::InProgress => {
            assert!(!x_line && !o_line);
            assert!(!board.is_full());
        }
    }

    for index in legal_moves(board) {
        let mut branch = node.speculate(index, to_move).unwrap();
        walk(&mut branch, to_move.opponent(), visited);
    }
}

#[test]
fn test_every_reachable_board_classified() {
    let mut board = Board::new();
    let mut visited = 0;
    walk(&mut board, Player::X, &mut visited);
    // Nodes in the full tic-tac-toe game tree, root included.
    assert_eq!(visited, 549_946);
    assert_eq!(board, Board::new());
}

#[test]
fn test_draw_without_line() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
    assert_eq!(winning_line(&board), None);
}
