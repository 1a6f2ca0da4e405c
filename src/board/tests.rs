use super::*;
use crate::moves::Move;
use crate::search::enumerate_moves;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

/// Everything undo must restore, besides the squares themselves
#[derive(Debug, PartialEq)]
struct Snapshot {
    squares: Vec<PieceColor>,
    red: u32,
    blue: u32,
    whose_move: PieceColor,
    num_moves: u32,
    num_jumps: u32,
    winner: Option<PieceColor>,
    moves: Vec<Move>,
}

fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        squares: (0..TOTAL_CELLS).map(|i| board.get_index(i)).collect(),
        red: board.red_pieces(),
        blue: board.blue_pieces(),
        whose_move: board.whose_move(),
        num_moves: board.num_moves(),
        num_jumps: board.num_jumps(),
        winner: board.winner(),
        moves: board.all_moves().to_vec(),
    }
}

/// Counts kept incrementally must match a full scan, and all 49 squares
/// must be accounted for.
fn assert_conserved(board: &Board) {
    let count = |c: PieceColor| Square::all().filter(|&s| board.get(s) == c).count() as u32;
    let red = count(PieceColor::Red);
    let blue = count(PieceColor::Blue);
    let blocked = count(PieceColor::Blocked);
    let empty = count(PieceColor::Empty);
    assert_eq!(board.red_pieces(), red);
    assert_eq!(board.blue_pieces(), blue);
    assert_eq!(red + blue + blocked + empty, TOTAL_CELLS as u32);
    assert_eq!(board.total_open(), TOTAL_CELLS as u32 - blocked);
}

#[test]
fn test_piece_color_opposite() {
    assert_eq!(PieceColor::Red.opposite(), PieceColor::Blue);
    assert_eq!(PieceColor::Blue.opposite(), PieceColor::Red);
    assert_eq!(PieceColor::Empty.opposite(), PieceColor::Empty);
    assert_eq!(PieceColor::Blocked.opposite(), PieceColor::Blocked);
}

#[test]
fn test_square_conversion() {
    let s = sq("c3");
    assert_eq!((s.col, s.row), (2, 2));
    assert_eq!(s.to_index(), 2 * 7 + 2);
    assert_eq!(Square::from_index(16), s);
    assert_eq!(s.to_string(), "c3");
    assert!("h1".parse::<Square>().is_err());
    assert!("a0".parse::<Square>().is_err());
    assert!("a".parse::<Square>().is_err());
}

#[test]
fn test_square_order_is_column_major() {
    let names: Vec<String> = Square::all().take(8).map(|s| s.to_string()).collect();
    assert_eq!(names, ["a1", "a2", "a3", "a4", "a5", "a6", "a7", "b1"]);
    assert_eq!(Square::all().count(), TOTAL_CELLS);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 7);
    assert_eq!(TOTAL_CELLS, 49);
    assert_eq!(EXTENDED_SIZE, 11);
    assert_eq!(JUMP_LIMIT, 25);
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.get(sq("a7")), PieceColor::Red);
    assert_eq!(board.get(sq("g1")), PieceColor::Red);
    assert_eq!(board.get(sq("a1")), PieceColor::Blue);
    assert_eq!(board.get(sq("g7")), PieceColor::Blue);
    assert_eq!(board.red_pieces(), 2);
    assert_eq!(board.blue_pieces(), 2);
    assert_eq!(board.whose_move(), PieceColor::Red);
    assert_eq!(board.num_moves(), 0);
    assert_eq!(board.num_jumps(), 0);
    assert_eq!(board.winner(), None);
    assert!(board.all_moves().is_empty());
    assert_eq!(board.total_open(), 49);
    assert_conserved(&board);
}

#[test]
fn test_off_board_reads_blocked() {
    let board = Board::new();
    assert_eq!(board.get(Square { col: 7, row: 0 }), PieceColor::Blocked);
    assert_eq!(board.get(Square { col: 0, row: 200 }), PieceColor::Blocked);
}

#[test]
fn test_render() {
    let board = Board::new();
    let expected = concat!(
        "  r - - - - - b\n",
        "  - - - - - - -\n",
        "  - - - - - - -\n",
        "  - - - - - - -\n",
        "  - - - - - - -\n",
        "  - - - - - - -\n",
        "  b - - - - - r\n",
    );
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_render_legend() {
    let mut board = Board::new();
    board.set_block(sq("c3")).unwrap();
    let expected = concat!(
        "7  r - - - - - b\n",
        "6  - - - - - - -\n",
        "5  - - X - X - -\n",
        "4  - - - - - - -\n",
        "3  - - X - X - -\n",
        "2  - - - - - - -\n",
        "1  b - - - - - r\n",
        "   a b c d e f g",
    );
    assert_eq!(board.to_string_with_legend(true), expected);
}

#[test]
fn test_initial_legality() {
    let board = Board::new();
    assert!(board.legal_move(mv("a7-a6")));
    assert!(board.legal_move(mv("a7-c5")));
    assert!(!board.legal_move(mv("a1-a1")));
    // Blue piece, red to move
    assert!(!board.legal_move(mv("a1-a2")));
    // Three columns away
    assert!(!board.legal_move(mv("a7-d7")));
    // Source empty
    assert!(!board.legal_move(mv("b2-b3")));
    // Pass while moves exist
    assert!(!board.legal_move(Move::Pass));
}

#[test]
fn test_fabricated_off_board_move_illegal() {
    let board = Board::new();
    let bad = Move::step(sq("g1"), Square { col: 8, row: 0 });
    assert!(!board.legal_move(bad));
    let bad = Move::step(Square { col: 9, row: 9 }, sq("g1"));
    assert!(!board.legal_move(bad));
}

#[test]
fn test_extend_adds_piece() {
    let mut board = Board::new();
    board.make_move(mv("a7-a6")).unwrap();
    assert_eq!(board.get(sq("a7")), PieceColor::Red);
    assert_eq!(board.get(sq("a6")), PieceColor::Red);
    assert_eq!(board.red_pieces(), 3);
    assert_eq!(board.whose_move(), PieceColor::Blue);
    assert_eq!(board.num_moves(), 1);
    assert_eq!(board.num_jumps(), 0);
    assert_conserved(&board);
}

#[test]
fn test_jump_relocates_piece() {
    let mut board = Board::new();
    board.make_move(mv("a7-a5")).unwrap();
    assert_eq!(board.get(sq("a7")), PieceColor::Empty);
    assert_eq!(board.get(sq("a5")), PieceColor::Red);
    assert_eq!(board.red_pieces(), 2);
    assert_eq!(board.num_jumps(), 1);
    assert_conserved(&board);
}

#[test]
fn test_capture_scenario() {
    let mut board = Board::new();
    board.put(sq("b7"), PieceColor::Blue);
    assert_eq!(board.blue_pieces(), 3);

    board.make_move(mv("a7-b6")).unwrap();
    assert_eq!(board.get(sq("b7")), PieceColor::Red);
    assert_eq!(board.red_pieces(), 4);
    assert_eq!(board.blue_pieces(), 2);
    assert_conserved(&board);
}

#[test]
fn test_illegal_move_rejected() {
    let mut board = Board::new();
    let before = snapshot(&board);
    assert!(matches!(
        board.make_move(mv("a1-a2")),
        Err(crate::GameError::IllegalMove(_))
    ));
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_make_move_str() {
    let mut board = Board::new();
    board.make_move_str("g1-f2").unwrap();
    assert_eq!(board.get(sq("f2")), PieceColor::Red);
    assert!(board.make_move_str("nonsense").is_err());
}

#[test]
fn test_undo_restores_everything() {
    let mut board = Board::new();
    board.put(sq("b7"), PieceColor::Blue);
    let before = snapshot(&board);
    board.make_move(mv("a7-b6")).unwrap();
    board.undo().unwrap();
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_undo_extend_restores_jump_run() {
    let mut board = Board::new();
    board.make_move(mv("a7-a5")).unwrap();
    board.make_move(mv("a1-a3")).unwrap();
    assert_eq!(board.num_jumps(), 2);
    board.make_move(mv("g1-g2")).unwrap();
    assert_eq!(board.num_jumps(), 0);
    board.undo().unwrap();
    assert_eq!(board.num_jumps(), 2);
    board.undo().unwrap();
    assert_eq!(board.num_jumps(), 1);
}

#[test]
fn test_undo_with_no_moves() {
    let mut board = Board::new();
    assert!(matches!(board.undo(), Err(crate::GameError::NothingToUndo)));
}

#[test]
fn test_random_playouts_undo_inverse() {
    let mut rng = StdRng::seed_from_u64(61);
    for _ in 0..20 {
        let mut board = Board::new();
        let mut history = vec![snapshot(&board)];
        while !board.is_game_over() && board.num_moves() < 80 {
            let moves = enumerate_moves(&board);
            let choice = *moves.choose(&mut rng).unwrap();
            board.make_move(choice).unwrap();
            assert_conserved(&board);
            history.push(snapshot(&board));
        }
        history.pop();
        while let Some(expected) = history.pop() {
            board.undo().unwrap();
            assert_conserved(&board);
            assert_eq!(snapshot(&board), expected);
        }
        assert_eq!(board, Board::new());
    }
}

/// Red shuttles a7<->a5 and blue a1<->a3; none of these squares touch.
fn shuttle(n: usize, blue_first: bool) -> Vec<Move> {
    let red = [mv("a7-a5"), mv("a5-a7")];
    let blue = [mv("a1-a3"), mv("a3-a1")];
    (0..n)
        .map(|i| {
            let (side, k) = if (i % 2 == 0) != blue_first { (&red, i / 2) } else { (&blue, i / 2) };
            side[k % 2]
        })
        .collect()
}

#[test]
fn test_jump_limit_draw() {
    let mut board = Board::new();
    for m in shuttle(24, false) {
        board.make_move(m).unwrap();
    }
    assert_eq!(board.num_jumps(), 24);
    assert_eq!(board.winner(), None);

    board.make_move(mv("a7-a5")).unwrap();
    assert_eq!(board.num_jumps(), JUMP_LIMIT);
    assert_eq!(board.winner(), Some(PieceColor::Empty));
    assert!(board.can_move(PieceColor::Red) && board.can_move(PieceColor::Blue));
}

#[test]
fn test_jump_limit_majority_wins() {
    let mut board = Board::new();
    board.make_move(mv("g1-g2")).unwrap();
    for m in shuttle(25, true) {
        assert_eq!(board.winner(), None);
        board.make_move(m).unwrap();
    }
    assert_eq!(board.winner(), Some(PieceColor::Red));

    board.undo().unwrap();
    assert_eq!(board.num_jumps(), 24);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_terminal_monotonic() {
    let mut board = Board::new();
    for m in shuttle(25, false) {
        board.make_move(m).unwrap();
    }
    let winner = board.winner();
    assert!(winner.is_some());
    assert!(!board.legal_move(Move::Pass));
    for from in Square::all() {
        for to in Square::all() {
            assert!(!board.legal_move(Move::step(from, to)));
        }
    }
    assert!(board.make_move(mv("a1-b1")).is_err());
    assert_eq!(board.winner(), winner);
}

/// Red left with one boxed-in piece on a7
fn boxed_red() -> Board {
    let mut board = Board::new();
    board.put(sq("g1"), PieceColor::Empty);
    for name in ["a5", "a6", "b5", "b6", "b7", "c5", "c6", "c7"] {
        board.put(sq(name), PieceColor::Blue);
    }
    board
}

#[test]
fn test_pass_when_blocked_in() {
    let mut board = boxed_red();
    assert!(!board.can_move(PieceColor::Red));
    assert!(board.can_move(PieceColor::Blue));
    assert_eq!(board.winner(), None);
    assert!(board.legal_move(Move::Pass));
    assert_eq!(enumerate_moves(&board), vec![Move::Pass]);

    let before = snapshot(&board);
    board.make_move(Move::Pass).unwrap();
    assert_eq!(board.whose_move(), PieceColor::Blue);
    assert_eq!(board.num_moves(), 1);
    assert_eq!(board.num_jumps(), 0);
    assert_eq!(board.red_pieces(), before.red);
    assert_eq!(board.all_moves(), &[Move::Pass]);

    board.undo().unwrap();
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_pass_with_moves_fails() {
    let mut board = Board::new();
    assert!(matches!(board.pass(), Err(crate::GameError::PassWithLegalMove)));
    assert!(matches!(
        board.make_move(Move::Pass),
        Err(crate::GameError::IllegalMove(Move::Pass))
    ));
    assert_eq!(board.num_moves(), 0);
}

#[test]
fn test_pass_after_game_over_fails() {
    let mut board = Board::new();
    board.put(sq("a7"), PieceColor::Empty);
    board.put(sq("g1"), PieceColor::Empty);
    assert_eq!(board.winner(), Some(PieceColor::Blue));
    assert!(!board.can_move(PieceColor::Red));

    assert!(matches!(
        board.pass(),
        Err(crate::GameError::IllegalMove(Move::Pass))
    ));
    assert_eq!(board.num_moves(), 0);
    assert!(board.all_moves().is_empty());
}

#[test]
fn test_off_board_square_display() {
    let wild = Square { col: 200, row: 0 };
    assert_eq!(wild.to_string(), "(200,0)");
    assert_eq!(Square { col: 3, row: 9 }.to_string(), "(3,9)");
    assert_eq!(sq("g1").to_string(), "g1");

    let mut board = Board::new();
    let err = board.make_move(Move::step(sq("g1"), wild)).unwrap_err();
    assert_eq!(err.to_string(), "Illegal move: g1-(200,0)");
    assert_eq!(board.num_moves(), 0);
}

#[test]
fn test_set_block_mirrors() {
    let mut board = Board::new();
    board.set_block(sq("b6")).unwrap();
    for name in ["b6", "f6", "b2", "f2"] {
        assert_eq!(board.get(sq(name)), PieceColor::Blocked, "{name}");
    }
    assert_eq!(board.total_open(), 45);

    board.set_block(sq("d5")).unwrap();
    assert_eq!(board.get(sq("d3")), PieceColor::Blocked);
    assert_eq!(board.total_open(), 43);
    assert_conserved(&board);
}

#[test]
fn test_illegal_blocks() {
    let mut board = Board::new();
    assert!(!board.legal_block(sq("a1")));
    assert!(board.set_block(sq("a7")).is_err());

    board.set_block(sq("c3")).unwrap();
    assert!(!board.legal_block(sq("c3")));
    assert!(!board.legal_block(sq("e5")));

    board.make_move(mv("a7-a6")).unwrap();
    assert!(!board.legal_block(sq("d4")));
    assert!(!board.legal_block_str("d4"));
    assert!(matches!(
        board.set_block_str("d4"),
        Err(crate::GameError::IllegalBlock(_))
    ));
}

#[test]
fn test_blocks_sealing_corners_draw() {
    let mut board = Board::new();
    let seal = ["a2", "a3", "b1", "b2", "b3", "c1", "c2", "c3"];
    for name in &seal[..seal.len() - 1] {
        board.set_block_str(name).unwrap();
        assert_eq!(board.winner(), None);
    }
    board.set_block_str("c3").unwrap();
    assert!(!board.can_move(PieceColor::Red));
    assert!(!board.can_move(PieceColor::Blue));
    assert_eq!(board.winner(), Some(PieceColor::Empty));
}

#[test]
fn test_blocks_survive_play_and_undo() {
    let mut board = Board::new();
    board.set_block(sq("b6")).unwrap();
    assert!(!board.legal_move(mv("a7-b6")));
    board.make_move(mv("a7-a6")).unwrap();
    board.undo().unwrap();
    assert_eq!(board.get(sq("b6")), PieceColor::Blocked);
    assert!(board.legal_block(sq("c3")));
}

#[test]
fn test_clear_resets() {
    let mut board = Board::new();
    board.set_block(sq("c3")).unwrap();
    board.make_move(mv("a7-a6")).unwrap();
    board.clear();
    assert_eq!(board, Board::new());
    assert_eq!(snapshot(&board), snapshot(&Board::new()));
    assert!(matches!(board.undo(), Err(crate::GameError::NothingToUndo)));
}

#[test]
fn test_copy_is_independent() {
    let mut live = Board::new();
    live.make_move(mv("a7-a5")).unwrap();
    live.make_move(mv("a1-b2")).unwrap();

    let mut copy = Board::from_board(&live);
    assert_eq!(copy, live);
    assert_eq!(copy.whose_move(), live.whose_move());
    assert_eq!(copy.num_jumps(), live.num_jumps());
    assert_eq!(copy.red_pieces(), live.red_pieces());
    assert!(copy.all_moves().is_empty());
    assert!(copy.undo().is_err());

    copy.make_move(mv("g1-f1")).unwrap();
    assert_ne!(copy, live);
    assert_eq!(live.get(sq("f1")), PieceColor::Empty);
    assert_eq!(live.all_moves().len(), 2);
}

#[test]
fn test_scoped_move_restores() {
    let mut board = Board::new();
    let before = snapshot(&board);
    let red = board
        .scoped_move(mv("a7-b6"), |b| Ok(b.red_pieces()))
        .unwrap();
    assert_eq!(red, 3);
    assert_eq!(snapshot(&board), before);

    let err: crate::AtaxxResult<()> =
        board.scoped_move(mv("a7-b6"), |_| Err(crate::GameError::NothingToUndo));
    assert!(err.is_err());
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_notifier_fires_on_changes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut board = Board::new();
    board.set_notifier(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    board.set_block(sq("c3")).unwrap();
    board.make_move(mv("a7-a6")).unwrap();
    board.undo().unwrap();
    board.clear();
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    // Rejected operations are not changes
    let _ = board.make_move(mv("a1-a2"));
    let _ = board.undo();
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    board.clear_notifier();
    board.make_move(mv("a7-a6")).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn test_notifier_sees_committed_state() {
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);
    let mut board = Board::new();
    board.set_notifier(move |b| sink.store(b.red_pieces() as usize, Ordering::SeqCst));
    board.make_move(mv("a7-b6")).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 3);
}
