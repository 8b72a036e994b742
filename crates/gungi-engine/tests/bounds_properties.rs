//! Property tests for bounds checking and placement atomicity.

use gungi_core::{Coord, Piece, PieceType, Rank, Side};
use gungi_engine::{Action, Board};
use proptest::prelude::*;

/// Any `i32`, weighted toward values near a small board.
fn coordinate() -> impl Strategy<Value = i32> {
    prop_oneof![-20i32..40, any::<i32>(), Just(i32::MIN), Just(i32::MAX)]
}

proptest! {
    #[test]
    fn within_bounds_matches_range(dimension in 1u8..16, x in coordinate(), y in coordinate()) {
        let board = Board::new(dimension);
        let d = i32::from(dimension);
        let expected = (0..d).contains(&x) && (0..d).contains(&y);
        prop_assert_eq!(board.within_bounds(Coord::new(x, y)), expected);
        prop_assert_eq!(board.stack_height(Coord::new(x, y)).is_ok(), expected);
    }

    #[test]
    fn can_move_rejects_off_board_targets(
        kind in 0..PieceType::ALL.len(),
        rank in 0u8..3,
        fx in 0i32..9,
        fy in 0i32..9,
        x in coordinate(),
        y in coordinate(),
    ) {
        let mut board = Board::new(9);
        let from = Coord::new(fx, fy);
        let mover = Piece::new(Side::Second, PieceType::ALL[kind]).with_rank(Rank::new(rank).unwrap());
        board.set_piece(mover, from).unwrap();
        let mover = board.get_piece(from, None).unwrap().unwrap();

        let to = Coord::new(x, y);
        if !board.within_bounds(to) {
            prop_assert!(!board.can_move(mover, to));
        }
    }

    #[test]
    fn rejected_placement_leaves_board_unchanged(
        kind in 0..PieceType::ALL.len(),
        rank in 0u8..3,
        height in 0usize..4,
        x in 0i32..9,
        y in 0i32..9,
        action in 0..Action::ALL.len(),
    ) {
        let mut board = Board::new(9);
        for _ in 0..height {
            board.set_piece(Piece::new(Side::Second, PieceType::Hyou), Coord::new(x, y)).unwrap();
        }
        let from = Coord::new(4, 4);
        prop_assume!(from != Coord::new(x, y));
        let mover = Piece::new(Side::First, PieceType::ALL[kind]).with_rank(Rank::new(rank).unwrap());
        board.set_piece(mover, from).unwrap();

        let before = board.clone();
        let legal = board.can_move(board.get_piece(from, None).unwrap().unwrap(), Coord::new(x, y));
        let outcome = board.place_piece(from, Coord::new(x, y), Action::ALL[action]).unwrap();
        if !outcome.is_applied() {
            prop_assert_eq!(&board, &before);
        } else {
            prop_assert!(legal);
            prop_assert!(board.stack_height(Coord::new(x, y)).unwrap() < Board::HEIGHT_LIMIT);
            prop_assert_eq!(board.stack_height(from).unwrap(), 0);
        }
    }
}
