//! Board tests: collision, locking, row clearing and overflow.

use blockwell::game::{Board, Cell, Piece, Rgb, ShapeKind};

const GRAY: Rgb = Rgb(128, 128, 128);
const W: usize = 10;
const H: usize = 20;

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..W as i32 {
        board.set(x, y, GRAY);
    }
}

#[test]
fn test_piece_inside_empty_well_is_valid() {
    let board = Board::new(W, H);
    let piece = Piece::new(ShapeKind::T, 3, 5);
    assert!(board.is_valid(&piece));
}

#[test]
fn test_piece_past_either_wall_is_invalid() {
    let board = Board::new(W, H);
    let left = Piece::new(ShapeKind::O, 0, 5);
    assert!(board.is_valid(&left));
    assert!(!board.is_valid(&left.shifted(-1, 0)));

    let right = Piece::new(ShapeKind::O, W as i32 - 2, 5);
    assert!(board.is_valid(&right));
    assert!(!board.is_valid(&right.shifted(1, 0)));
}

#[test]
fn test_piece_overlapping_locked_cell_is_invalid() {
    let mut board = Board::new(W, H);
    board.set(5, 6, GRAY);
    assert!(!board.is_valid(&Piece::new(ShapeKind::O, 4, 5)));
    assert!(board.is_valid(&Piece::new(ShapeKind::O, 6, 5)));
}

#[test]
fn test_lock_writes_piece_color() {
    let mut board = Board::new(W, H);
    let piece = Piece::new(ShapeKind::O, 4, 0);
    assert_eq!(piece.occupied_cells(), vec![(4, 0), (5, 0), (4, 1), (5, 1)]);

    board.lock(&piece);
    let color = ShapeKind::O.color();
    for (x, y) in piece.occupied_cells() {
        assert_eq!(board.locked().get(&(x, y)), Some(&color));
    }
    assert_eq!(board.get(4, 0), Cell::Filled(color));
    assert!(board.is_loss());
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::new(W, H);
    fill_row(&mut board, 17);
    board.set(2, 16, Rgb(1, 1, 1));
    board.set(7, 12, Rgb(2, 2, 2));
    board.set(3, 18, Rgb(3, 3, 3));
    board.set(4, 19, Rgb(4, 4, 4));

    assert_eq!(board.clear_full_rows(), 1);

    assert!((0..W as i32).all(|x| board.get(x, 17) != Cell::Filled(GRAY)));
    assert_eq!(board.get(2, 17), Cell::Filled(Rgb(1, 1, 1)));
    assert_eq!(board.get(2, 16), Cell::Empty);
    assert_eq!(board.get(7, 13), Cell::Filled(Rgb(2, 2, 2)));
    // below the cleared row nothing moves
    assert_eq!(board.get(3, 18), Cell::Filled(Rgb(3, 3, 3)));
    assert_eq!(board.get(4, 19), Cell::Filled(Rgb(4, 4, 4)));
    assert_eq!(board.locked().len(), 4);
}

#[test]
fn test_clear_multiple_rows_shifts_by_total() {
    let mut board = Board::new(W, H);
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    fill_row(&mut board, 17);
    board.set(0, 16, Rgb(9, 9, 9));
    board.set(1, 10, Rgb(8, 8, 8));

    assert_eq!(board.clear_full_rows(), 3);
    assert_eq!(board.get(0, 19), Cell::Filled(Rgb(9, 9, 9)));
    assert_eq!(board.get(1, 13), Cell::Filled(Rgb(8, 8, 8)));
    assert_eq!(board.locked().len(), 2);
}

#[test]
fn test_clear_nothing_leaves_board_unchanged() {
    let mut board = Board::new(W, H);
    for x in 0..W as i32 - 1 {
        board.set(x, 19, GRAY);
    }
    board.set(3, 4, Rgb(5, 5, 5));
    let before = board.locked().clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board.locked(), &before);
}

#[test]
fn test_is_loss_tracks_top_row() {
    let mut board = Board::new(W, H);
    assert!(!board.is_loss());
    for y in 1..H as i32 {
        board.set(0, y, GRAY);
    }
    assert!(!board.is_loss());
    board.set(5, 0, GRAY);
    assert!(board.is_loss());
}

#[test]
fn test_grid_projection_matches_locked_set() {
    let mut board = Board::new(W, H);
    board.set(0, 0, GRAY);
    board.set(9, 19, Rgb(1, 2, 3));
    let grid = board.grid();
    assert_eq!(grid.width, W);
    assert_eq!(grid.height, H);
    assert_eq!(grid.get(0, 0), Cell::Filled(GRAY));
    assert_eq!(grid.get(9, 19), Cell::Filled(Rgb(1, 2, 3)));
    assert_eq!(grid.cells.iter().filter(|c| c.is_filled()).count(), 2);
}
