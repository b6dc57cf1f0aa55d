use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_from_player() {
    assert_eq!(Stone::from(Player::Black), Stone::Black);
    assert_eq!(Stone::from(Player::White), Stone::White);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);
    assert_eq!(Pos::from_index(112, 15), pos);
}

#[test]
fn test_pos_offset_stops_at_edge() {
    let corner = Pos::new(0, 14);
    assert_eq!(corner.offset(0, 1, 1, 15), None);
    assert_eq!(corner.offset(-1, 0, 1, 15), None);
    assert_eq!(corner.offset(1, -1, 2, 15), Some(Pos::new(2, 12)));
}

#[test]
fn test_bounds() {
    assert!(is_in_bounds(0, 0, 15));
    assert!(is_in_bounds(14, 14, 15));
    assert!(!is_in_bounds(-1, 0, 15));
    assert!(!is_in_bounds(0, -1, 15));
    assert!(!is_in_bounds(15, 0, 15));
    assert!(!is_in_bounds(0, 15, 15));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    for row in 0..15 {
        for col in 0..15 {
            assert!(board.is_empty(row, col));
        }
    }
}

#[test]
fn test_is_empty_out_of_bounds_is_false() {
    let board = Board::new();
    assert!(!board.is_empty(-1, 3));
    assert!(!board.is_empty(3, 15));
    assert_eq!(board.stone_at(15, 15), None);
}

#[test]
fn test_place_sets_cell() {
    let mut board = Board::new();
    board.place(Pos::new(3, 4), Player::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert!(!board.is_empty(3, 4));
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.positions(Player::White).collect::<Vec<_>>(), vec![Pos::new(3, 4)]);
    assert_eq!(board.positions(Player::Black).count(), 0);
}

#[test]
fn test_is_full_small_board() {
    let mut board = Board::with_size(5);
    let mut player = Player::Black;
    for row in 0..5u8 {
        for col in 0..5u8 {
            assert!(!board.is_full());
            board.place(Pos::new(row, col), player);
            player = player.opponent();
        }
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 25);
}
