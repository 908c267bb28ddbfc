use bitcheckers::domain::board::BoardState;
use bitcheckers::domain::models::Player;
use bitcheckers::domain::rules::Rules;

#[test]
fn each_side_opens_with_twelve_men() {
    assert_eq!(BoardState::generate_start(Player::Red).count(), 12);
    assert_eq!(BoardState::generate_start(Player::Black).count(), 12);
}

#[test]
fn opening_sides_are_disjoint() {
    let red = BoardState::generate_start(Player::Red);
    let black = BoardState::generate_start(Player::Black);
    assert!((red & black).is_empty());
}

#[test]
fn red_fills_rows_near_rank_one_black_near_rank_eight() {
    let board = BoardState::new();
    for square in board.red_pieces.iter_squares() {
        assert!(square.row() < 3, "red man at {square}");
        assert!(square.is_playable());
    }
    for square in board.black_pieces.iter_squares() {
        assert!(square.row() > 4, "black man at {square}");
        assert!(square.is_playable());
    }
}

#[test]
fn opening_position_is_not_terminal() {
    let board = BoardState::new();
    assert_eq!(Rules::check_win(&board), None);
    assert_eq!(board.turn, Player::Red);
}
