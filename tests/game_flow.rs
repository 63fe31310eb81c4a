// tests/game_flow.rs
use rust_chess_rules::{
    board_snapshot, is_active, last_move, move_log, new_game, submit, winner, CheckStatus, Color, Game, GameResult,
    MoveError, Outcome, PieceId, PieceType, Position, Rejection, Variant, WinReason, Winner,
};

fn sq(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        match submit(game, text) {
            Outcome::Accepted(_) => {}
            other => panic!("'{text}' was not accepted: {other:?}"),
        }
    }
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = new_game();
    play(&mut game, &["f2 f3", "e7 e5", "g2 g4"]);
    assert!(is_active(&game));
    assert_eq!(winner(&game), None);

    assert_eq!(submit(&mut game, "d8 h4"), Outcome::GameOver(GameResult::Win(Color::Black, WinReason::Checkmate)));
    assert!(!is_active(&game));
    assert_eq!(winner(&game), Some(Winner::Side(Color::Black)));
    assert_eq!(game.board().winner(), Some(Color::Black));
    assert_eq!(last_move(&game).map(|m| m.end()), Some(sq("h4")));

    // Terminal states are absorbing.
    for text in ["a2 a3", "resign", "draw", "nonsense"] {
        assert_eq!(
            submit(&mut game, text),
            Outcome::GameOver(GameResult::Win(Color::Black, WinReason::Checkmate)),
            "{text}"
        );
    }
    assert_eq!(move_log(&game).len(), 4);
}

#[test]
fn en_passant_removes_the_double_stepped_pawn() {
    let mut game = new_game();
    play(&mut game, &["a2 a3", "d7 d5", "a3 a4", "d5 d4", "e2 e4"]);
    let Outcome::Accepted(report) = submit(&mut game, "d4 e3") else { panic!("en passant refused") };

    assert_eq!(report.captured, Some(PieceId::new(Color::White, Variant::Pawn4)));
    let snapshot = board_snapshot(&game);
    assert!(snapshot.get(sq("e4")).is_none());
    assert!(snapshot.get(sq("d4")).is_none());
    let e3 = snapshot.get(sq("e3")).unwrap();
    assert_eq!((e3.color, e3.piece_type), (Color::Black, PieceType::Pawn));
    assert!(!game.board().piece(PieceId::new(Color::White, Variant::Pawn4)).is_alive());
}

#[test]
fn en_passant_expires_after_one_turn() {
    let mut game = new_game();
    play(&mut game, &["a2 a3", "d7 d5", "a3 a4", "d5 d4", "e2 e4", "h7 h6", "h2 h3"]);
    assert_eq!(
        submit(&mut game, "d4 e3"),
        Outcome::Rejected(Rejection::Illegal(MoveError::IllegalMove {
            piece: "Black Pawn (4)".to_string(),
            from: sq("d4"),
            to: sq("e3"),
        }))
    );
}

#[test]
fn pawn_promotes_to_a_queen() {
    let mut game = new_game();
    play(&mut game, &["h2 h4", "g7 g5", "h4 g5", "g8 f6", "g5 g6", "f6 e4", "g6 g7", "e4 c3"]);
    let Outcome::Accepted(report) = submit(&mut game, "g7 h8 Q") else { panic!("promotion refused") };
    assert_eq!(report.promoted, Some(Variant::Queen));

    let snapshot = board_snapshot(&game);
    let h8 = snapshot.get(sq("h8")).unwrap();
    assert_eq!((h8.variant, h8.piece_type, h8.color), (Variant::Queen, PieceType::Queen, Color::White));
    let slot = game.board().piece(PieceId::new(Color::White, Variant::Pawn6));
    assert!(!slot.is_pawn());
    assert_eq!(slot.position(), sq("h8"));
}

#[test]
fn pawn_without_letter_becomes_a_queen_by_default() {
    let mut game = new_game();
    play(&mut game, &["h2 h4", "g7 g5", "h4 g5", "g8 f6", "g5 g6", "f6 e4", "g6 g7", "e4 c3"]);
    let Outcome::Accepted(report) = submit(&mut game, "g7 g8") else { panic!("promotion refused") };
    assert_eq!(report.promoted, Some(Variant::Queen));
    assert!(!game.promotion_pending(Color::White));
}

#[test]
fn only_the_king_may_answer_check() {
    let mut game = new_game();
    play(&mut game, &["e2 e4", "e7 e5", "d1 h5", "d7 d6"]);
    let Outcome::Accepted(report) = submit(&mut game, "h5 f7") else { panic!("queen move refused") };
    assert_eq!(report.status, CheckStatus::Check(Color::Black));
    assert_eq!(game.board().in_check(), Some(Color::Black));
    assert_eq!(game.board().escape_squares(), &[sq("f7")]);

    assert_eq!(
        submit(&mut game, "g8 f6"),
        Outcome::Rejected(Rejection::Illegal(MoveError::MustEscapeCheck(Color::Black)))
    );
    assert_eq!(
        submit(&mut game, "e8 e7"),
        Outcome::Rejected(Rejection::Illegal(MoveError::MustEscapeCheck(Color::Black)))
    );

    let Outcome::Accepted(report) = submit(&mut game, "e8 f7") else { panic!("king escape refused") };
    assert_eq!(report.captured, Some(PieceId::new(Color::White, Variant::Queen)));
    assert_eq!(game.board().in_check(), None);
}

#[test]
fn a_check_only_blockable_by_other_pieces_is_mate() {
    let mut game = new_game();
    play(&mut game, &["e2 e4", "f7 f6"]);
    assert_eq!(submit(&mut game, "d1 h5"), Outcome::GameOver(GameResult::Win(Color::White, WinReason::Checkmate)));
}

#[test]
fn draw_offer_and_resignation_through_text() {
    let mut game = new_game();
    play(&mut game, &["e2 e4 draw?"]);
    assert!(game.last_input().with_draw);
    play(&mut game, &["e7 e5"]);
    assert!(matches!(submit(&mut game, "draw"), Outcome::Rejected(_)));
    assert_eq!(submit(&mut game, "resign"), Outcome::GameOver(GameResult::Win(Color::Black, WinReason::Resignation)));
    assert_eq!(winner(&game), Some(Winner::Side(Color::Black)));
}
