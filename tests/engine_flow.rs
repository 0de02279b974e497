use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use arcade_chess::game_state::chess_rules::STARTING_PLACEMENT;
use arcade_chess::utils::fen_generator::generate_placement;
use arcade_chess::utils::snapshot::MemoryStore;
use arcade_chess::{
    ChessEngine, Color, EngineConfig, GameStatus, MoveLegality, PieceKind, Position, SelectOutcome,
};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).expect("test square on board")
}

fn started(config: EngineConfig) -> ChessEngine {
    let mut engine = ChessEngine::with_config(config);
    engine.initialize();
    engine
}

fn all_moves(engine: &ChessEngine) -> Vec<(Position, Position)> {
    engine
        .board()
        .pieces_of(engine.current_turn())
        .flat_map(|(from, _)| {
            engine
                .valid_moves(from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

#[test]
fn initial_setup_is_the_standard_position() {
    let engine = started(EngineConfig::default());

    assert_eq!(engine.board().count(Color::White), 16);
    assert_eq!(engine.board().count(Color::Black), 16);
    assert_eq!(generate_placement(engine.board()), STARTING_PLACEMENT);
    assert_eq!(engine.current_turn(), Color::White);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine.history().is_empty());
    assert!(engine.captured().is_empty());
    assert_eq!(engine.last_move(), None);

    let king = engine.board().get(pos(7, 4)).expect("white king on e1");
    assert_eq!((king.kind, king.color), (PieceKind::King, Color::White));
    let queen = engine.board().get(pos(0, 3)).expect("black queen on d8");
    assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::Black));
}

#[test]
fn turns_alternate_only_on_success() {
    let mut engine = started(EngineConfig::default());

    assert!(engine.move_piece(pos(6, 4), pos(4, 4)));
    assert_eq!(engine.current_turn(), Color::Black);
    assert!(!engine.move_piece(pos(6, 3), pos(4, 3)));
    assert_eq!(engine.current_turn(), Color::Black);
    assert!(engine.move_piece(pos(1, 4), pos(3, 4)));
    assert_eq!(engine.current_turn(), Color::White);
    assert_eq!(engine.last_move().map(|m| (m.from, m.to)), Some((pos(1, 4), pos(3, 4))));
}

#[test]
fn failed_move_changes_nothing() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(6, 4), pos(4, 4)));
    let before = engine.state().clone();

    assert!(!engine.move_piece(pos(0, 0), pos(7, 7)));
    assert!(!engine.move_piece(pos(4, 4), pos(3, 4)));
    assert!(!engine.move_piece(pos(4, 3), pos(3, 3)));

    assert_eq!(engine.state(), &before);
}

#[test]
fn pawn_double_step_needs_both_squares_empty() {
    let engine = started(EngineConfig::default());
    let mut moves = engine.valid_moves(pos(6, 4));
    moves.sort();
    assert_eq!(moves, vec![pos(4, 4), pos(5, 4)]);

    let blocked = ChessEngine::from_placement("4k3/8/8/8/8/4n3/4P3/4K3 w", EngineConfig::default())
        .expect("placement parses");
    assert!(blocked.valid_moves(pos(6, 4)).is_empty());
}

#[test]
fn sliders_stop_before_own_pieces() {
    let engine = started(EngineConfig::default());
    for corner in [pos(7, 0), pos(7, 7)] {
        assert!(engine.valid_moves(corner).is_empty());
    }
    assert!(engine.valid_moves(pos(7, 2)).is_empty());
    assert!(engine.valid_moves(pos(7, 3)).is_empty());
}

#[test]
fn knight_move_history_entry() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(7, 1), pos(5, 0)));
    assert_eq!(engine.history().notation(0).as_deref(), Some("Nb1-a3"));
    assert_eq!(engine.history().numbered_lines(), vec!["1. Nb1-a3".to_owned()]);
}

#[test]
fn capture_is_attributed_to_the_captured_color() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(6, 4), pos(4, 4)));
    assert!(engine.move_piece(pos(1, 3), pos(3, 3)));
    assert!(engine.move_piece(pos(4, 4), pos(3, 3)));

    let captured = engine.captured();
    assert_eq!(captured.black.len(), 1);
    assert_eq!(captured.black[0].kind, PieceKind::Pawn);
    assert!(captured.white.is_empty());
    assert_eq!(captured.material_balance(), 1);
    assert_eq!(engine.board().count(Color::Black), 15);
    let last_capture = engine.history().last().and_then(|r| r.captured);
    assert_eq!(last_capture.map(|p| p.color), Some(Color::Black));
}

#[test]
fn click_sequence_plays_a_move() {
    let mut engine = started(EngineConfig::default());

    assert_eq!(engine.select_square(pos(7, 6)), SelectOutcome::Selected(pos(7, 6)));
    let outcome = engine.select_square(pos(5, 5));
    assert!(matches!(outcome, SelectOutcome::Moved(record) if record.to_string() == "Ng1-f3"));
    assert_eq!(engine.current_turn(), Color::Black);
}

#[test]
fn clicking_an_enemy_square_captures() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(6, 4), pos(4, 4)));
    assert!(engine.move_piece(pos(1, 3), pos(3, 3)));

    assert_eq!(engine.select_square(pos(4, 4)), SelectOutcome::Selected(pos(4, 4)));
    let outcome = engine.select_square(pos(3, 3));

    let SelectOutcome::Moved(record) = outcome else {
        panic!("expected exd5 to be played, got {outcome:?}");
    };
    assert_eq!(record.to_string(), "Pe4-d5");
    assert_eq!(record.captured.map(|p| (p.kind, p.color)), Some((PieceKind::Pawn, Color::Black)));
    assert_eq!(engine.captured().black.len(), 1);
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.current_turn(), Color::Black);
}

#[test]
fn king_taking_the_last_rook_is_a_draw() {
    let mut engine =
        ChessEngine::from_placement("4k3/8/8/8/8/8/3r4/4K3 w", EngineConfig::default())
            .expect("placement parses");

    assert!(engine.move_piece(pos(7, 4), pos(6, 3)));
    assert_eq!(engine.status(), GameStatus::Draw);
    assert!(engine.is_game_over());
    assert_eq!(engine.captured().black[0].kind, PieceKind::Rook);
}

#[test]
fn quiet_move_leaving_no_reply_is_stalemate() {
    const WALLED_KING: &str = "4K3/8/8/3R4/8/8/6pp/6pk w";

    let mut engine = ChessEngine::from_placement(WALLED_KING, EngineConfig::default())
        .expect("placement parses");
    assert!(engine.move_piece(pos(3, 3), pos(3, 2)));
    assert!(!engine.is_in_check(Color::Black));
    assert_eq!(engine.status(), GameStatus::Stalemate);
    assert!(engine.is_game_over());

    let no_stalemate = EngineConfig {
        detect_stalemate: false,
        ..EngineConfig::default()
    };
    let mut engine =
        ChessEngine::from_placement(WALLED_KING, no_stalemate).expect("placement parses");
    assert!(engine.move_piece(pos(3, 3), pos(3, 2)));
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn smothered_mate_ends_in_checkmate() {
    let mut engine =
        ChessEngine::from_placement("4K3/8/8/8/4N3/8/6pp/6pk w", EngineConfig::default())
            .expect("placement parses");

    assert!(engine.move_piece(pos(4, 4), pos(5, 6)));
    assert_eq!(engine.status(), GameStatus::Checkmate);
    assert_eq!(engine.current_turn(), Color::Black);
    assert!(engine.is_game_over());
}

#[test]
fn supported_queen_mates_with_legal_generation() {
    let config = EngineConfig {
        legality: MoveLegality::Legal,
        ..EngineConfig::default()
    };
    let mut engine =
        ChessEngine::from_placement("k7/7Q/2K5/8/8/8/8/8 w", config).expect("placement parses");

    // Qh7-b7, protected by the king on c6.
    assert!(engine.move_piece(pos(1, 7), pos(1, 1)));
    assert!(engine.is_in_check(Color::Black));
    assert_eq!(engine.status(), GameStatus::Checkmate);
}

#[test]
fn reset_waits_and_initialize_starts_again() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(6, 0), pos(5, 0)));

    engine.reset_game();
    assert_eq!(engine.status(), GameStatus::Waiting);
    assert!(engine.history().is_empty());
    assert_eq!(engine.current_turn(), Color::White);

    engine.initialize();
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn snapshot_restores_mid_game_session() {
    let mut engine = started(EngineConfig::default());
    assert!(engine.move_piece(pos(6, 4), pos(4, 4)));
    assert!(engine.move_piece(pos(0, 6), pos(2, 5)));

    let mut store = MemoryStore::new();
    engine.save_to(&mut store).expect("snapshot saves");

    let mut resumed = ChessEngine::new();
    resumed.restore_from(&store).expect("snapshot restores");
    assert_eq!(resumed.state(), engine.state());
    assert!(resumed.move_piece(pos(7, 5), pos(4, 2)));
}

#[test]
fn seeded_random_playouts_keep_invariants() {
    for (seed, legality) in [
        (7, MoveLegality::PseudoLegal),
        (11, MoveLegality::PseudoLegal),
        (23, MoveLegality::Legal),
        (42, MoveLegality::Legal),
    ] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = started(EngineConfig {
            legality,
            ..EngineConfig::default()
        });

        for ply in 0..150 {
            if engine.is_game_over() {
                break;
            }
            let moves = all_moves(&engine);
            let Some(&(from, to)) = moves.choose(&mut rng) else {
                break;
            };

            let mover = engine.current_turn();
            assert!(
                !engine.board().is_friendly(to, mover),
                "seed {seed} ply {ply}: {from}-{to} lands on own piece"
            );
            assert!(engine.move_piece(from, to), "seed {seed} ply {ply}: {from}-{to} refused");
            assert_eq!(engine.current_turn(), mover.opposite());
            assert_eq!(engine.history().len(), ply + 1);

            for color in [Color::White, Color::Black] {
                assert_eq!(
                    engine.board().count(color) + engine.captured().of(color).len(),
                    16,
                    "seed {seed} ply {ply}: {color} pieces went missing"
                );
            }

            if legality == MoveLegality::Legal {
                assert!(!engine.is_in_check(mover), "seed {seed} ply {ply}: mover left in check");
            }
        }
    }
}
