use std::fs;
use std::path::PathBuf;

use rchess::game::piece::{Color, Occupant, Piece, PieceKind};
use rchess::game::square::Square;
use rchess::store::{Backend, BoardStore, FileBackend, MemoryBackend, StoreError};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rchess-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn memory_store() -> BoardStore<MemoryBackend> {
    BoardStore::new(MemoryBackend::new())
}

#[test]
fn test_unknown_owner_reads_as_empty() {
    let store = memory_store();
    assert_eq!(store.get("alice", sq("e2")).unwrap(), Occupant::Empty);
    let snapshot = store.snapshot("alice").unwrap();
    assert!(snapshot.iter().flatten().all(|o| o.is_empty()));
    assert_eq!(store.turn("alice").unwrap(), Color::White);
}

#[test]
fn test_initialize_sets_the_standard_layout() {
    let mut store = memory_store();
    store.initialize("alice").unwrap();
    let snapshot = store.snapshot("alice").unwrap();
    let count = |color| {
        snapshot
            .iter()
            .flatten()
            .filter(|o| o.color() == Some(color))
            .count()
    };
    assert_eq!(count(Color::White), 16);
    assert_eq!(count(Color::Black), 16);
    assert_eq!(
        store.get("alice", sq("e1")).unwrap(),
        Occupant::Piece(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        snapshot[0][3],
        Occupant::Piece(Piece::new(PieceKind::Queen, Color::Black))
    );
    for row in &snapshot[2..6] {
        assert!(row.iter().all(|o| o.is_empty()));
    }
}

#[test]
fn test_initialize_is_idempotent_and_resets_turn() {
    let mut store = memory_store();
    store.initialize("alice").unwrap();
    store.play("alice", "e2", "e4").unwrap();
    assert_eq!(store.turn("alice").unwrap(), Color::Black);

    let first = store.initialize("alice").unwrap();
    let second = store.initialize("alice").unwrap();
    assert_eq!(first, second);
    assert_eq!(store.turn("alice").unwrap(), Color::White);
    assert!(store.get("alice", sq("e4")).unwrap().is_empty());
}

#[test]
fn test_owners_are_isolated() {
    let mut store = memory_store();
    store.initialize("alice").unwrap();
    store.initialize("bob").unwrap();
    store.play("alice", "e2", "e4").unwrap();
    assert!(store.get("bob", sq("e4")).unwrap().is_empty());
    assert_eq!(store.turn("bob").unwrap(), Color::White);
    assert_eq!(store.backend().len(), 2);
}

#[test]
fn test_set_replaces_the_square() {
    let mut store = memory_store();
    let knight = Occupant::Piece(Piece::new(PieceKind::Knight, Color::Black));
    store.set("alice", sq("c6"), knight).unwrap();
    assert_eq!(store.get("alice", sq("c6")).unwrap(), knight);
    store.set("alice", sq("c6"), Occupant::Empty).unwrap();
    assert_eq!(store.get("alice", sq("c6")).unwrap(), Occupant::Empty);
    // A board created by `set` starts empty.
    assert!(store.get("alice", sq("e2")).unwrap().is_empty());
}

#[test]
fn test_open_initializes_only_on_first_visit() {
    let mut store = memory_store();
    let game = store.open("alice").unwrap();
    assert_eq!(game.turn, Color::White);
    store.play("alice", "g1", "f3").unwrap();
    let game = store.open("alice").unwrap();
    assert_eq!(game.turn, Color::Black);
    assert!(game.board.is_empty(sq("g1")));
}

#[test]
fn test_turns_alternate_and_rejections_change_nothing() {
    let mut store = memory_store();
    store.initialize("alice").unwrap();

    let out = store.apply_move("alice", "e2", "e4", Color::White).unwrap();
    assert!(out.accepted);
    assert_eq!(out.turn, Color::Black);

    let before = store.snapshot("alice").unwrap();
    for (from, to) in [("e4", "e5"), ("e5", "e6"), ("e9", "e4"), ("h8", "h5")] {
        let out = store.play("alice", from, to).unwrap();
        assert!(!out.accepted, "{from} -> {to}");
        assert_eq!(out.turn, Color::Black);
        assert_eq!(store.snapshot("alice").unwrap(), before);
        assert_eq!(store.turn("alice").unwrap(), Color::Black);
    }

    assert!(store.play("alice", "d7", "d5").unwrap().accepted);

    let out = store.apply_move("alice", "e4", "d5", Color::Black).unwrap();
    assert!(!out.accepted);
    assert_eq!(out.message, "It is black's turn.");
    assert_eq!(out.turn, Color::Black);

    let before = store.snapshot("alice").unwrap();
    let out = store.play("alice", "d1", "d3").unwrap();
    assert!(!out.accepted);
    assert_eq!(out.message, "Illegal queen move or path is blocked.");
    assert_eq!(store.snapshot("alice").unwrap(), before);
    assert_eq!(store.turn("alice").unwrap(), Color::White);

    let out = store.play("alice", "e4", "d5").unwrap();
    assert!(out.accepted);
    assert_eq!(
        store.get("alice", sq("d5")).unwrap(),
        Occupant::Piece(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(store.turn("alice").unwrap(), Color::Black);
}

#[test]
fn test_moving_without_a_board_is_rejected() {
    let mut store = memory_store();
    let out = store.play("ghost", "e2", "e4").unwrap();
    assert!(!out.accepted);
    assert_eq!(out.message, "Source square not found.");
    assert_eq!(out.turn, Color::White);
    assert!(store.backend().is_empty());
}

#[test]
fn test_end_discards_the_board() {
    let mut store = memory_store();
    store.initialize("alice").unwrap();
    assert!(store.end("alice").unwrap());
    assert!(!store.end("alice").unwrap());
    assert!(store.get("alice", sq("e1")).unwrap().is_empty());
}

#[test]
fn test_file_backend_persists_across_instances() {
    let dir = temp_dir("persist");
    {
        let mut store = BoardStore::new(FileBackend::new(&dir));
        store.initialize("alice").unwrap();
        assert!(store.play("alice", "e2", "e4").unwrap().accepted);
    }

    let mut store = BoardStore::new(FileBackend::new(&dir));
    assert_eq!(store.turn("alice").unwrap(), Color::Black);
    assert_eq!(
        store.get("alice", sq("e4")).unwrap(),
        Occupant::Piece(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert!(store.get("alice", sq("e2")).unwrap().is_empty());

    let content = fs::read_to_string(store.backend().path_for("alice")).unwrap();
    assert!(content.contains("turn: black"));
    assert!(content.contains("PPPP.PPP"));

    assert!(store.end("alice").unwrap());
    assert!(!store.backend().path_for("alice").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_backend_reports_corrupt_files() {
    let dir = temp_dir("corrupt");
    let backend = FileBackend::new(&dir);
    fs::write(backend.path_for("bob"), "turn: white\nrows: [\"xxxxxxxx\"]\n").unwrap();
    assert!(matches!(backend.load("bob"), Err(StoreError::Corrupt { .. })));

    fs::write(backend.path_for("bob"), "turn: purple\nrows: []\n").unwrap();
    assert!(matches!(backend.load("bob"), Err(StoreError::Yaml { .. })));

    let store = BoardStore::new(backend);
    assert!(store.snapshot("bob").is_err());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_backend_save_replaces_existing_file() {
    let dir = temp_dir("replace");
    let mut backend = FileBackend::new(&dir);
    let path = backend.path_for("carol");

    let mut store = BoardStore::new(backend.clone());
    store.initialize("carol").unwrap();
    assert!(store.play("carol", "b1", "c3").unwrap().accepted);
    let game = store.open("carol").unwrap();

    backend.save("carol", &game).unwrap();
    assert_eq!(backend.load("carol").unwrap(), Some(game));
    assert!(path.exists());
    let leftovers: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    let _ = fs::remove_dir_all(&dir);
}
