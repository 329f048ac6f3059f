use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use torus_snake::config::GameConfig;
use torus_snake::engine::{Engine, GameState, TickResult};
use torus_snake::game::{route_keys, Controls};
use torus_snake::grid::Cell;
use torus_snake::snake::{Direction, Snake};
use torus_snake::Coords;

fn new_game(seed: u64) -> Engine<StdRng> {
    Engine::new(&GameConfig::default(), StdRng::seed_from_u64(seed))
}

fn body(engine: &Engine<StdRng>) -> Vec<Coords> {
    engine.snake().segments().copied().collect()
}

fn is_orthogonal_neighbour(a: Coords, b: Coords, bounds: Coords) -> bool {
    [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
        .iter()
        .any(|dir| dir.step(a, bounds) == b)
}

#[test]
fn first_tick_slides_the_snake_right() {
    let mut engine = new_game(11);
    assert!(engine.place_apple((2, 2)));
    assert_eq!(body(&engine), vec![(14, 10), (13, 10), (12, 10)]);

    engine.tick().unwrap();

    assert_eq!(body(&engine), vec![(15, 10), (14, 10), (13, 10)]);
    assert_eq!(engine.grid().get((12, 10)), Cell::Empty);
    assert_eq!(engine.grid().count(Cell::Snake), 3);
    assert_eq!(engine.state(), GameState::Running);
    assert_eq!(engine.score(), 0);
}

#[test]
fn apple_ahead_grows_the_tail_away_from_the_body() {
    let mut engine = new_game(12);
    assert!(engine.place_apple((15, 10)));
    let old_tail = engine.snake().tail();

    engine.tick().unwrap();

    let bounds = engine.grid().size();
    let segments = body(&engine);
    assert_eq!(segments.len(), 4);
    assert_eq!(engine.score(), 1);

    // The old tail segment shifted forward; the new one sits behind it
    let new_tail = segments[3];
    assert!(is_orthogonal_neighbour(new_tail, segments[2], bounds));
    assert_eq!(new_tail, old_tail);
    assert_eq!(segments[2], (13, 10));

    let apple = engine.apple().unwrap();
    assert_ne!(apple, (15, 10));
    assert_eq!(engine.grid().count(Cell::Apple), 1);
    assert_eq!(engine.grid().get(apple), Cell::Apple);
}

#[test]
fn wrapping_across_the_right_edge() {
    let config = GameConfig::default();
    let snake = Snake::new((29, 3), 3, config.bounds());
    let mut engine = Engine::with_snake(&config, snake, Direction::Right, StdRng::seed_from_u64(3));
    assert!(engine.place_apple((10, 10)));

    engine.tick().unwrap();
    assert_eq!(body(&engine), vec![(0, 3), (29, 3), (28, 3)]);

    engine.steer(Direction::Up);
    for _ in 0..4 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.snake().head(), (0, 19));
    assert_eq!(engine.grid().count(Cell::Snake), 3);
}

#[test]
fn circling_into_itself_ends_the_game() {
    let config = GameConfig::default();
    let snake = Snake::new((10, 5), 5, config.bounds());
    let mut engine = Engine::with_snake(&config, snake, Direction::Right, StdRng::seed_from_u64(4));
    assert!(engine.place_apple((20, 15)));

    engine.steer(Direction::Down);
    engine.tick().unwrap();
    engine.steer(Direction::Left);
    engine.tick().unwrap();
    engine.steer(Direction::Up);

    assert_eq!(engine.tick().unwrap(), TickResult::Crashed { at: (9, 5) });
    assert_eq!(engine.state(), GameState::Lost);
    assert_eq!(engine.score(), 2);
    assert_eq!(engine.tick().unwrap(), TickResult::Over);
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn empty_key_queue_leaves_the_game_alone() {
    let mut engine = new_game(13);
    assert!(engine.place_apple((2, 2)));
    let before = (body(&engine), engine.direction(), engine.apple(), engine.state());

    for _ in 0..3 {
        assert_eq!(route_keys(&mut engine, &[]), Controls::default());
    }
    assert_eq!((body(&engine), engine.direction(), engine.apple(), engine.state()), before);

    engine.tick().unwrap();
    assert_eq!(engine.direction(), Direction::Right);
    assert_eq!(engine.snake().head(), (15, 10));
}

#[test]
fn reversal_key_does_not_turn_the_snake() {
    let mut engine = new_game(14);
    assert!(engine.place_apple((2, 2)));

    assert_eq!(route_keys(&mut engine, &[key(KeyCode::Char('h'))]), Controls::default());
    assert_eq!(engine.direction(), Direction::Right);

    engine.tick().unwrap();
    assert_eq!(engine.direction(), Direction::Right);
    assert_eq!(engine.snake().head(), (15, 10));
}

#[test]
fn key_batch_turns_pauses_and_stops_at_quit() {
    let mut engine = new_game(15);
    assert!(engine.place_apple((2, 2)));

    let keys = [key(KeyCode::Up), key(KeyCode::Esc), key(KeyCode::Char('q')), key(KeyCode::Char('j'))];
    assert_eq!(route_keys(&mut engine, &keys), Controls { pause_toggles: 1, quit: true });

    // The turn queued after the quit was never seen
    engine.tick().unwrap();
    assert_eq!(engine.snake().head(), (14, 9));
}

#[test]
fn same_seed_same_game() {
    let mut a = new_game(99);
    let mut b = new_game(99);
    assert_eq!(a.apple(), b.apple());

    for _ in 0..30 {
        let ra = a.tick().unwrap();
        let rb = b.tick().unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.apple(), b.apple());
    }
}
