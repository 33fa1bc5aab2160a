use caste_snake::game::*;

fn engine() -> GameEngine {
    GameEngine::with_seed(GameConfig::small(), 99)
}

fn game(caste: Caste, board: Board, head: Point, direction: Direction, food: Point) -> GameState {
    GameState::new(
        board,
        Snake::new(caste, "#721745", head, direction),
        Food::new(food),
    )
}

#[test]
fn single_tick_without_food_moves_head() {
    let mut engine = engine();
    let mut state = game(
        Caste::Sssish,
        Board::new(10, 10),
        Point::new(5, 5),
        Direction::Right,
        Point::new(0, 0),
    );

    let outcome = engine.tick(&mut state);

    assert!(!outcome.terminated);
    assert_eq!(state.snake.head().position, Point::new(6, 5));
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.food.position, Point::new(0, 0));
}

#[test]
fn eating_scores_by_caste_and_respawns_food() {
    for caste in Caste::ALL {
        let mut engine = engine();
        let mut state = game(
            caste,
            Board::new(10, 10),
            Point::new(5, 5),
            Direction::Right,
            Point::new(6, 5),
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_food, "{caste}");
        assert_eq!(state.snake.score, caste.profile().score_increment);
        assert!(state.board.is_inside(state.food.position));
        match caste {
            Caste::Kssish => assert!((1..=2).contains(&state.snake.size())),
            _ => assert_eq!(state.snake.size(), 2),
        }
        assert_eq!(state.snake.size() == 2, outcome.grew);
    }
}

#[test]
fn one_by_one_board_ends_on_first_tick() {
    let mut engine = engine();
    let mut state = game(
        Caste::Sssish,
        Board::new(1, 1),
        Point::new(0, 0),
        Direction::Right,
        Point::new(0, 0),
    );

    let outcome = engine.tick(&mut state);

    assert_eq!(outcome.collision, Some(CollisionType::Wall));
    assert_eq!(state.status, GameStatus::Over);

    // Over is terminal until a restart
    let again = engine.tick(&mut state);
    assert!(again.terminated);
    assert_eq!(state.snake.head().position, Point::new(0, 0));
}

#[test]
fn restart_replaces_game_completely() {
    let mut engine = engine();
    let board = Board::new(12, 8);
    let mut first = engine.reset(board, &Settings::default());
    first.snake.score = 70;
    first.status = GameStatus::Over;

    let settings = Settings {
        caste: Caste::Kssish,
        color: "green".to_string(),
        name: "Ksss".to_string(),
    };
    let second = engine.reset(board, &settings);

    assert_eq!(second.status, GameStatus::Running);
    assert_eq!(second.snake.score, 0);
    assert_eq!(second.snake.size(), 1);
    assert_eq!(second.snake.head().position, board.midpoint());
    assert_eq!(second.snake.caste, Caste::Kssish);
    assert_eq!(second.snake.color, "green");
    assert_eq!(second.snapshot().info.name, "Ksss");
}

#[test]
fn long_run_keeps_chain_invariants() {
    let mut engine = engine();
    let board = Board::new(12, 12);
    let mut state = engine.reset(board, &Settings::default());
    let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let mut eaten = 0;

    for step in 0..400 {
        if !state.is_running() {
            break;
        }
        if step % 3 == 0 {
            engine.steer(&mut state, turns[(step / 3) % turns.len()]);
        }
        // Keep feeding the snake right in front of its head
        state.food = Food::new(state.snake.next_head_position());

        let before: Vec<Option<Direction>> =
            state.snake.segments().iter().map(|s| s.direction).collect();
        let size_before = state.snake.size();
        let outcome = engine.tick(&mut state);
        if outcome.terminated {
            break;
        }
        eaten += 1;

        let segments = state.snake.segments();
        // Directions shift back by one; a grown tail starts without one
        for i in 1..size_before {
            assert_eq!(segments[i].direction, before[i - 1]);
        }
        assert!(segments[0].is_head);
        assert!(segments[segments.len() - 1].is_tail);
        assert_eq!(segments.iter().filter(|s| s.is_tail).count(), 1);
        assert_eq!(segments.iter().filter(|s| s.is_head).count(), 1);
    }

    assert!(eaten > 0);
    assert_eq!(state.snake.score, eaten * 10);
}
