use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    board::Board,
    config::{GameConfig, Settings},
    direction::Direction,
    entity::Food,
    point::Point,
    snake::Snake,
    state::{CollisionType, GameState, GameStatus},
};

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Whether the game is over after this tick
    pub terminated: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether eating added a segment
    pub grew: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

impl TickOutcome {
    fn moved(ate_food: bool, grew: bool) -> Self {
        Self {
            terminated: false,
            ate_food,
            grew,
            collision: None,
        }
    }

    fn ended(collision: Option<CollisionType>) -> Self {
        Self {
            terminated: true,
            ate_food: false,
            grew: false,
            collision,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose random draws are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a brand-new game from the submitted settings
    pub fn reset(&mut self, board: Board, settings: &Settings) -> GameState {
        let direction = Direction::random(&mut self.rng);
        let snake = Snake::new(settings.caste, settings.color.clone(), board.midpoint(), direction)
            .with_speed(self.config.initial_speed);
        let food = Food::new(board.random_position(&mut self.rng));

        info!(
            caste = snake.caste_label(),
            width = board.width,
            height = board.height,
            ?direction,
            "new game"
        );

        GameState::new(board, snake, food).with_name(settings.name.clone())
    }

    /// Steer the head. Ignored once the game is over.
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        if state.is_running() {
            state.snake.set_direction(direction);
        }
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::ended(None);
        }

        let next_head = state.snake.next_head_position();

        if let Some(collision) = Self::check_collision(state, next_head) {
            state.status = GameStatus::Over;
            state.snake.kill();
            info!(
                ?collision,
                score = state.snake.score,
                size = state.snake.size(),
                ticks = state.ticks,
                "game over"
            );
            return TickOutcome::ended(Some(collision));
        }

        state.snake.slither();

        let mut ate_food = false;
        let mut grew = false;

        if state.snake.is_head_on(&state.food) {
            ate_food = true;
            state.snake.increment_score();
            state.snake.speed_up();
            grew = state.snake.grow(&mut self.rng).is_some();

            // The new food may land on the snake; it is not re-drawn
            state.food = Food::new(state.board.random_position(&mut self.rng));

            debug!(
                score = state.snake.score,
                speed = state.snake.speed,
                grew,
                food = ?state.food.position,
                "food eaten"
            );
        }

        state.ticks += 1;

        TickOutcome::moved(ate_food, grew)
    }

    /// Check if the next head position ends the game
    fn check_collision(state: &GameState, next_head: Point) -> Option<CollisionType> {
        if !state.board.is_inside(next_head) {
            return Some(CollisionType::Wall);
        }

        // Tested against current positions, so the cell the tail is about to
        // leave still counts
        if state.snake.occupies(next_head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::caste::Caste;

    fn engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::small(), 11)
    }

    fn state_at(caste: Caste, head: Point, direction: Direction, board: Board, food: Point) -> GameState {
        GameState::new(board, Snake::new(caste, "red", head, direction), Food::new(food))
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        let settings = Settings {
            caste: Caste::Tssish,
            name: "Tsss".to_string(),
            ..Default::default()
        };
        let state = engine.reset(Board::new(10, 10), &settings);

        assert!(state.is_running());
        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.size(), 1);
        assert_eq!(state.snake.caste, Caste::Tssish);
        assert_eq!(state.snake.head().position, Point::new(5, 5));
        assert!(state.snake.direction().is_some());
        assert!(state.board.is_inside(state.food.position));
        assert_eq!(state.name, "Tsss");
    }

    #[test]
    fn test_reset_uses_configured_speed() {
        let config = GameConfig {
            initial_speed: 2.0,
            ..GameConfig::small()
        };
        let mut engine = GameEngine::with_seed(config, 1);
        let state = engine.reset(Board::new(4, 4), &Settings::default());
        assert_eq!(state.snake.speed, 2.0);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(5, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(0, 0),
        );

        let outcome = engine.tick(&mut state);

        assert!(!outcome.terminated);
        assert!(!outcome.ate_food);
        assert_eq!(state.snake.head().position, Point::new(6, 5));
        assert_eq!(state.ticks, 1);
        assert!(state.is_running());
    }

    #[test]
    fn test_food_consumption() {
        for caste in [Caste::Sssish, Caste::Hssish, Caste::Tssish] {
            let mut engine = engine();
            let mut state = state_at(
                caste,
                Point::new(5, 5),
                Direction::Right,
                Board::new(10, 10),
                Point::new(6, 5),
            );

            let outcome = engine.tick(&mut state);

            assert!(outcome.ate_food);
            assert!(outcome.grew);
            assert_eq!(state.snake.score, caste.profile().score_increment);
            assert_eq!(state.snake.size(), 2);
            assert!(state.board.is_inside(state.food.position));
        }
    }

    #[test]
    fn test_kssish_food_consumption() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Kssish,
            Point::new(5, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(6, 5),
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_food);
        assert_eq!(state.snake.score, 10);
        assert_eq!(state.snake.size(), if outcome.grew { 2 } else { 1 });
    }

    #[test]
    fn test_eating_speeds_up_next_interval() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(5, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(6, 5),
        );
        let before = state.tick_interval();

        engine.tick(&mut state);

        assert!(state.tick_interval() < before);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(0, 0),
            Direction::Right,
            Board::new(1, 1),
            Point::new(0, 0),
        );

        let outcome = engine.tick(&mut state);

        assert!(outcome.terminated);
        assert_eq!(outcome.collision, Some(CollisionType::Wall));
        assert_eq!(state.status, GameStatus::Over);
        assert!(state.snake.is_dead());
        // Nothing moved
        assert_eq!(state.snake.head().position, Point::new(0, 0));
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(2, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(3, 5),
        );

        // Eat to grow to length 2, then slither once so the tail trails
        engine.tick(&mut state);
        state.food = Food::new(Point::new(9, 9));
        engine.tick(&mut state);
        assert_eq!(state.snake.size(), 2);

        // Turn back into the neck
        engine.steer(&mut state, Direction::Left);
        let outcome = engine.tick(&mut state);

        assert!(outcome.terminated);
        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_tail_cell_counts_as_occupied() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = state_at(
            Caste::Sssish,
            Point::new(0, 0),
            Direction::Right,
            Board::new(10, 10),
            Point::new(9, 9),
        );
        for _ in 0..3 {
            state.snake.grow(&mut rng);
        }

        // Coil the four segments into a 2x2 square
        engine.tick(&mut state);
        engine.steer(&mut state, Direction::Down);
        engine.tick(&mut state);
        engine.steer(&mut state, Direction::Left);
        let outcome = engine.tick(&mut state);
        assert!(!outcome.terminated);
        assert_eq!(state.snake.head().position, Point::new(0, 1));
        assert_eq!(state.snake.tail().position, Point::new(0, 0));

        // The tail would vacate (0,0) this tick, but it still counts
        engine.steer(&mut state, Direction::Up);
        assert_eq!(state.snake.next_head_position(), state.snake.tail().position);
        let outcome = engine.tick(&mut state);
        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
        assert_eq!(state.status, GameStatus::Over);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = engine();
        let mut state = engine.reset(Board::new(10, 10), &Settings::default());
        state.status = GameStatus::Over;
        let before = state.clone();

        let outcome = engine.tick(&mut state);

        assert!(outcome.terminated);
        assert_eq!(outcome.collision, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_steer_ignored_after_game_over() {
        let engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(5, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(0, 0),
        );

        engine.steer(&mut state, Direction::Up);
        assert_eq!(state.snake.direction(), Some(Direction::Up));

        state.status = GameStatus::Over;
        engine.steer(&mut state, Direction::Down);
        assert_eq!(state.snake.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_reverse_allowed_on_single_segment() {
        let mut engine = engine();
        let mut state = state_at(
            Caste::Sssish,
            Point::new(5, 5),
            Direction::Right,
            Board::new(10, 10),
            Point::new(0, 0),
        );

        engine.steer(&mut state, Direction::Left);
        let outcome = engine.tick(&mut state);

        assert!(!outcome.terminated);
        assert_eq!(state.snake.head().position, Point::new(4, 5));
    }
}
