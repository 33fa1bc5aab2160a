use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{Board, Direction, GameConfig, GameEngine, GameState, Settings};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::scheduler::TickScheduler;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    /// Applied on the next restart
    settings: Settings,
    scheduler: TickScheduler,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    /// Build the first game. The clock does not start until [`HumanMode::start`].
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(mut engine: GameEngine) -> Self {
        let settings = engine.config().settings.clone();
        let board = resolve_board(engine.config());
        let state = engine.reset(board, &settings);

        Self {
            engine,
            state,
            settings,
            scheduler: TickScheduler::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn manual_tick(&self) -> bool {
        self.engine.config().manual_tick
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        self.start();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Timed game tick
                _ = self.scheduler.expired() => {
                    if self.state.is_running() {
                        self.tick();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.state.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics, self.settings.caste);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.scheduler.cancel();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply(action);
        }
    }

    /// React to one player action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => self.steer(direction),
            KeyAction::SelectCaste(caste) => {
                debug!(caste = caste.label(), "caste selected for next game");
                self.settings.caste = caste;
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn steer(&mut self, direction: Direction) {
        if !self.state.is_running() {
            return;
        }

        self.engine.steer(&mut self.state, direction);

        if self.manual_tick() || self.engine.config().tick_on_steer {
            self.tick();
        }
    }

    /// Cancel whatever is pending, advance once, then schedule the next
    /// tick at the snake's current speed
    pub fn tick(&mut self) {
        self.scheduler.cancel();

        let outcome = self.engine.tick(&mut self.state);

        if outcome.terminated {
            if outcome.collision.is_some() {
                self.metrics
                    .on_game_over(self.state.snake.score, self.state.snake.size());
            }
            return;
        }

        if !self.manual_tick() {
            self.scheduler.arm(self.state.tick_interval());
        }
    }

    /// Start the clock on the game already in `state` and take its first
    /// step
    pub fn start(&mut self) {
        self.metrics.on_game_start();
        info!(manual_tick = self.manual_tick(), "game started");

        self.tick();
    }

    /// Throw the current game away and start a new one from the current
    /// settings
    pub fn restart(&mut self) {
        self.scheduler.cancel();

        let board = resolve_board(self.engine.config());
        self.state = self.engine.reset(board, &self.settings);

        self.start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// The configured board, or one fitted to the terminal for any dimension
/// left unset
fn resolve_board(config: &GameConfig) -> Board {
    if let Some(board) = config.fixed_board() {
        return board;
    }
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let (cols, rows) = Renderer::board_area(cols, rows);
    config.board_within(Board::fit(cols, rows))
}
