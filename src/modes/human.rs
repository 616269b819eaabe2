use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{Instant, Interval, interval, interval_at},
};

use super::game_loop::GameLoop;
use crate::game::GameEngine;
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, StatusLine};

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    game: GameLoop,
    renderer: Renderer,
    tick_interval: Duration,
    should_quit: bool,
    paused: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let tick_interval = engine.config().tick_interval();
        Self {
            game: GameLoop::new(engine),
            renderer: Renderer::new(),
            tick_interval,
            should_quit: false,
            paused: false,
        }
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
        let cleanup = self.cleanup_terminal(&mut terminal);

        first_error(result, cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let (tx, mut rx) = mpsc::channel(32);
        let input_task = spawn_input_task(tx);

        let mut tick_timer = tick_schedule(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        let outcome = loop {
            tokio::select! {
                maybe_action = rx.recv() => {
                    match maybe_action {
                        Some(action) => self.handle_action(action),
                        None => {
                            log::warn!("Input stream closed, stopping");
                            self.should_quit = true;
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.paused {
                        if let Err(err) = self.game.tick() {
                            break Err(anyhow::Error::new(err).context("Game state corrupted"));
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let status = StatusLine {
                        ticks: self.game.ticks(),
                        paused: self.paused,
                    };
                    let board = &self.game.current().board;
                    if let Err(err) = terminal.draw(|frame| self.renderer.render(frame, board, status)) {
                        break Err(anyhow::Error::new(err).context("Failed to draw frame"));
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        input_task.abort();
        outcome
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                self.game.request_direction(direction);
            }
            KeyAction::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            KeyAction::Restart => {
                self.game.restart();
                self.paused = false;
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
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

/// Tick timer whose first tick comes one full period after start
fn tick_schedule(period: Duration) -> Interval {
    interval_at(Instant::now() + period, period)
}

/// Keep the game's error when terminal cleanup fails as well
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            log::error!("Terminal cleanup also failed: {cleanup_err:#}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), cleanup) => cleanup,
    }
}

/// Forward key presses to the game loop over a channel
fn spawn_input_task(tx: mpsc::Sender<KeyAction>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let handler = InputHandler::new();
        let mut event_stream = EventStream::new();

        while let Some(event) = event_stream.next().await {
            match event {
                // Only process key press events, not release
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    let action = handler.handle_key_event(key);
                    if action == KeyAction::None {
                        continue;
                    }
                    if tx.send(action).await.is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    log::warn!("Terminal event stream failed: {err}");
                    break;
                }
            }
        }
    })
}
