use std::thread::sleep;

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{Engine, TickResult};
use crate::input::{key_action, KeyAction};
use crate::render::Renderer;
use crate::term::TermManager;

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Lost { score: usize },
    Won { score: usize },
    Quit,
}

/// Non-steering keys seen in one batch of input.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Controls {
    pub pause_toggles: usize,
    pub quit: bool,
}

/// Hands every turn in `keys` to the engine, in order, and collects the rest.
/// Keys after a quit are dropped.
pub fn route_keys<R: Rng>(engine: &mut Engine<R>, keys: &[KeyEvent]) -> Controls {
    let mut controls = Controls::default();

    for key_ev in keys {
        match key_action(key_ev) {
            KeyAction::Turn(dir) => engine.steer(dir),
            KeyAction::Pause => controls.pause_toggles += 1,
            KeyAction::Quit => {
                controls.quit = true;
                break;
            }
            KeyAction::None => {}
        }
    }

    controls
}

/// One game in a real terminal. Raw mode is held until this is dropped.
pub struct SnakeGame {
    config: GameConfig,
    paused: bool,
    term: TermManager,
    renderer: Renderer,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        let term = TermManager::acquire(config.terminal_size())?;
        Ok(SnakeGame { config, paused: false, term, renderer: Renderer::new() })
    }

    /// Returns `false` if the player quit instead of starting.
    pub fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "hjkl, arrow keys or WASD to move",
            "p or Esc to pause",
            "q or CTRL+C to quit",
            "",
            "Press any key to begin",
        ];

        self.renderer.show_message(&mut self.term, lines)?;
        let key = self.term.read_key_blocking()?;

        Ok(key_action(&key) != KeyAction::Quit)
    }

    pub fn play<R: Rng>(&mut self, rng: R) -> Result<Outcome> {
        let mut engine = Engine::new(&self.config, rng);
        info!("game started, apple at {:?}", engine.apple());

        let status = self.status(engine.score());
        self.renderer.draw(&mut self.term, engine.grid(), &status)?;

        loop {
            let keys = self.term.read_key_events_queue()?;
            let controls = route_keys(&mut engine, &keys);
            if controls.quit {
                info!("quit with score {}", engine.score());
                return Ok(Outcome::Quit);
            }
            if controls.pause_toggles % 2 == 1 {
                self.toggle_pause();
            }

            if !self.paused {
                match engine.tick()? {
                    TickResult::Crashed { .. } => {
                        let status = format!("Game over! Score: {}", engine.score());
                        self.renderer.draw_defeat(&mut self.term, engine.grid(), &status)?;
                        return Ok(Outcome::Lost { score: engine.score() });
                    }
                    TickResult::BoardFull => {
                        let status = format!("You won! Score: {}", engine.score());
                        self.renderer.draw(&mut self.term, engine.grid(), &status)?;
                        return Ok(Outcome::Won { score: engine.score() });
                    }
                    TickResult::Moved { .. } | TickResult::Over => {}
                }
            }

            let status = self.status(engine.score());
            self.renderer.draw(&mut self.term, engine.grid(), &status)?;
            sleep(self.config.tick_interval);
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn status(&self, score: usize) -> String {
        if self.paused {
            format!("Score: {}  (paused, p to resume)", score)
        } else {
            format!("Score: {}", score)
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
    }
}
