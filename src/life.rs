//! Drivers that pace a board and show its generations

use crate::board::Board;
use crate::config::{LifeConfig, MAX_INTERVAL, MIN_INTERVAL};
use crate::terminal::Terminal;
use crossterm::event::{KeyCode, KeyModifiers};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Poll period while paused
const PAUSED_POLL: Duration = Duration::from_millis(100);

/// Runtime state for interactive controls
pub struct RunState {
    pub interval: Duration,
    pub paused: bool,
    step: bool,
}

impl RunState {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            paused: false,
            step: false,
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('n') if self.paused => self.step = true,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.interval = (self.interval / 2).max(MIN_INTERVAL);
            }
            KeyCode::Char('-') => {
                self.interval = (self.interval * 2).min(MAX_INTERVAL);
            }
            _ => {}
        }
        false
    }

    /// Consume a pending single-step request
    fn take_step(&mut self) -> bool {
        std::mem::take(&mut self.step)
    }

    fn status(&self, board: &Board) -> String {
        format!(
            " gen {} | pop {} | {}ms{} | space pause  n step  +/- speed  q quit ",
            board.generation(),
            board.population(),
            self.interval.as_millis(),
            if self.paused { " | PAUSED" } else { "" },
        )
    }
}

/// Run the board with the mode chosen in `config`
pub fn run(config: &LifeConfig, board: &mut Board) -> io::Result<()> {
    if config.print {
        tracing::info!(frames = ?config.generations, "print mode");
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return print_generations(board, config.generations, config.interval, &mut out);
    }

    tracing::info!(dim = board.dim(), interval = ?config.interval, "interactive mode");
    run_interactive(board, config.generations, config.interval)
}

/// Write `frames` generations (forever when `None`) to `out`, each followed
/// by an empty line, sleeping `interval` between them.
pub fn print_generations<W: Write>(
    board: &mut Board,
    frames: Option<u64>,
    interval: Duration,
    out: &mut W,
) -> io::Result<()> {
    let mut shown = 0u64;
    loop {
        write!(out, "{}", board)?;
        writeln!(out)?;
        out.flush()?;
        shown += 1;

        if frames.is_some_and(|n| shown >= n) {
            return Ok(());
        }
        std::thread::sleep(interval);
        board.advance();
    }
}

fn run_interactive(board: &mut Board, frames: Option<u64>, interval: Duration) -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut state = RunState::new(interval);
    let mut shown = 0u64;

    loop {
        term.draw_frame(&board.render(), Some(&state.status(board)))?;
        shown += 1;
        let last = frames.is_some_and(|n| shown >= n);

        let deadline = Instant::now() + state.interval;
        loop {
            let now = Instant::now();
            if !state.paused && now >= deadline {
                break;
            }
            let timeout = if state.paused {
                PAUSED_POLL
            } else {
                deadline - now
            };

            if let Some((code, mods)) = term.wait_key(timeout)? {
                if state.handle_key(code, mods) {
                    tracing::info!(generation = board.generation(), "quit requested");
                    return Ok(());
                }
                if state.take_step() {
                    break;
                }
                term.draw_frame(&board.render(), Some(&state.status(board)))?;
            }
        }

        if last {
            return Ok(());
        }
        board.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Catalog;

    #[test]
    fn print_writes_requested_frames() {
        let catalog = Catalog::builtin();
        let mut board = Board::new(5, catalog.get("blinker").unwrap()).unwrap();
        let mut out = Vec::new();
        print_generations(&mut board, Some(2), Duration::from_millis(1), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "     \n     \n OOO \n     \n     \n\n\
             \x20    \n  O  \n  O  \n  O  \n     \n\n"
        );
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn print_single_frame_does_not_advance() {
        let catalog = Catalog::builtin();
        let mut board = Board::new(3, catalog.get("glider").unwrap()).unwrap();
        let mut out = Vec::new();
        print_generations(&mut board, Some(1), Duration::from_secs(60), &mut out).unwrap();
        assert_eq!(out, b" O \n  O\nOOO\n\n");
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut state = RunState::new(Duration::from_secs(1));
        assert!(state.handle_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!state.handle_key(KeyCode::Char('c'), KeyModifiers::NONE));
    }

    #[test]
    fn step_only_while_paused() {
        let mut state = RunState::new(Duration::from_secs(1));
        state.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(!state.take_step());

        state.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(state.paused);
        state.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(state.take_step());
        assert!(!state.take_step());
    }

    #[test]
    fn speed_keys_are_clamped() {
        let mut state = RunState::new(Duration::from_millis(40));
        state.handle_key(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(state.interval, Duration::from_millis(20));
        for _ in 0..5 {
            state.handle_key(KeyCode::Char('+'), KeyModifiers::NONE);
        }
        assert_eq!(state.interval, MIN_INTERVAL);

        let mut state = RunState::new(Duration::from_secs(6));
        state.handle_key(KeyCode::Char('-'), KeyModifiers::NONE);
        assert_eq!(state.interval, MAX_INTERVAL);
    }

    #[test]
    fn status_shows_generation_and_pause() {
        let catalog = Catalog::builtin();
        let board = Board::new(5, catalog.get("glider").unwrap()).unwrap();
        let mut state = RunState::new(Duration::from_millis(250));
        assert!(state.status(&board).contains("gen 0 | pop 5 | 250ms"));
        state.paused = true;
        assert!(state.status(&board).contains("PAUSED"));
    }
}
